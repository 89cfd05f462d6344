//! The module runner executes an ordered list of tests, one after the other,
//! and collects their outcomes.
//!
//! A test failing never stops the run: its error is captured in the
//! [`TestOutcome`] and the next test is started.

use std::fmt;
use std::io::{self, Write};

use crate::error::Error;
pub use crate::runner::outcome::{Failure, FailureKind, TestOutcome, TestSummary};
pub use crate::runner::report::{list_tests, write_report};

pub mod outcome;
pub mod report;

/// A test function. It receives the context shared by all the tests of the
/// run, usually a [`crate::scenarios::TestContext`].
pub type TestFn<C> = Box<dyn Fn(&C) -> Result<(), Error>>;

/// A single test case.
pub struct Test<C> {
    /// Test name (used for filtering and reporting).
    pub name: String,

    /// Optional description.
    pub description: Option<String>,

    /// The test function to run.
    pub run: TestFn<C>,
}

impl<C> fmt::Debug for Test<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Test")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<C> Test<C> {
    /// Constructs a new [`Test`].
    ///
    /// # Arguments
    ///
    /// - `name`: The name of the test.
    /// - `description`: A one-line description of the test.
    /// - `run`: The test function.
    pub fn new(
        name: &str,
        description: &str,
        run: impl Fn(&C) -> Result<(), Error> + 'static,
    ) -> Self {
        Test {
            name: name.to_string(),
            description: Some(description.to_string()),
            run: Box::new(run),
        }
    }

    /// Returns `true` if the test is selected by `filter`. Every test is
    /// selected when `filter` is `None`.
    #[must_use]
    pub fn matches(&self, filter: Option<&str>) -> bool {
        filter.map_or(true, |filter| self.name.contains(filter))
    }
}

/// Runs the tests selected by `filter` in order and returns their outcomes.
///
/// For each test, `Running '<name>'... ` is written to `out` before the test
/// starts and `OK` or `ERROR` after it ends.
///
/// # Arguments
///
/// - `context`: The context passed to every test.
/// - `tests`: The tests to run, in order.
/// - `filter`: If `Some`, only the tests whose name contains it are run.
/// - `out`: Where the progress lines are written.
///
/// # Errors
///
/// Returns [`Err`] only if writing to `out` fails. Test failures are reported
/// in the returned [`TestSummary`].
pub fn run_tests<C>(
    context: &C,
    tests: &[Test<C>],
    filter: Option<&str>,
    out: &mut impl Write,
) -> io::Result<TestSummary> {
    let mut summary = TestSummary::default();

    for test in tests.iter().filter(|t| t.matches(filter)) {
        write!(out, "Running '{}'... ", test.name)?;
        out.flush()?;

        let span = tracing::info_span!("test", name = %test.name);
        let result = span.in_scope(|| (test.run)(context));

        let failure = match result {
            Ok(()) => {
                writeln!(out, "OK")?;
                None
            }
            Err(error) => {
                tracing::debug!(name = %test.name, ?error, "Test failed");
                writeln!(out, "ERROR")?;
                Some(Failure::from(&error))
            }
        };

        summary.outcomes.push(TestOutcome {
            name: test.name.clone(),
            failure,
        });
    }

    Ok(summary)
}
