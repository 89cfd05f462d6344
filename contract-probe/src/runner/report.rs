//! This module writes the report printed at the end of a run and the list of
//! available tests.

use std::io::{self, Write};

use itertools::Itertools;

use crate::runner::{Test, TestSummary};

/// Writes the diagnostic block of every failed test, in the order they
/// failed, followed by the count of passed and failed tests.
///
/// Each block contains the test name, the error message, the error kind, the
/// chain of underlying causes and the full `Debug` dump of the error.
///
/// # Arguments
///
/// - `out`: Where the report is written.
/// - `summary`: The outcomes of the run.
///
/// # Errors
///
/// Returns [`Err`] if writing to `out` fails.
pub fn write_report(out: &mut impl Write, summary: &TestSummary) -> io::Result<()> {
    for (name, failure) in summary.failures() {
        writeln!(out, "\nError in {name}: {}\n", failure.message)?;
        writeln!(out, "  kind: {}", failure.kind)?;
        for cause in &failure.causes {
            writeln!(out, "  caused by: {cause}")?;
        }
        if !failure.detail.is_empty() {
            writeln!(out, "  detail:")?;
            for line in failure.detail.lines() {
                writeln!(out, "    {line}")?;
            }
        }
    }

    let failed = summary.outcomes.len() - summary.passed();
    writeln!(out, "\n{} passed, {failed} failed", summary.passed())
}

/// Writes the name and description of each test, one per line.
///
/// # Errors
///
/// Returns [`Err`] if writing to `out` fails.
pub fn list_tests<C>(out: &mut impl Write, tests: &[Test<C>]) -> io::Result<()> {
    let listing = tests
        .iter()
        .map(|test| match &test.description {
            Some(description) => format!("{} - {description}", test.name),
            None => test.name.clone(),
        })
        .join("\n");
    writeln!(out, "{listing}")
}
