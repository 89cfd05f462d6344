//! Deploy test contracts to a JSON-RPC node and check the resulting on-chain
//! state.
//!
//! Runs every test in order against the node at `host:port` and prints `OK` or
//! `ERROR` for each, followed by the diagnostics of the failed tests. This is
//! only the CLI front-end. All the logic is contained in the library
//! [`contract_probe`].

#![warn(clippy::all, clippy::cargo, clippy::pedantic)]

use std::io::{self, Write};
use std::process;

use clap::Parser;
use contract_probe::{
    build_test_suite,
    list_tests,
    run_tests,
    write_report,
    HarnessConfig,
    TestContext,
};
use exitcode::{OK, SOFTWARE};

use crate::args::Args;

mod args;

/// Exit code returned when at least one test fails.
const TESTS_FAILED: i32 = 1;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .compact()
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(true) => process::exit(OK),
        Ok(false) => process::exit(TESTS_FAILED),
        Err(e) => {
            eprintln!("Internal software error: {e}");
            process::exit(SOFTWARE);
        }
    }
}

/// Take the command line input arguments and run the tests.
///
/// Returns `true` if all the tests passed.
///
/// # Arguments
///
/// - `args`: The list of command line input arguments.
///
/// # Errors
///
/// Returns [`Err`] if the output can't be written to stdout. Failed tests are
/// not errors.
fn run(args: Args) -> anyhow::Result<bool> {
    let suite = build_test_suite();
    let mut stdout = io::stdout().lock();

    if args.list {
        list_tests(&mut stdout, &suite)?;
        return Ok(true);
    }

    let filter = args.filter.clone();
    let config = HarnessConfig::from(args);
    tracing::info!(host = %config.host, port = config.port, "Running tests");

    let context = TestContext::new(&config);
    let start_time = std::time::Instant::now();

    let summary = run_tests(&context, &suite, filter.as_deref(), &mut stdout)?;

    let elapsed = start_time.elapsed();
    tracing::info!(?elapsed, "Finished");

    write_report(&mut stdout, &summary)?;
    stdout.flush()?;

    Ok(summary.all_passed())
}
