//! ipscope: Network Endpoint Classifier
//!
//! Entry point for the ipscope binary.

use std::process::ExitCode;

use ipscope::cli::Cli;

mod app;
mod run;

use app::{exit_code, setup_tracing};
use run::RunError;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    setup_tracing(cli.verbose);

    run_application(cli)
}

/// Runs the report with a fresh runtime.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(cli: Cli) -> ExitCode {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    match runtime.block_on(run::execute(cli)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e @ RunError::ReferenceWithoutInterval { .. }) => {
            eprintln!("Error: {e}");
            exit_code::USAGE_ERROR
        }
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
