use std::process::ExitCode;

use netkit_cli::commands::{self, CompareArgs, compare};
use netkit_cli::terminal::logging;
use netkit_common::error::ToolError;

fn main() -> ExitCode {
    let args = CompareArgs::parse_args();
    logging::init_logging();

    match compare::compare(args) {
        Ok(comparison) => match comparison.missing.into_iter().next() {
            Some(path) => ExitCode::from(ToolError::PathNotFound(path).exit_code()),
            None => ExitCode::SUCCESS,
        },
        Err(err) => commands::report_failure(&err),
    }
}
