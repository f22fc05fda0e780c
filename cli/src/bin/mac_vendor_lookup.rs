use std::process::ExitCode;

use netkit_cli::commands::{self, LookupArgs, lookup};
use netkit_cli::terminal::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = LookupArgs::parse_args();
    logging::init_logging();

    match lookup::lookup(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => commands::report_failure(&err),
    }
}
