pub mod compare;
pub mod lookup;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use netkit_common::config::{
    DEFAULT_DELAY_SECS, DEFAULT_ENDPOINT, EnrichConfig, LOOKUP_TIMEOUT, LookupConfig,
};
use netkit_common::error::{GENERIC_EXIT_CODE, ToolError};

use crate::terminal::print;

#[derive(Parser, Debug)]
#[command(name = "compare-folders")]
#[command(about = "List the file names two folders have in common.")]
pub struct CompareArgs {
    /// First folder. Prompted for when omitted
    pub first: Option<PathBuf>,
    /// Second folder. Prompted for when omitted
    pub second: Option<PathBuf>,
}

impl CompareArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

const LOOKUP_EXAMPLES: &str = "\
Examples:
  mac-vendor-lookup devices.csv MAC_Address
  mac-vendor-lookup devices.csv mac_address devices_with_vendors.csv
  mac-vendor-lookup devices.csv mac_address devices_with_vendors.csv 0.5";

#[derive(Parser, Debug)]
#[command(name = "mac-vendor-lookup")]
#[command(about = "Add a Manufacturer column to a CSV of MAC addresses.")]
#[command(after_help = LOOKUP_EXAMPLES)]
pub struct LookupArgs {
    /// CSV file to read
    pub input_csv_file: PathBuf,
    /// Name of the column holding MAC addresses
    pub mac_column_name: String,
    /// Where to write the result [default: <input>_with_manufacturers.<ext>]
    pub output_csv_file: Option<PathBuf>,
    /// Pause between two lookups, in seconds
    #[arg(default_value_t = DEFAULT_DELAY_SECS, value_parser = parse_delay)]
    pub delay_seconds: f64,
    /// Base URL of the vendor lookup API
    #[arg(long, hide = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl LookupArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn enrich_config(&self) -> EnrichConfig {
        EnrichConfig::new(&self.input_csv_file, &self.mac_column_name)
            .with_output(self.output_csv_file.clone())
            .with_delay(Duration::from_secs_f64(self.delay_seconds))
    }

    pub fn lookup_config(&self) -> LookupConfig {
        LookupConfig {
            endpoint: self.endpoint.clone(),
            timeout: LOOKUP_TIMEOUT,
        }
    }
}

fn parse_delay(s: &str) -> Result<f64, String> {
    let delay: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number of seconds"))?;
    if !delay.is_finite() || delay < 0.0 {
        return Err(format!("delay must be zero or more seconds, got {s}"));
    }
    Ok(delay)
}

/// Prints a failed run and maps it to its exit code.
///
/// Errors that are not a [`ToolError`] fall in the catch-all class.
pub fn report_failure(err: &anyhow::Error) -> ExitCode {
    print::failure(&failure_message(err));
    ExitCode::from(exit_code_of(err))
}

/// The error and its causes on one line, each cause once.
pub fn failure_message(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

pub fn exit_code_of(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ToolError>()
        .map_or(GENERIC_EXIT_CODE, ToolError::exit_code)
}
