use std::path::{Path, PathBuf};
use std::time::Duration;

/// Base URL of the public vendor lookup API.
pub const DEFAULT_ENDPOINT: &str = "https://api.macvendors.com";

/// Upper bound on a single lookup request.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between two consecutive lookups, in seconds.
pub const DEFAULT_DELAY_SECS: f64 = 1.0;

/// Inserted between the input stem and extension to derive the output path.
pub const OUTPUT_SUFFIX: &str = "_with_manufacturers";

/// Name of the column appended to the enriched table.
pub const MANUFACTURER_COLUMN: &str = "Manufacturer";

/// Where and how vendor lookups are sent.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL; the MAC address is appended as the last path segment.
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: LOOKUP_TIMEOUT,
        }
    }
}

/// Everything a single enrichment run needs to know.
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    pub input: PathBuf,
    pub mac_column: String,
    /// Explicit output path. `None` derives one from `input`.
    pub output: Option<PathBuf>,
    /// Pause between lookups. Never applied after the last row.
    pub delay: Duration,
}

impl EnrichConfig {
    pub fn new(input: impl Into<PathBuf>, mac_column: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            mac_column: mac_column.into(),
            output: None,
            delay: Duration::from_secs_f64(DEFAULT_DELAY_SECS),
        }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The path the enriched table is written to.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => default_output_path(&self.input),
        }
    }
}

/// Derives `<dir>/<stem>_with_manufacturers<.ext>` from an input path.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let file_name = format!("{stem}{OUTPUT_SUFFIX}{extension}");
    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}
