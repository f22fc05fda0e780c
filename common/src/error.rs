use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code of the catch-all classification.
pub const GENERIC_EXIT_CODE: u8 = 1;

/// Failures that end (or, for a missing folder, degrade) a tool run.
///
/// Per-row lookup failures are not in here; they are recorded in the
/// output as a [`LookupOutcome`](crate::vendors::LookupOutcome).
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Folder not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("The CSV file is empty")]
    EmptyInput,

    #[error(
        "Column '{column}' not found in CSV file. Available columns: [{}]",
        quoted_list(.available)
    )]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("I/O failure on '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl ToolError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this classification.
    ///
    /// `2` is left to the argument parser for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Other(_) => GENERIC_EXIT_CODE,
            Self::PathNotFound(_) => 3,
            Self::FileNotFound(_) => 4,
            Self::EmptyInput => 5,
            Self::MissingColumn { .. } => 6,
            Self::Io { .. } => 7,
        }
    }
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
