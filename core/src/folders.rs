//! # Folder Comparison
//!
//! Lists the immediate entries of two folders and reports the names present
//! in both. Entries are compared by name only: files and subdirectories are
//! treated alike and nothing is recursed into.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use netkit_common::error::ToolError;
use tracing::debug;

/// Outcome of comparing two folders.
#[derive(Debug, Default)]
pub struct Comparison {
    /// Names present in both folders.
    pub common: BTreeSet<String>,
    /// Folders that did not exist and were treated as empty.
    pub missing: Vec<PathBuf>,
}

impl Comparison {
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// Returns the entry names directly inside `path`.
///
/// A folder that does not exist yields [`ToolError::PathNotFound`]; every
/// other filesystem failure is a [`ToolError::Io`].
pub fn list_entries(path: &Path) -> Result<BTreeSet<String>, ToolError> {
    let read_dir = std::fs::read_dir(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ToolError::PathNotFound(path.to_path_buf()),
        _ => ToolError::io(path, e),
    })?;

    let mut entries = BTreeSet::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ToolError::io(path, e))?;
        entries.insert(entry.file_name().to_string_lossy().into_owned());
    }

    debug!("{} entries in {}", entries.len(), path.display());
    Ok(entries)
}

/// Names present in both listings.
pub fn common_entries(left: &BTreeSet<String>, right: &BTreeSet<String>) -> BTreeSet<String> {
    left.intersection(right).cloned().collect()
}

/// Compares two folders by entry name.
///
/// A missing folder does not abort the comparison; it is recorded in
/// [`Comparison::missing`] and counts as empty.
pub fn compare_folders(left: &Path, right: &Path) -> Result<Comparison, ToolError> {
    let mut comparison = Comparison::default();

    let left_entries = listing_or_empty(left, &mut comparison.missing)?;
    let right_entries = listing_or_empty(right, &mut comparison.missing)?;

    comparison.common = common_entries(&left_entries, &right_entries);
    Ok(comparison)
}

fn listing_or_empty(path: &Path, missing: &mut Vec<PathBuf>) -> Result<BTreeSet<String>, ToolError> {
    match list_entries(path) {
        Ok(entries) => Ok(entries),
        Err(ToolError::PathNotFound(path)) => {
            missing.push(path);
            Ok(BTreeSet::new())
        }
        Err(e) => Err(e),
    }
}
