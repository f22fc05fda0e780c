//! # Vendor Enrichment Service
//!
//! Implements the "CSV enrichment" use case: load a table, resolve the
//! vendor of every MAC address in one column, append the results as a
//! `Manufacturer` column and write the table back out.
//!
//! Lookups are issued one at a time, in row order, with a fixed pause
//! between them. A failed lookup only affects its own row.

use std::path::{Path, PathBuf};
use std::time::Duration;

use netkit_common::config::{EnrichConfig, MANUFACTURER_COLUMN};
use netkit_common::error::ToolError;
use netkit_common::vendors::{LookupOutcome, VendorRepository};
use tracing::debug;

use crate::summary::ManufacturerSummary;
use crate::table::Table;

/// Milestones of a run, reported as they happen.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    Reading { path: &'a Path },
    ColumnSelected { column: &'a str },
    Started { total: usize },
    /// About to look up row `index` (0-based).
    Row { index: usize, total: usize, mac: &'a str },
    Written { path: &'a Path },
}

pub type ProgressFn<'a> = dyn Fn(Progress<'_>) + Send + Sync + 'a;

/// What a completed run produced.
#[derive(Debug)]
pub struct EnrichReport {
    pub rows: usize,
    pub output: PathBuf,
    pub outcomes: Vec<LookupOutcome>,
    pub summary: ManufacturerSummary,
}

/// Application Service for CSV vendor enrichment.
pub struct EnrichmentService {
    vendor_repo: Box<dyn VendorRepository>,
}

impl EnrichmentService {
    pub fn new(vendor_repo: Box<dyn VendorRepository>) -> Self {
        Self { vendor_repo }
    }

    /// Runs the whole pipeline described by `cfg`.
    ///
    /// The input is read and the MAC column validated before any lookup is
    /// sent, so a bad column name never reaches the network.
    pub async fn run(
        &self,
        cfg: &EnrichConfig,
        on_progress: &ProgressFn<'_>,
    ) -> Result<EnrichReport, ToolError> {
        on_progress(Progress::Reading { path: &cfg.input });
        let mut table = Table::read_path(&cfg.input)?;

        let mac_index = table.column_index(&cfg.mac_column)?;
        on_progress(Progress::ColumnSelected {
            column: &cfg.mac_column,
        });
        on_progress(Progress::Started { total: table.len() });

        let outcomes = self
            .resolve_column(&table, mac_index, cfg.delay, on_progress)
            .await;

        table.append_column(MANUFACTURER_COLUMN, outcomes.iter().map(ToString::to_string))?;

        let output = cfg.output_path();
        table.write_path(&output)?;
        on_progress(Progress::Written { path: &output });

        let summary = ManufacturerSummary::from_values(outcomes.iter().map(ToString::to_string));

        Ok(EnrichReport {
            rows: table.len(),
            output,
            outcomes,
            summary,
        })
    }

    /// Looks up every value of column `mac_index`, in row order.
    ///
    /// Sleeps `delay` between consecutive lookups but not after the last.
    pub async fn resolve_column(
        &self,
        table: &Table,
        mac_index: usize,
        delay: Duration,
        on_progress: &ProgressFn<'_>,
    ) -> Vec<LookupOutcome> {
        let total = table.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, mac) in table.column_values(mac_index).enumerate() {
            on_progress(Progress::Row { index, total, mac });

            let outcome = self.vendor_repo.get_vendor(mac).await;
            debug!(row = index, %mac, %outcome, "resolved");
            outcomes.push(outcome);

            if index + 1 < total && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        outcomes
    }
}
