//! Date-sorted snapshot of the sale store
//!
//! The snapshot has the same layout as the store and is written to its own
//! file. Rows are ordered by comparing the stored `DD/MM/YYYY` text, so the
//! order is by day of month first: `01/02/2024` comes before `31/01/2024`.
//! This is not chronological order; the daily report is the chronological
//! view.

use std::path::Path;

use tracing::info;

use crate::error::SalesResult;
use crate::models::SaleRecord;
use crate::storage::{save_all, SaleRepository};

/// What an export did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The source had no records; the destination was not touched
    NothingToSort,
    /// The destination was rewritten with `count` records; `skipped` rows of
    /// the source could not be parsed and were left out
    Written { count: usize, skipped: usize },
}

/// Stable sort by the stored date text
pub fn sort_by_stored_date(records: &mut [SaleRecord]) {
    records.sort_by_cached_key(|r| r.date.to_string());
}

/// Load the store, sort it by stored date text and write it to `dest`
///
/// The source file is left untouched.
pub fn export_sorted<P: AsRef<Path>>(source: &SaleRepository, dest: P) -> SalesResult<ExportOutcome> {
    let dest = dest.as_ref();
    let report = source.load_report()?;
    let skipped = report.skipped.len();
    let mut records = report.records;

    if records.is_empty() {
        info!(source = %source.path().display(), "no records to sort");
        return Ok(ExportOutcome::NothingToSort);
    }

    sort_by_stored_date(&mut records);
    save_all(dest, &records)?;

    info!(dest = %dest.display(), count = records.len(), "wrote sorted snapshot");
    Ok(ExportOutcome::Written {
        count: records.len(),
        skipped,
    })
}
