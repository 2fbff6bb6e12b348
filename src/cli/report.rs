//! CLI commands for the sorted snapshot, the daily report and the audit
//! history

use std::path::PathBuf;

use crate::display::{format_history, format_skipped_rows};
use crate::error::SalesResult;
use crate::export::{export_sorted, ExportOutcome};
use crate::reports::DailySalesReport;
use crate::storage::Storage;

/// Write the date-sorted snapshot of the store
pub fn handle_sort_command(storage: &Storage, output: Option<PathBuf>) -> SalesResult<()> {
    let dest = output.unwrap_or_else(|| storage.paths().sorted_file());

    match export_sorted(&storage.sales, &dest)? {
        ExportOutcome::NothingToSort => println!("No sales to sort."),
        ExportOutcome::Written { count, skipped } => {
            if skipped > 0 {
                eprintln!("Skipped {} malformed row(s)", skipped);
            }
            println!("Sorted {} sales into: {}", count, dest.display());
        }
    }

    Ok(())
}

/// Generate the daily sales report, write it and optionally print it
pub fn handle_report_command(
    storage: &Storage,
    output: Option<PathBuf>,
    print: bool,
) -> SalesResult<()> {
    let dest = output.unwrap_or_else(|| storage.paths().report_file());

    let loaded = storage.sales.load_report()?;
    if let Some(notice) = format_skipped_rows(&loaded.skipped) {
        eprint!("{}", notice);
    }
    let report =
        DailySalesReport::generate(&loaded.records, chrono::Local::now().date_naive())?;
    report.write_to(&dest)?;

    if print {
        print!("{}", report.format_text());
    }
    println!(
        "Report of {} sales over {} days written to: {}",
        report.sale_count(),
        report.groups.len(),
        dest.display()
    );

    Ok(())
}

/// End-of-session step: sorted snapshot followed by the report
pub fn handle_finish_command(storage: &Storage) -> SalesResult<()> {
    handle_sort_command(storage, None)?;
    handle_report_command(storage, None, false)
}

/// Show recent audit log entries
pub fn handle_history_command(storage: &Storage, limit: usize) -> SalesResult<()> {
    let entries = storage.audit().read_recent(limit)?;
    println!("{}", format_history(&entries));
    Ok(())
}
