//! Export module for the sales ledger
//!
//! Provides the date-sorted snapshot of the sale store.

pub mod sorted;

pub use sorted::{export_sorted, sort_by_stored_date, ExportOutcome};
