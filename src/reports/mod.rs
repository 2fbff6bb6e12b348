//! Reports module for the sales ledger
//!
//! Provides the daily sales report: sales grouped by calendar date with
//! per-day subtotals and a grand total.

pub mod daily_sales;

pub use daily_sales::{DailyGroup, DailySalesReport, ReportRow};
