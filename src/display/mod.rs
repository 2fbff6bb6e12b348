//! Display formatting for terminal output
//!
//! Provides utilities for formatting sales and the audit history for
//! terminal display.

pub mod history;
pub mod sale;

pub use history::format_history;
pub use sale::{format_sale_details, format_sale_list, format_skipped_rows};
