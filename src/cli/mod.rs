//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod report;
pub mod sale;

pub use report::{
    handle_finish_command, handle_history_command, handle_report_command, handle_sort_command,
};
pub use sale::{handle_sale_command, SaleCommands};
