//! Sales Ledger - flat-file sales record store
//!
//! This library keeps sales transactions in a comma-delimited text file and
//! provides create, read, update and delete operations on them, a date-sorted
//! snapshot export and a daily sales report with per-day subtotals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Sale records, dates and money
//! - `storage`: The delimited store file and id allocation
//! - `services`: Business logic layer
//! - `audit`: Audit logging of every store mutation
//! - `export`: Date-sorted snapshot
//! - `reports`: Daily sales report
//! - `cli`, `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use sales_ledger::config::{SalesPaths, Settings};
//! use sales_ledger::storage::Storage;
//!
//! let paths = SalesPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SalesError, SalesResult};
