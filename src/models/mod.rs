//! Core data models for the sales ledger
//!
//! This module contains the data structures of the sales domain: sale
//! records, the date value and its validator, and the money type.

pub mod date;
pub mod money;
pub mod sale;

pub use date::{DateError, DateValidator, SaleDate};
pub use money::{Money, MoneyParseError};
pub use sale::{validate_item_name, SaleId, SaleRecord, SaleValidationError};
