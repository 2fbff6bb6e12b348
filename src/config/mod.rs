//! Configuration module for the sales ledger
//!
//! This module provides configuration management including:
//! - Data directory and file path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SalesPaths;
pub use settings::{IdStrategy, LoadPolicy, Settings};
