//! Custom error types for the sales ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for sales ledger operations
#[derive(Error, Debug)]
pub enum SalesError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A stored row could not be parsed
    #[error("Parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// A sale amount or total does not fit the money range
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SalesError {
    /// Create a "not found" error for sales
    pub fn sale_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Sale",
            identifier: identifier.to_string(),
        }
    }

    /// Create an error for an amount that overflows
    pub fn amount_out_of_range(context: impl ToString) -> Self {
        Self::AmountOutOfRange(context.to_string())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SalesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SalesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SalesError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for sales ledger operations
pub type SalesResult<T> = Result<T, SalesError>;
