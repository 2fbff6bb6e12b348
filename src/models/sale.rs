//! Sale record model
//!
//! A sale is one row of the store file: date, id, item name, quantity and
//! unit price. The sale amount is always derived and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::SaleDate;
use crate::error::{SalesError, SalesResult};
use super::money::Money;

/// Identifier of a sale, unique within one store snapshot
pub type SaleId = u32;

/// A single recorded sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Date of the sale
    pub date: SaleDate,

    /// Sale identifier
    pub id: SaleId,

    /// Name of the item sold
    pub item_name: String,

    /// Number of units sold
    pub quantity: i64,

    /// Price of one unit
    pub unit_price: Money,
}

impl SaleRecord {
    /// Create a new sale record
    pub fn new(
        date: SaleDate,
        id: SaleId,
        item_name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Self {
        Self {
            date,
            id,
            item_name: item_name.into(),
            quantity,
            unit_price,
        }
    }

    /// quantity × unit price
    ///
    /// Fails when the product does not fit the money range.
    pub fn sale_amount(&self) -> SalesResult<Money> {
        self.unit_price.checked_times(self.quantity).ok_or_else(|| {
            SalesError::amount_out_of_range(format!(
                "sale {}: {} x {}",
                self.id, self.quantity, self.unit_price
            ))
        })
    }
}

impl fmt::Display for SaleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} x{} @ {}",
            self.id, self.date, self.item_name, self.quantity, self.unit_price
        )
    }
}

/// Validation errors for item names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleValidationError {
    EmptyItemName,
    /// The store file has no quoting, so these characters would break the row
    ForbiddenCharacter(char),
    /// Strict mode accepts letters only
    NonLetter(char),
}

impl fmt::Display for SaleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyItemName => write!(f, "Item name cannot be empty"),
            Self::ForbiddenCharacter(c) => {
                write!(f, "Item name cannot contain {:?}", c)
            }
            Self::NonLetter(c) => {
                write!(f, "Item name must contain letters only, found {:?}", c)
            }
        }
    }
}

impl std::error::Error for SaleValidationError {}

/// Validate an item name
///
/// Every name must be non-empty and free of commas and line breaks. With
/// `letters_only` set, every character must also be alphabetic.
pub fn validate_item_name(name: &str, letters_only: bool) -> Result<(), SaleValidationError> {
    if name.trim().is_empty() {
        return Err(SaleValidationError::EmptyItemName);
    }

    if let Some(c) = name.chars().find(|c| matches!(c, ',' | '\n' | '\r')) {
        return Err(SaleValidationError::ForbiddenCharacter(c));
    }

    if letters_only {
        if let Some(c) = name.chars().find(|c| !c.is_alphabetic()) {
            return Err(SaleValidationError::NonLetter(c));
        }
    }

    Ok(())
}
