//! Sale dates and the date validator
//!
//! Dates are entered and stored as `DD/MM/YYYY`. A [`SaleDate`] is only ever
//! built through [`DateValidator`], which checks the textual layout and the
//! numeric ranges once. Rendering is split per layout: [`SaleDate::to_string`]
//! gives the stored `DD/MM/YYYY` form and [`SaleDate::iso_key`] gives the
//! `YYYY-MM-DD` form used to group the daily report.
//!
//! The day check is deliberately permissive: any day in `1..=31` passes for
//! any month, so `31/04/2024` and `30/02/2024` are accepted. No calendar
//! correction is applied anywhere in the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

/// Length of a `DD/MM/YYYY` string
const DATE_LEN: usize = 10;

/// Byte positions of the `/` separators
const SEPARATOR_POSITIONS: [usize; 2] = [2, 5];

/// Default accepted year range
pub const DEFAULT_YEARS: RangeInclusive<u16> = 1000..=9999;

/// A calendar date as entered for a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SaleDate {
    year: u16,
    month: u8,
    day: u8,
}

impl SaleDate {
    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Render as the canonical `YYYY-MM-DD` grouping key
    pub fn iso_key(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Renders the stored `DD/MM/YYYY` layout
impl fmt::Display for SaleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:02}/{:02}/{:04}", self.day, self.month, self.year);
        f.pad(&text)
    }
}

impl From<SaleDate> for String {
    fn from(date: SaleDate) -> Self {
        date.to_string()
    }
}

impl TryFrom<String> for SaleDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DateValidator::default().parse(&value)
    }
}

/// Reason a date string was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("date '{0}' must be exactly 10 characters (DD/MM/YYYY)")]
    Length(String),

    #[error("date '{0}' must use '/' separators (DD/MM/YYYY)")]
    Separator(String),

    #[error("date '{0}' must contain only digits besides the separators")]
    NonDigit(String),

    #[error("day {0} is outside 1-31")]
    Day(u8),

    #[error("month {0} is outside 1-12")]
    Month(u8),

    #[error("year {year} is outside {min}-{max}")]
    Year { year: u16, min: u16, max: u16 },
}

/// Validates `DD/MM/YYYY` strings against a configured year bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateValidator {
    years: RangeInclusive<u16>,
}

impl Default for DateValidator {
    fn default() -> Self {
        Self {
            years: DEFAULT_YEARS,
        }
    }
}

impl DateValidator {
    /// Create a validator accepting years in `min..=max`
    pub fn with_year_range(min: u16, max: u16) -> Self {
        Self { years: min..=max }
    }

    /// Check a date string without building a value
    pub fn is_valid(&self, text: &str) -> bool {
        self.parse(text).is_ok()
    }

    /// Validate a date string and build the date value
    ///
    /// Checks run in a fixed order: length, separators, digits, day, month,
    /// year. The first failure is reported.
    pub fn parse(&self, text: &str) -> Result<SaleDate, DateError> {
        let bytes = text.as_bytes();

        if bytes.len() != DATE_LEN {
            return Err(DateError::Length(text.to_string()));
        }

        if SEPARATOR_POSITIONS.iter().any(|&i| bytes[i] != b'/') {
            return Err(DateError::Separator(text.to_string()));
        }

        let all_digits = bytes
            .iter()
            .enumerate()
            .filter(|(i, _)| !SEPARATOR_POSITIONS.contains(i))
            .all(|(_, b)| b.is_ascii_digit());
        if !all_digits {
            return Err(DateError::NonDigit(text.to_string()));
        }

        let day = digits_value(&bytes[0..2]) as u8;
        let month = digits_value(&bytes[3..5]) as u8;
        let year = digits_value(&bytes[6..10]) as u16;

        if !(1..=31).contains(&day) {
            return Err(DateError::Day(day));
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::Month(month));
        }
        if !self.years.contains(&year) {
            return Err(DateError::Year {
                year,
                min: *self.years.start(),
                max: *self.years.end(),
            });
        }

        Ok(SaleDate { year, month, day })
    }
}

/// Fold ASCII digits into a number; callers have already checked the bytes
fn digits_value(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
