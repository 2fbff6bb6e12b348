//! User settings for the sales ledger
//!
//! Manages the per-deployment choices: accepted year range, id allocation
//! strategy, load policy for malformed rows and the item-name rule.

use serde::{Deserialize, Serialize};

use super::paths::SalesPaths;
use crate::error::SalesError;
use crate::models::date::{DateValidator, DEFAULT_YEARS};

/// How new sale ids are allocated
///
/// Exactly one strategy is active for a store; they are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Scan the store and use the highest id plus one
    #[default]
    MaxPlusOne,
    /// Draw uniformly from 1000-9999 without checking for collisions
    Random,
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::MaxPlusOne => write!(f, "max_plus_one"),
            IdStrategy::Random => write!(f, "random"),
        }
    }
}

/// What to do when a stored row cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Fail the whole load
    #[default]
    Strict,
    /// Skip the row and report it
    Skip,
}

/// User settings for the sales ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Lowest accepted year for sale dates
    #[serde(default = "default_year_min")]
    pub year_min: u16,

    /// Highest accepted year for sale dates
    #[serde(default = "default_year_max")]
    pub year_max: u16,

    #[serde(default)]
    pub id_strategy: IdStrategy,

    #[serde(default)]
    pub load_policy: LoadPolicy,

    /// Only accept item names made of letters
    #[serde(default)]
    pub strict_item_names: bool,

    /// Currency symbol for terminal listings (never written to the store)
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_year_min() -> u16 {
    *DEFAULT_YEARS.start()
}

fn default_year_max() -> u16 {
    *DEFAULT_YEARS.end()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            year_min: default_year_min(),
            year_max: default_year_max(),
            id_strategy: IdStrategy::default(),
            load_policy: LoadPolicy::default(),
            strict_item_names: false,
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &SalesPaths) -> Result<Self, SalesError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SalesError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SalesError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SalesPaths) -> Result<(), SalesError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SalesError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SalesError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), SalesError> {
        if self.year_min > self.year_max {
            return Err(SalesError::Config(format!(
                "year_min ({}) is greater than year_max ({})",
                self.year_min, self.year_max
            )));
        }
        Ok(())
    }

    /// Build the date validator for the configured year range
    pub fn date_validator(&self) -> DateValidator {
        DateValidator::with_year_range(self.year_min, self.year_max)
    }
}
