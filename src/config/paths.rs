//! Path management for the sales ledger
//!
//! ## Path Resolution Order
//!
//! 1. `SALES_LEDGER_DATA_DIR` environment variable (if set)
//! 2. The platform data directory for `sales-ledger` (via `directories`)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::SalesError;

/// Manages all paths used by the sales ledger
#[derive(Debug, Clone)]
pub struct SalesPaths {
    /// Base directory holding the store, snapshot, report and logs
    base_dir: PathBuf,
}

impl SalesPaths {
    /// Create a new SalesPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, SalesError> {
        let base_dir = if let Ok(custom) = std::env::var("SALES_LEDGER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "sales-ledger")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    SalesError::Config("Could not determine a data directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create SalesPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The sales store (`sales.csv`)
    pub fn sales_file(&self) -> PathBuf {
        self.base_dir.join("sales.csv")
    }

    /// The date-sorted snapshot (`temp.csv`)
    pub fn sorted_file(&self) -> PathBuf {
        self.base_dir.join("temp.csv")
    }

    /// The daily sales report (`sales_report.txt`)
    pub fn report_file(&self) -> PathBuf {
        self.base_dir.join("sales_report.txt")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Facts recorded about the store itself (`store.json`)
    pub fn store_meta_file(&self) -> PathBuf {
        self.base_dir.join("store.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SalesError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SalesError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Check if the ledger has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
