//! Storage layer for the sales ledger
//!
//! Provides the delimited sale store, atomic full rewrites, sale id
//! allocation, the store's pinned id strategy and the audit trail of store
//! mutations.

pub mod file_io;
pub mod ids;
pub mod meta;
pub mod sales;

pub use file_io::write_atomic;
pub use ids::{allocator_for, IdAllocator, MaxPlusOne, RandomDraw};
pub use meta::{pin_id_strategy, StoreMeta};
pub use sales::{
    append_one, delete_by_id, find_by_id, load, load_lenient, parse_row, save_all,
    serialize_row, LoadReport, RowError, SaleRepository, SkippedRow, HEADER,
};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{IdStrategy, SalesPaths, Settings};
use crate::error::{SalesError, SalesResult};
use crate::models::SaleRecord;

/// Main storage coordinator
pub struct Storage {
    paths: SalesPaths,
    pub sales: SaleRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SalesPaths, settings: &Settings) -> Result<Self, SalesError> {
        paths.ensure_directories()?;

        Ok(Self {
            sales: SaleRepository::new(paths.sales_file(), settings.load_policy),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &SalesPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record the id strategy on first use; refuse a different one later
    pub fn pin_id_strategy(&self, strategy: IdStrategy) -> SalesResult<()> {
        pin_id_strategy(&self.paths.store_meta_file(), strategy)
    }

    pub fn log_create(&self, sale: &SaleRecord) -> SalesResult<()> {
        self.audit.log(&AuditEntry::create(sale))
    }

    pub fn log_update(&self, before: &SaleRecord, after: &SaleRecord) -> SalesResult<()> {
        self.audit.log(&AuditEntry::update(before, after))
    }

    pub fn log_delete(&self, sale: &SaleRecord) -> SalesResult<()> {
        self.audit.log(&AuditEntry::delete(sale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{DateValidator, Money};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("ledger");
        let paths = SalesPaths::with_base_dir(base.clone());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        assert!(base.exists());
        assert_eq!(storage.sales.path(), base.join("sales.csv"));
        assert!(storage.sales.load().unwrap().is_empty());
    }

    #[test]
    fn test_audit_helpers() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SalesPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        let sale = SaleRecord::new(
            DateValidator::default().parse("01/02/2024").unwrap(),
            1,
            "Pen",
            1,
            Money::from_cents(100),
        );
        storage.log_create(&sale).unwrap();
        storage.log_delete(&sale).unwrap();

        let ops: Vec<_> = storage
            .audit()
            .read_all()
            .unwrap()
            .iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Delete]);
    }

    #[test]
    fn test_pin_id_strategy() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SalesPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone(), &Settings::default()).unwrap();

        storage.pin_id_strategy(IdStrategy::MaxPlusOne).unwrap();
        assert!(paths.store_meta_file().exists());
        assert!(storage.pin_id_strategy(IdStrategy::Random).is_err());
    }
}
