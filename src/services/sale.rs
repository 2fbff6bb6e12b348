//! Sale service
//!
//! Business logic for sale management: validation of entered fields, id
//! allocation, persistence and audit logging.
//!
//! Creating a sale appends one row to the store. Updating or deleting reloads
//! the whole store, changes it in memory and rewrites the file.
//!
//! The store write commits an operation. The audit entry follows it; a failed
//! audit write is logged as a warning and does not fail the operation.

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{SalesError, SalesResult};
use crate::models::{validate_item_name, Money, SaleDate, SaleId, SaleRecord};
use crate::storage::{delete_by_id, find_by_id, IdAllocator, LoadReport, Storage};

/// Field values for creating or replacing a sale
#[derive(Debug, Clone)]
pub struct SaleInput {
    /// Date as entered (`DD/MM/YYYY`)
    pub date: String,
    pub item_name: String,
    pub quantity: i64,
    pub unit_price: Money,
}

/// Service for sale management
pub struct SaleService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> SaleService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Check the date, item name and sale amount, returning the parsed date
    /// and the trimmed name
    fn validate(&self, input: &SaleInput) -> SalesResult<(SaleDate, String)> {
        let date = self
            .settings
            .date_validator()
            .parse(&input.date)
            .map_err(|e| SalesError::Validation(e.to_string()))?;

        let item_name = input.item_name.trim();
        validate_item_name(item_name, self.settings.strict_item_names)
            .map_err(|e| SalesError::Validation(e.to_string()))?;

        if input.unit_price.checked_times(input.quantity).is_none() {
            return Err(SalesError::Validation(format!(
                "Sale amount out of range: {} x {}",
                input.quantity, input.unit_price
            )));
        }

        Ok((date, item_name.to_string()))
    }

    /// Log a failed audit write for a change that is already on disk
    fn audited(id: SaleId, result: SalesResult<()>) {
        if let Err(e) = result {
            warn!(id, error = %e, "failed to write audit entry");
        }
    }

    /// Record a new sale and append it to the store
    pub fn create(
        &self,
        allocator: &mut dyn IdAllocator,
        input: SaleInput,
    ) -> SalesResult<SaleRecord> {
        let (date, item_name) = self.validate(&input)?;
        self.storage.pin_id_strategy(self.settings.id_strategy)?;
        let id = allocator.next_id(self.storage.sales.path())?;

        let sale = SaleRecord::new(date, id, item_name, input.quantity, input.unit_price);
        self.storage.sales.append(&sale)?;
        Self::audited(id, self.storage.log_create(&sale));

        info!(id = sale.id, "recorded sale");
        Ok(sale)
    }

    /// All sales in store order
    pub fn list(&self) -> SalesResult<Vec<SaleRecord>> {
        self.storage.sales.load()
    }

    /// All sales in store order, with the rows a lenient load skipped
    pub fn list_report(&self) -> SalesResult<LoadReport> {
        self.storage.sales.load_report()
    }

    pub fn get(&self, id: SaleId) -> SalesResult<Option<SaleRecord>> {
        let sales = self.storage.sales.load()?;
        Ok(find_by_id(&sales, id).map(|index| sales[index].clone()))
    }

    /// Replace every field of an existing sale except its id
    pub fn update(&self, id: SaleId, input: SaleInput) -> SalesResult<SaleRecord> {
        let mut sales = self.storage.sales.load()?;
        let index = find_by_id(&sales, id).ok_or_else(|| SalesError::sale_not_found(id))?;

        let (date, item_name) = self.validate(&input)?;

        let before = sales[index].clone();
        let after = SaleRecord::new(date, id, item_name, input.quantity, input.unit_price);
        sales[index] = after.clone();

        self.storage.sales.save(&sales)?;
        Self::audited(id, self.storage.log_update(&before, &after));

        info!(id, "updated sale");
        Ok(after)
    }

    /// Remove a sale from the store, returning the removed record
    pub fn delete(&self, id: SaleId) -> SalesResult<SaleRecord> {
        let mut sales = self.storage.sales.load()?;
        let removed = find_by_id(&sales, id)
            .map(|index| sales[index].clone())
            .ok_or_else(|| SalesError::sale_not_found(id))?;

        delete_by_id(&mut sales, id);
        self.storage.sales.save(&sales)?;
        Self::audited(id, self.storage.log_delete(&removed));

        info!(id, "deleted sale");
        Ok(removed)
    }
}
