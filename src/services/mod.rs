//! Service layer for the sales ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, id allocation and audit logging.

pub mod sale;

pub use sale::{SaleInput, SaleService};
