//! Audit logging for the sales ledger
//!
//! Records every create, update and delete of a sale, with before/after
//! values, in an append-only audit log.
//!
//! - `AuditEntry`: one entry with timestamp, operation, sale id and the sale
//!   before and/or after the operation.
//! - `AuditLogger`: writes entries to the log file as JSON lines.
//! - `generate_diff`: summarizes the changed fields of an update.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
