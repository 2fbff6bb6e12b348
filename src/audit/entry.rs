//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;
use crate::models::{SaleId, SaleRecord};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation of the sale store with the sale before and/or after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Id of the affected sale
    pub sale_id: SaleId,

    /// Item name, for readable listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    /// The sale before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The sale after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn base(operation: Operation, sale: &SaleRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            sale_id: sale.id,
            item_name: Some(sale.item_name.clone()),
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn create(sale: &SaleRecord) -> Self {
        Self {
            after: serde_json::to_value(sale).ok(),
            ..Self::base(Operation::Create, sale)
        }
    }

    /// Entry for a replaced sale, with a field-level diff
    pub fn update(before: &SaleRecord, after: &SaleRecord) -> Self {
        let before_json = serde_json::to_value(before).ok();
        let after_json = serde_json::to_value(after).ok();
        let diff_summary = match (&before_json, &after_json) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            before: before_json,
            after: after_json,
            diff_summary,
            ..Self::base(Operation::Update, after)
        }
    }

    pub fn delete(sale: &SaleRecord) -> Self {
        Self {
            before: serde_json::to_value(sale).ok(),
            ..Self::base(Operation::Delete, sale)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Sale {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.sale_id
        );

        if let Some(name) = &self.item_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateValidator, Money};

    fn sale(item: &str, cents: i64) -> SaleRecord {
        SaleRecord::new(
            DateValidator::default().parse("01/02/2024").unwrap(),
            12,
            item,
            2,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&sale("Pen", 150));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.sale_id, 12);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap()["item_name"], "Pen");
    }

    #[test]
    fn test_update_entry_has_diff() {
        let entry = AuditEntry::update(&sale("Pen", 150), &sale("Pen", 175));

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("unit_price: 150 -> 175")
        );
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&sale("Pen", 150));

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(&sale("Pen", 150));

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.sale_id, 12);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(&sale("Pen", 150), &sale("Ink", 150));

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Sale 12 (Ink)"));
        assert!(formatted.contains("Changes: item_name: \"Pen\" -> \"Ink\""));
    }
}
