//! Audit history display
//!
//! Formats audit log entries, newest last, for the `history` command.

use crate::audit::AuditEntry;

/// Format audit entries one block per entry
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}
