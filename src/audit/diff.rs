//! Diff generation for audit logging
//!
//! Generates human-readable diffs between the JSON forms of a sale before and
//! after an update.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are listed, in field order.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_field_change() {
        let before = json!({"item_name": "Pen", "quantity": 2});
        let after = json!({"item_name": "Pen", "quantity": 5});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "quantity: 2 -> 5");
    }

    #[test]
    fn test_string_field_change() {
        let before = json!({"date": "01/02/2024"});
        let after = json!({"date": "03/02/2024"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("date: \"01/02/2024\" -> \"03/02/2024\""));
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"a": 1, "old": "x"});
        let after = json!({"a": 1, "new": true});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: \"x\" -> (removed)"));
        assert!(diff.contains("new: (added) -> true"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"item_name": "Pen", "quantity": 2});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)).as_deref(),
            Some("1 -> 2")
        );
        assert!(generate_diff(&json!(null), &json!(null)).is_none());
    }

    #[test]
    fn test_long_string_truncation() {
        let long_name = "a".repeat(100);
        let diff = generate_diff(
            &json!({"item_name": long_name}),
            &json!({"item_name": "short"}),
        )
        .unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("test")), "\"test\"");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
