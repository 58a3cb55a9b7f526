//! Human-readable diffs for update audit entries

use serde_json::Value;

/// Bookkeeping fields that change on every update and are left out of diffs
const IGNORED_FIELDS: [&str; 1] = ["updated_at"];

const MAX_STRING_CHARS: usize = 50;

/// Describe the top-level field changes between two JSON values
///
/// Returns `None` when nothing but bookkeeping fields changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                if IGNORED_FIELDS.contains(&key.as_str()) {
                    continue;
                }
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) && !IGNORED_FIELDS.contains(&key.as_str()) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            changes
        }
        _ if before != after => vec![format!("{} -> {}", format_value(before), format_value(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > MAX_STRING_CHARS => {
            let head: String = s.chars().take(MAX_STRING_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_fields() {
        let before = json!({"amount": 25000, "category": "Food", "description": "Lunch"});
        let after = json!({"amount": 30000, "category": "Food", "description": "Dinner"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("amount: 25000 -> 30000"));
        assert!(diff.contains("description: \"Lunch\" -> \"Dinner\""));
        assert!(!diff.contains("category"));
    }

    #[test]
    fn test_updated_at_ignored() {
        let before = json!({"amount": 1, "updated_at": "2025-01-01T00:00:00Z"});
        let after = json!({"amount": 1, "updated_at": "2025-01-02T00:00:00Z"});
        assert_eq!(generate_diff(&before, &after), None);
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"old": 1});
        let after = json!({"new": 2});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: 1 -> (removed)"));
        assert!(diff.contains("new: (added) -> 2"));
    }

    #[test]
    fn test_long_multibyte_strings_truncated() {
        let long = "₹".repeat(80);
        let diff = generate_diff(&json!({"d": long}), &json!({"d": "x"})).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(generate_diff(&json!(1), &json!(2)), Some("1 -> 2".to_string()));
        assert_eq!(generate_diff(&json!(1), &json!(1)), None);
    }
}
