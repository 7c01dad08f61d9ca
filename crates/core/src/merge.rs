//! Brand-to-school field inheritance.
//!
//! When a school is created under a brand, the brand's contact and
//! descriptive fields are copied into the school's empty fields once at
//! creation time. This is a one-directional, only-if-empty copy, not a
//! live link: later brand edits do not propagate.

use serde_json::Value;

/// Returns true for values the copy treats as empty: `null`, blank
/// strings, empty arrays and empty objects.
fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
        Some(_) => false,
    }
}

/// Copy `fields` from `source` into `target` wherever the target field
/// is empty. Both inputs are JSON objects; non-object inputs return the
/// target unchanged.
pub fn merge_if_empty(target: &Value, source: &Value, fields: &[&str]) -> Value {
    let (Some(target_map), Some(source_map)) = (target.as_object(), source.as_object()) else {
        return target.clone();
    };

    let mut merged = target_map.clone();
    for field in fields {
        if is_empty(merged.get(*field)) && !is_empty(source_map.get(*field)) {
            merged.insert((*field).to_string(), source_map[*field].clone());
        }
    }
    Value::Object(merged)
}
