//! Shared test utilities for the lostfound workspace.
//!
//! CLI integration tests compare JSON output that contains generated report
//! ids and wall-clock timestamps. This crate rewrites both to stable
//! placeholders so the rest of the document can be compared exactly.

use serde_json::Value;
use std::collections::BTreeMap;

const TIMESTAMP_KEYS: [&str; 2] = ["created_at", "updated_at"];

/// Normalize non-deterministic JSON fields for golden comparison.
///
/// - Every string that parses as a UUID becomes `__ID_<n>__`, numbered in
///   order of first appearance, so references between objects stay intact.
/// - `created_at` and `updated_at` become `__TIMESTAMP__` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let mut ids = BTreeMap::new();
    normalize_recursive(&mut value, &mut ids);
    value
}

fn normalize_recursive(value: &mut Value, ids: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if let Some(v) = map.get_mut(key)
                    && v.is_string()
                {
                    *v = Value::String("__TIMESTAMP__".to_string());
                }
            }
            for val in map.values_mut() {
                normalize_recursive(val, ids);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_recursive(val, ids);
            }
        }
        Value::String(s) if uuid::Uuid::parse_str(s).is_ok() => {
            let next = ids.len() + 1;
            let placeholder = ids
                .entry(s.clone())
                .or_insert_with(|| format!("__ID_{next}__"))
                .clone();
            *s = placeholder;
        }
        _ => {}
    }
}
