//! Coercions for loosely-typed configuration values

use serde_json::Value;

/// Coerce a scalar into a string. Sequences, mappings and null yield `None`.
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce any value into a flag.
///
/// Strings accept the usual spellings (`true`/`false`, `yes`/`no`, `on`/`off`,
/// `1`/`0`); any other non-empty string is truthy. Numbers are truthy when
/// non-zero, collections when non-empty.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "false" | "no" | "off" | "0" => false,
            _ => true,
        },
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Render a value for log messages: strings bare, everything else as JSON.
pub fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
