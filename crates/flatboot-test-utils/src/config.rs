//! Host configuration fixtures

use serde_json::{Map, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to `name` inside `temp` and return the path.
pub fn write_config(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Build a defaults context from a JSON object literal.
pub fn context(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("context must be a JSON object, got {other}"),
    }
}
