//! Export file loading with automatic repair.
//!
//! Some capture exports in the wild carry whitespace-damaged keys and
//! values (`"date "` instead of `"date"`). Rather than reject those files,
//! loading detects the damage, keeps a `.bak` copy of the original, and
//! rewrites the file with normalized keys before deserializing it.

use std::fs;
use std::path::Path;

use daybook_domain::ExportDocument;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::{DigestError, Result};

/// Loads an export document, repairing whitespace-damaged keys in place.
///
/// When a repair happens, the original file is preserved next to the input
/// with a `.json.bak` extension and the normalized form is written back.
pub fn load_export(path: &Path) -> Result<ExportDocument> {
    let raw = fs::read_to_string(path)?;
    let mut value: Value = serde_json::from_str(&raw)?;

    if needs_repair(&value) {
        warn!(path = %path.display(), "whitespace-damaged keys detected, repairing");
        let backup = path.with_extension("json.bak");
        fs::copy(path, &backup)?;
        info!(backup = %backup.display(), "original preserved");

        value = normalize_value(value);
        fs::write(path, serde_json::to_string_pretty(&value)?)?;
    }

    let object = value
        .as_object()
        .ok_or_else(|| DigestError::MalformedExport("top level is not an object".to_string()))?;
    for key in ["date", "pages"] {
        if !object.contains_key(key) {
            return Err(DigestError::MalformedExport(format!(
                "missing required key '{}'",
                key
            )));
        }
    }

    Ok(serde_json::from_value(value)?)
}

/// Whether any key anywhere in the document carries leading or trailing
/// whitespace.
fn needs_repair(value: &Value) -> bool {
    match value {
        Value::Object(map) => map
            .iter()
            .any(|(key, child)| key.trim() != key || needs_repair(child)),
        Value::Array(items) => items.iter().any(needs_repair),
        _ => false,
    }
}

/// Recursively trims keys and string values. Keys that become empty after
/// trimming are dropped.
fn normalize_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = Map::with_capacity(map.len());
            for (key, child) in map {
                let trimmed = key.trim();
                if trimmed.is_empty() {
                    continue;
                }
                normalized.insert(trimmed.to_string(), normalize_value(child));
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_value).collect()),
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn export_json(date: &str) -> Value {
        json!({
            "exportedAt": "2025-01-19T18:30:00Z",
            "date": date,
            "totalPages": 1,
            "pages": [{
                "url": "https://example.com/a",
                "title": "A page",
                "content": "Body text",
                "timestamp": "2025-01-19T10:00:00Z",
                "domain": "example.com",
                "readingTime": 1
            }]
        })
    }

    fn write_temp(value: &Value) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(serde_json::to_string(value).unwrap().as_bytes())
            .unwrap();
        file
    }

    #[test]
    fn clean_file_loads_without_touching_disk() {
        let file = write_temp(&export_json("2025-01-19"));
        let before = fs::read_to_string(file.path()).unwrap();

        let doc = load_export(file.path()).unwrap();
        assert_eq!(doc.date, "2025-01-19");
        assert_eq!(doc.pages.len(), 1);

        let after = fs::read_to_string(file.path()).unwrap();
        assert_eq!(before, after);
        assert!(!file.path().with_extension("json.bak").exists());
    }

    #[test]
    fn damaged_keys_are_repaired_with_backup() {
        let damaged = json!({
            "exportedAt": "2025-01-19T18:30:00Z",
            "date ": "2025-01-19 ",
            "totalPages": 1,
            "pages": [{
                "url": "https://example.com/a",
                "title ": "A page ",
                "content": "Body text",
                "timestamp": "2025-01-19T10:00:00Z",
                "domain": "example.com",
                "readingTime": 1
            }]
        });
        let file = write_temp(&damaged);

        let doc = load_export(file.path()).unwrap();
        assert_eq!(doc.date, "2025-01-19");
        assert_eq!(doc.pages[0].title, "A page");

        let backup = file.path().with_extension("json.bak");
        assert!(backup.exists());
        let original: Value =
            serde_json::from_str(&fs::read_to_string(&backup).unwrap()).unwrap();
        assert!(original.get("date ").is_some());

        // rewritten file parses clean on a second load
        let reloaded = load_export(file.path()).unwrap();
        assert_eq!(reloaded.date, "2025-01-19");
        fs::remove_file(backup).ok();
    }

    #[test]
    fn missing_required_keys_are_reported() {
        let file = write_temp(&json!({"exportedAt": "2025-01-19T18:30:00Z", "pages": []}));
        match load_export(file.path()) {
            Err(DigestError::MalformedExport(msg)) => assert!(msg.contains("date")),
            other => panic!("expected MalformedExport, got {:?}", other),
        }
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(matches!(
            load_export(file.path()),
            Err(DigestError::InvalidJson(_))
        ));
    }

    #[test]
    fn repair_detection_reaches_nested_objects() {
        assert!(needs_repair(&json!({"pages": [{"title ": "x"}]})));
        assert!(!needs_repair(&export_json("2025-01-19")));
    }

    #[test]
    fn empty_keys_are_dropped_during_repair() {
        let normalized = normalize_value(json!({" ": "gone", "kept": " v "}));
        let map = normalized.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["kept"], "v");
    }
}
