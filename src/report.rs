//! Merge report with full provenance
//!
//! Captures the merged result plus the inputs it was built from and the
//! key paths the merge actually filled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::Path;

use crate::document::{Document, DocumentFormat};
use crate::merge::defaults_deep_all;

/// Schema version for merge_report
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "nullfill/merge_report@1";

/// A contributing document with provenance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceRef {
    pub path: String,
    pub format: DocumentFormat,
    /// SHA-256 of the raw file bytes
    pub digest: String,
}

impl From<&Document> for SourceRef {
    fn from(doc: &Document) -> Self {
        Self {
            path: doc.path.to_string_lossy().to_string(),
            format: doc.format,
            digest: doc.digest.clone(),
        }
    }
}

/// Result of one null-fill merge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When the merge ran
    pub created_at: DateTime<Utc>,

    /// The document that was filled
    pub target: SourceRef,

    /// Default sources in precedence order (first wins)
    pub sources: Vec<SourceRef>,

    /// Key paths that were absent or null in the target and got a value
    pub filled: Vec<String>,

    /// The merged value
    pub result: Value,
}

impl MergeReport {
    /// Null-fill the target document from the sources and record the outcome
    pub fn build(target: Document, sources: Vec<Document>) -> Self {
        let target_ref = SourceRef::from(&target);
        let before = target.value;
        let mut result = before.clone();
        defaults_deep_all(&mut result, sources.iter().map(|doc| &doc.value));

        Self {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            target: target_ref,
            sources: sources.iter().map(SourceRef::from).collect(),
            filled: diff_filled(&before, &result),
            result,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write to file
    pub fn write_to_file(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Paths present in `after` whose value was absent or null in `before`.
///
/// Paths are dot-separated for object keys and use `[i]` for array slots.
/// An empty key, or one containing `.`, `[`, `]` or `"`, is written as a
/// quoted JSON string in brackets (`["a.b"]`). Recursion stops at a filled slot; its children
/// are not listed. A null root counts as an empty container of the result's
/// kind, so each top-level slot is listed.
pub fn diff_filled(before: &Value, after: &Value) -> Vec<String> {
    let empty;
    let before = match (before, after) {
        (Value::Null, Value::Object(_)) => {
            empty = Value::Object(Map::new());
            &empty
        }
        (Value::Null, Value::Array(_)) => {
            empty = Value::Array(Vec::new());
            &empty
        }
        _ => before,
    };

    let mut filled = Vec::new();
    diff_recursive(before, after, String::new(), &mut filled);
    filled
}

fn diff_recursive(before: &Value, after: &Value, path: String, filled: &mut Vec<String>) {
    if before.is_null() {
        if !after.is_null() && !path.is_empty() {
            filled.push(path);
        }
        return;
    }

    match (before, after) {
        (Value::Object(before_map), Value::Object(after_map)) => {
            for (key, after_value) in after_map {
                let current_path = key_path(&path, key);

                match before_map.get(key) {
                    Some(before_value) => {
                        diff_recursive(before_value, after_value, current_path, filled)
                    }
                    None => filled.push(current_path),
                }
            }
        }
        (Value::Array(before_items), Value::Array(after_items)) => {
            for (i, after_value) in after_items.iter().enumerate() {
                let current_path = format!("{}[{}]", path, i);
                match before_items.get(i) {
                    Some(before_value) => {
                        diff_recursive(before_value, after_value, current_path, filled)
                    }
                    None => filled.push(current_path),
                }
            }
        }
        _ => {}
    }
}

fn key_path(path: &str, key: &str) -> String {
    if key.is_empty() || key.contains(&['.', '[', ']', '"'][..]) {
        format!("{}[{}]", path, Value::String(key.to_string()))
    } else if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

/// Report errors
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
