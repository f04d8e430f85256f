//! Loading value trees from JSON and TOML files
//!
//! Every loaded document keeps the SHA-256 digest of its raw bytes so a
//! merge can record exactly which inputs it consumed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use nullfill_filename::file_extension;

/// On-disk format of a document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick a format from the file name; anything but `.toml` is JSON
    pub fn from_path(path: &Path) -> Self {
        let name = path.to_string_lossy();
        if file_extension(&name).eq_ignore_ascii_case("toml") {
            DocumentFormat::Toml
        } else {
            DocumentFormat::Json
        }
    }

    /// Parse text in this format into a JSON value tree
    pub fn parse(&self, contents: &str) -> Result<Value, String> {
        match self {
            DocumentFormat::Json => {
                serde_json::from_str(contents).map_err(|e| format!("JSON parse error: {}", e))
            }
            DocumentFormat::Toml => {
                let toml_value: toml::Value = toml::from_str(contents)
                    .map_err(|e| format!("TOML parse error: {}", e))?;
                Ok(toml_to_json(toml_value))
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Toml => "toml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed document and where it came from
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub format: DocumentFormat,
    /// SHA-256 of the raw file bytes, lowercase hex
    pub digest: String,
    pub value: Value,
}

impl Document {
    /// Read and parse a file, choosing the format from its extension
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let digest = sha256_hex(&bytes);

        let contents = String::from_utf8(bytes).map_err(|e| DocumentError::Parse {
            path: path.to_path_buf(),
            message: format!("Invalid UTF-8: {}", e),
        })?;

        let format = DocumentFormat::from_path(path);
        let value = format.parse(&contents).map_err(|message| DocumentError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            format,
            digest,
            value,
        })
    }
}

/// Lowercase hex SHA-256 of a byte slice
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Convert a TOML value into the equivalent JSON value
pub fn toml_to_json(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Document loading errors
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}
