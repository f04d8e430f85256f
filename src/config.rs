//! Tool configuration
//!
//! Two layers:
//! 1. Built-in defaults
//! 2. User config file (.nullfill.toml)
//!
//! The user layer is null-filled from the defaults, so a missing key (or a
//! `null` in a JSON config) falls back to the built-in value.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::document::{Document, DocumentError};
use crate::merge::defaults_deep;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".nullfill.toml";

/// Built-in default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Pretty-print JSON output (default: true)
    pub pretty: bool,

    /// Emit a full merge report instead of the bare result (default: false)
    pub report: bool,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            pretty: true,
            report: false,
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "output": {
                "pretty": self.pretty,
                "report": self.report
            }
        })
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Config file that contributed, if any
    pub path: Option<PathBuf>,

    /// The merged configuration object
    pub config: Value,
}

impl ToolConfig {
    /// Built-in defaults only
    pub fn builtin() -> Self {
        Self {
            path: None,
            config: BuiltinDefaults::default().to_value(),
        }
    }

    /// Load the user config (if it exists) and fill it from the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) if p.exists() => p,
            _ => return Ok(Self::builtin()),
        };

        let mut config = Document::load(path)?.value;
        defaults_deep(&mut config, &BuiltinDefaults::default().to_value());

        Self::validate_config(&config)?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            config,
        })
    }

    /// Validate configuration values
    fn validate_config(config: &Value) -> Result<(), ConfigError> {
        if !config.is_object() {
            return Err(ConfigError::ValidationError(
                "config root must be a table".to_string(),
            ));
        }

        for key in ["output.pretty", "output.report"] {
            match lookup(config, key) {
                Some(Value::Bool(_)) => {}
                Some(other) => {
                    return Err(ConfigError::ValidationError(format!(
                        "{} must be a boolean, got {}",
                        key, other
                    )));
                }
                None => {
                    return Err(ConfigError::ValidationError(format!("{} is missing", key)));
                }
            }
        }

        Ok(())
    }

    /// Get a config value by path (dot-separated).
    ///
    /// Each `.` starts a new table level, so a key that itself contains `.`
    /// cannot be addressed here; read it from `config` directly.
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.config, path)
    }

    /// Get a config value as bool
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(|v| v.as_bool())
    }

    pub fn pretty(&self) -> bool {
        self.get_bool("output.pretty").unwrap_or(true)
    }

    pub fn report(&self) -> bool {
        self.get_bool("output.report").unwrap_or(false)
    }
}

fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
