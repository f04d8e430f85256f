//! nullfill - null-aware defaults merging and filename inspection
//!
//! This crate fills JSON/TOML value trees from default sources without
//! overwriting anything already populated, and re-exports the filename
//! helpers from `nullfill-filename`.

pub mod config;
pub mod document;
pub mod merge;
pub mod report;

pub use config::{BuiltinDefaults, ConfigError, ToolConfig};
pub use document::{Document, DocumentError, DocumentFormat};
pub use merge::{defaults_deep, defaults_deep_all, defaults_deep_value, DeepDefaultsMerger, Sources};
pub use nullfill_filename::{file_extension, is_image, is_pdf, FileInfo, FileKind, IMAGE_EXTENSIONS};
pub use report::{MergeReport, ReportError, SourceRef};
