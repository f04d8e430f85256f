//! File kind classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{file_extension, is_image, is_pdf, IMAGE_EXTENSIONS};

/// Coarse kind of a file, decided by its name alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Pdf,
    Other,
}

impl FileKind {
    /// Classify a filename. Agrees with [`is_image`] and [`is_pdf`].
    pub fn from_filename(filename: &str) -> Self {
        if is_image(filename) {
            FileKind::Image
        } else if is_pdf(filename) {
            FileKind::Pdf
        } else {
            FileKind::Other
        }
    }

    /// Classify a bare extension (no leading dot).
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Image
        } else if ext == "pdf" {
            FileKind::Pdf
        } else {
            FileKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Pdf => "pdf",
            FileKind::Other => "other",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the helpers report about one filename.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub extension: String,
    pub kind: FileKind,
}

impl FileInfo {
    pub fn inspect(filename: &str) -> Self {
        Self {
            name: filename.to_string(),
            extension: file_extension(filename).to_string(),
            kind: FileKind::from_filename(filename),
        }
    }

    pub fn is_image(&self) -> bool {
        self.kind == FileKind::Image
    }

    pub fn is_pdf(&self) -> bool {
        self.kind == FileKind::Pdf
    }
}
