//! Filename inspection helpers.
//!
//! Pure, stateless checks over a filename string: image detection, PDF
//! detection and extension extraction. An absent filename is the empty
//! string; it has no extension and is neither an image nor a PDF.

mod kind;

pub use kind::{FileInfo, FileKind};

use regex_lite::Regex;
use std::sync::OnceLock;

/// Extensions recognised as images (matched case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpeg", "jpg", "gif", "png", "svg", "webp", "jfif", "bmp", "dpg",
];

fn image_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"(?i)\.({})$", IMAGE_EXTENSIONS.join("|"));
        Regex::new(&pattern).expect("image extension pattern is valid")
    })
}

fn pdf_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\.pdf$").expect("pdf pattern is valid"))
}

/// Whether the filename ends with a known image extension.
///
/// The match runs against the whole string, so a directory component such
/// as `shots.png/readme` does not count.
pub fn is_image(filename: &str) -> bool {
    image_regex().is_match(filename)
}

/// Whether the filename ends with `.pdf` (any case).
pub fn is_pdf(filename: &str) -> bool {
    pdf_regex().is_match(filename)
}

/// Extension of the last path segment, without the dot.
///
/// Returns `""` when the filename is empty, when the last segment (text
/// after the final `/`) is empty, or when it contains no `.`. Case is kept
/// as written.
pub fn file_extension(filename: &str) -> &str {
    let name = match filename.rfind('/') {
        Some(idx) => &filename[idx + 1..],
        None => filename,
    };

    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_known_extensions() {
        for ext in IMAGE_EXTENSIONS {
            let name = format!("picture.{}", ext);
            assert!(is_image(&name), "{} should be an image", name);
        }
    }

    #[test]
    fn test_is_image_case_insensitive() {
        assert!(is_image("photo.JPG"));
        assert!(is_image("Scan.Jpeg"));
        assert!(is_image("/var/uploads/LOGO.SVG"));
    }

    #[test]
    fn test_is_image_rejects_other_files() {
        assert!(!is_image("doc.txt"));
        assert!(!is_image("report.pdf"));
        assert!(!is_image("png"));
        assert!(!is_image("archive.png.zip"));
        assert!(!is_image("shots.png/readme"));
        assert!(!is_image(""));
    }

    #[test]
    fn test_is_image_requires_dot() {
        assert!(!is_image("notajpg"));
        assert!(is_image(".png"));
    }

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf("report.pdf"));
        assert!(is_pdf("REPORT.PDF"));
        assert!(is_pdf("a/b/c.Pdf"));
        assert!(!is_pdf("report.pdf.bak"));
        assert!(!is_pdf("pdf"));
        assert!(!is_pdf(""));
    }

    #[test]
    fn test_file_extension_last_dot() {
        assert_eq!(file_extension("/a/b/file.tar.gz"), "gz");
        assert_eq!(file_extension("photo.JPG"), "JPG");
    }

    #[test]
    fn test_file_extension_missing() {
        assert_eq!(file_extension("noext"), "");
        assert_eq!(file_extension(""), "");
        assert_eq!(file_extension("/a/b/"), "");
        assert_eq!(file_extension("dir.d/Makefile"), "");
    }

    #[test]
    fn test_file_extension_dotfile() {
        assert_eq!(file_extension("home/.bashrc"), "bashrc");
        assert_eq!(file_extension("trailing."), "");
    }
}
