//! Filename helper corpus tests
//!
//! Each case in fixtures/filename_corpus.json pins the extension, image and
//! PDF answers for one filename.

mod fixtures;

use fixtures::FilenameCorpus;
use nullfill::{file_extension, is_image, is_pdf, FileInfo, FileKind};

#[test]
fn test_corpus_loads() {
    let corpus = FilenameCorpus::load().expect("Failed to load corpus");
    assert_eq!(corpus.schema_version, 1);
    assert!(corpus.test_cases.len() > 10, "Expected at least 10 test cases");
}

#[test]
fn test_corpus_extensions() {
    let corpus = FilenameCorpus::load().unwrap();
    for case in &corpus.test_cases {
        assert_eq!(
            file_extension(&case.filename),
            case.extension,
            "extension mismatch for case {}",
            case.id
        );
    }
}

#[test]
fn test_corpus_predicates() {
    let corpus = FilenameCorpus::load().unwrap();
    for case in &corpus.test_cases {
        assert_eq!(is_image(&case.filename), case.image, "is_image mismatch for case {}", case.id);
        assert_eq!(is_pdf(&case.filename), case.pdf, "is_pdf mismatch for case {}", case.id);
    }
}

#[test]
fn test_corpus_file_info_agrees() {
    let corpus = FilenameCorpus::load().unwrap();
    for case in &corpus.test_cases {
        let info = FileInfo::inspect(&case.filename);
        let expected_kind = if case.image {
            FileKind::Image
        } else if case.pdf {
            FileKind::Pdf
        } else {
            FileKind::Other
        };
        assert_eq!(info.kind, expected_kind, "kind mismatch for case {}", case.id);
        assert_eq!(info.extension, case.extension);
    }
}

#[test]
fn test_image_and_pdf_are_exclusive() {
    let corpus = FilenameCorpus::load().unwrap();
    for case in &corpus.test_cases {
        assert!(!(is_image(&case.filename) && is_pdf(&case.filename)), "case {}", case.id);
    }
}
