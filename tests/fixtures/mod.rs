//! Test fixtures shared by the integration tests
//!
//! - Filename corpus (extension, image and PDF expectations)
//! - Merge cases (target, ordered sources, expected result)

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Path to the filename corpus fixture
pub fn filename_corpus_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/filename_corpus.json")
}

/// Path to the merge cases fixture
pub fn merge_cases_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/merge_cases.json")
}

/// Filename test case from filename_corpus.json
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FilenameTestCase {
    pub id: String,
    pub filename: String,
    pub extension: String,
    pub image: bool,
    pub pdf: bool,
}

/// Full filename corpus
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FilenameCorpus {
    pub schema_version: u32,
    pub description: String,
    pub test_cases: Vec<FilenameTestCase>,
}

impl FilenameCorpus {
    /// Load corpus from the fixture file
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(filename_corpus_path())?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Merge test case from merge_cases.json
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MergeTestCase {
    pub id: String,
    pub target: serde_json::Value,
    pub sources: Vec<serde_json::Value>,
    pub expected: serde_json::Value,
}

/// Full merge case set
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MergeCases {
    pub schema_version: u32,
    pub description: String,
    pub test_cases: Vec<MergeTestCase>,
}

impl MergeCases {
    /// Load cases from the fixture file
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(merge_cases_path())?;
        Ok(serde_json::from_str(&content)?)
    }
}
