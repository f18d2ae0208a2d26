//! Corpus loading: enumerate, validate, collect.
//!
//! Walks the input directory for `*.json` record files and runs each one
//! through the validator. Valid records are collected; invalid files are
//! recorded as rejections with their reasons and excluded. Rejections never
//! abort the load — the decision to stop a build with zero valid records
//! belongs to the orchestrator.
//!
//! Filesystem enumeration order is not relied upon for correctness; the
//! paginator sorts the corpus afterwards.

use crate::record::{self, RecordError, TombstoneRecord};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("input directory not found: {0}")]
    MissingDir(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The result of loading an input directory.
#[derive(Debug)]
pub struct Corpus {
    /// Records that passed validation, in enumeration order (unsorted).
    pub records: Vec<TombstoneRecord>,
    /// Files that failed validation, with the violated constraint.
    pub rejections: Vec<Rejection>,
}

/// One skipped input file.
#[derive(Debug)]
pub struct Rejection {
    pub filename: String,
    pub reason: RecordError,
}

impl Corpus {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load and validate every `*.json` file under `input_dir`.
pub fn load(input_dir: &Path) -> Result<Corpus, CorpusError> {
    if !input_dir.is_dir() {
        return Err(CorpusError::MissingDir(input_dir.to_path_buf()));
    }

    let mut json_files: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("json"))
                    .unwrap_or(false)
        })
        .collect();
    json_files.sort();

    let mut records = Vec::new();
    let mut rejections = Vec::new();
    for path in &json_files {
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_default();
        match record::load_record(path) {
            Ok(rec) => records.push(rec),
            Err(reason) => rejections.push(Rejection { filename, reason }),
        }
    }

    Ok(Corpus {
        records,
        rejections,
    })
}
