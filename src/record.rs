//! Record parsing and schema validation.
//!
//! One `<id>.json` file describes one tombstone: who it memorializes, the
//! avatar to show, the epitaph text, and optional outbound links. This module
//! turns a single file into either a validated [`TombstoneRecord`] or a
//! [`RecordError`] naming the violated constraint. A bad record is always a
//! per-file rejection, never a build failure — the corpus loader skips it
//! and reports the reason.
//!
//! ## Checks
//!
//! Applied in order, short-circuiting on the first failure:
//!
//! 1. the body parses as JSON;
//! 2. `id`, `name`, `avatar`, `epitaph` are all present;
//! 3. `id` is a string;
//! 4. `id` converts to an integer strictly greater than zero;
//! 5. the canonical decimal form of `id` equals the filename stem
//!    (`7.json` must carry `"id": "7"`);
//! 6. `name`, `avatar`, and `epitaph` are strings;
//! 7. `links`, if present, is an array of objects each carrying string
//!    `url` and `title` values.
//!
//! A record with no `links` key is accepted with an empty link list.
//!
//! ## Document-Order Payload
//!
//! A validated record *is* its source document: the record holds the parsed
//! JSON object and re-serializes it with the keys in the order the file had
//! them (`serde_json`'s `preserve_order` feature keeps the map
//! insertion-ordered). Fields outside the schema (`created`, for example)
//! ride along unchanged — the site template receives the whole record, not
//! a projection or a re-canonicalized copy of it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("'{0}' field must be a string")]
    FieldNotString(&'static str),
    #[error("'id' '{0}' is not a valid positive integer")]
    IdNotPositive(String),
    #[error("filename stem '{filename}' does not match 'id' '{id}'")]
    IdFilenameMismatch { filename: String, id: String },
    #[error("'links' field must be an array")]
    LinksNotArray,
    #[error("'links' entry {0} is not an object")]
    LinkNotObject(usize),
    #[error("'links' entry {0} must carry string 'url' and 'title'")]
    LinkMissingKey(usize),
}

const REQUIRED_FIELDS: &[&str] = &["id", "name", "avatar", "epitaph"];

/// One validated memorial entry.
///
/// Wraps the parsed source document whole; serialization re-emits the keys
/// in source order. The schema accessors below are valid by construction —
/// [`validate_record`] is the only way a record enters the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TombstoneRecord {
    doc: Map<String, Value>,
}

impl TombstoneRecord {
    /// Wrap an already-shaped document. Used by the seed generator; corpus
    /// records go through [`validate_record`] instead.
    pub fn from_document(doc: Map<String, Value>) -> Self {
        Self { doc }
    }

    /// The full source document, key order preserved.
    pub fn document(&self) -> &Map<String, Value> {
        &self.doc
    }

    /// Look up any field of the source document, schema or not.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.doc.get(key)
    }

    fn str_field(&self, key: &str) -> &str {
        self.doc.get(key).and_then(Value::as_str).unwrap_or("")
    }

    pub fn id(&self) -> &str {
        self.str_field("id")
    }

    /// Numeric value of `id`. Valid by construction for validated records.
    pub fn id_num(&self) -> u64 {
        self.id().parse().unwrap_or(0)
    }

    pub fn name(&self) -> &str {
        self.str_field("name")
    }

    pub fn avatar(&self) -> &str {
        self.str_field("avatar")
    }

    /// Epitaph text; may contain embedded newlines.
    pub fn epitaph(&self) -> &str {
        self.str_field("epitaph")
    }

    /// Outbound links; empty when the source had no `links` key.
    pub fn links(&self) -> Vec<Link> {
        self.doc
            .get("links")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// An outbound link shown on a tombstone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub title: String,
}

/// Read and validate one record file.
pub fn load_record(path: &Path) -> Result<TombstoneRecord, RecordError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let content = fs::read_to_string(path)?;
    validate_record(&content, &stem)
}

/// Validate a record body against its source filename stem.
///
/// Split out from [`load_record`] so the schema checks are testable without
/// touching the filesystem.
pub fn validate_record(content: &str, filename_stem: &str) -> Result<TombstoneRecord, RecordError> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Object(doc) = value else {
        return Err(RecordError::NotAnObject);
    };

    for &field in REQUIRED_FIELDS {
        if !doc.contains_key(field) {
            return Err(RecordError::MissingField(field));
        }
    }

    let id_str = doc
        .get("id")
        .and_then(Value::as_str)
        .ok_or(RecordError::FieldNotString("id"))?;
    let id_num: i64 = id_str
        .parse()
        .map_err(|_| RecordError::IdNotPositive(id_str.to_string()))?;
    if id_num <= 0 {
        return Err(RecordError::IdNotPositive(id_str.to_string()));
    }

    // Compared as the canonical decimal string, so "007.json" never matches.
    if id_num.to_string() != filename_stem {
        return Err(RecordError::IdFilenameMismatch {
            filename: filename_stem.to_string(),
            id: id_str.to_string(),
        });
    }

    for &field in &["name", "avatar", "epitaph"] {
        if !doc.get(field).is_some_and(Value::is_string) {
            return Err(RecordError::FieldNotString(field));
        }
    }

    if let Some(links) = doc.get("links") {
        let entries = links.as_array().ok_or(RecordError::LinksNotArray)?;
        for (i, entry) in entries.iter().enumerate() {
            let link = entry.as_object().ok_or(RecordError::LinkNotObject(i))?;
            let url_ok = link.get("url").is_some_and(Value::is_string);
            let title_ok = link.get("title").is_some_and(Value::is_string);
            if !url_ok || !title_ok {
                return Err(RecordError::LinkMissingKey(i));
            }
        }
    }

    Ok(TombstoneRecord { doc })
}
