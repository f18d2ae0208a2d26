//! Sample record generation for the `seed` subcommand.
//!
//! Writes `1.json` through `count.json` into the input directory so a fresh
//! checkout can produce a populated site immediately. Each record passes the
//! validator by construction; the epitaph carries the record's index so
//! generated pages are visually distinguishable.

use crate::record::{Link, TombstoneRecord};
use serde_json::json;
use std::fs;
use std::io;
use std::path::Path;

const SAMPLE_AVATAR: &str = "/assets/m.png";
const SAMPLE_EPITAPH: &str =
    "Here lies the echo of a digital dream.\nA fragment of consciousness, forever linked to the void.";
const SAMPLE_CREATED: &str = "2026-01-18";

/// Build the sample record for index `i`.
pub fn sample_record(i: u32) -> TombstoneRecord {
    let links = vec![
        Link {
            url: "http://example.com".to_string(),
            title: "Example Link".to_string(),
        },
        Link {
            url: "https://github.com/cybersoul".to_string(),
            title: "GitHub Profile".to_string(),
        },
    ];

    let mut doc = serde_json::Map::new();
    doc.insert("id".to_string(), json!(i.to_string()));
    doc.insert("name".to_string(), json!(format!("CyberSoul{i}")));
    doc.insert("avatar".to_string(), json!(SAMPLE_AVATAR));
    doc.insert("epitaph".to_string(), json!(format!("{SAMPLE_EPITAPH}\n{i}")));
    doc.insert("created".to_string(), json!(SAMPLE_CREATED));
    doc.insert("links".to_string(), json!(links));
    TombstoneRecord::from_document(doc)
}

/// Write `count` sample records into `dir`, creating it if needed.
///
/// Returns the filenames written, in order.
pub fn write_sample_records(dir: &Path, count: u32) -> io::Result<Vec<String>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(count as usize);
    for i in 1..=count {
        let record = sample_record(i);
        let body = serde_json::to_string_pretty(&record)?;
        let filename = format!("{i}.json");
        fs::write(dir.join(&filename), body)?;
        written.push(filename);
    }
    Ok(written)
}
