//! Shared test utilities for the tombgen test suite.
//!
//! Record constructors and fixture-site setup used across module tests.
//! Tests get isolated `tempfile` directories they can mutate freely.

use crate::record::TombstoneRecord;
use serde_json::json;
use std::fs;
use std::path::Path;

/// An in-memory record with the sample shape, id `n`.
pub fn record(n: u64) -> TombstoneRecord {
    serde_json::from_value(json!({
        "id": n.to_string(),
        "name": format!("CyberSoul{n}"),
        "avatar": "/assets/m.png",
        "epitaph": format!("Here lies #{n}."),
        "links": [{"url": "http://example.com", "title": "Example Link"}],
    }))
    .unwrap()
}

/// The JSON body of [`record`]`(n)`.
pub fn record_json(n: u64) -> String {
    serde_json::to_string_pretty(&record(n)).unwrap()
}

/// Write `<n>.json` with a valid record body into `dir`.
pub fn write_record(dir: &Path, n: u64) {
    fs::write(dir.join(format!("{n}.json")), record_json(n)).unwrap();
}

/// A template carrying all three injection markers, as the shipped
/// `index.html` does.
pub fn minimal_template() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title id="page-title">Cyber Cemetery</title>
</head>
<body>
    <div class="tombstone-container"></div>
    <script>
        window.PAGE_DATA = [];
        window.CURRENT_PAGE_NUMBER = 1;
        window.TOTAL_PAGES = 1;
    </script>
    <script src="js/main.js"></script>
</body>
</html>
"#
    .to_string()
}

/// Lay out a buildable site under `root`: config file, template, and an
/// input directory holding `record_count` valid records.
pub fn write_site(root: &Path, per_page: usize, record_count: u64) {
    fs::write(
        root.join("config.toml"),
        format!("per_page = {per_page}\n"),
    )
    .unwrap();
    fs::write(root.join("index.html"), minimal_template()).unwrap();

    let input_dir = root.join("tombstones_raw");
    fs::create_dir_all(&input_dir).unwrap();
    for n in 1..=record_count {
        write_record(&input_dir, n);
    }
}
