//! End-to-end build tests: full pipeline runs against temp site roots.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tombgen::config::BuildConfig;
use tombgen::generate::{self, Outcome};
use tombgen::record::TombstoneRecord;

const TEMPLATE: &str = r#"<!DOCTYPE html>
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
"#;

fn record_body(id: u64, name: &str) -> String {
    format!(
        r#"{{
  "id": "{id}",
  "name": "{name}",
  "avatar": "/assets/m.png",
  "epitaph": "Here lies the echo of a digital dream.\n{id}",
  "created": "2026-01-18",
  "links": [
    {{"url": "http://example.com", "title": "Example Link"}}
  ]
}}"#
    )
}

/// Site root with a template and `ids` as valid records.
fn setup_site(ids: &[u64]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("index.html"), TEMPLATE).unwrap();
    let input = tmp.path().join("tombstones_raw");
    fs::create_dir_all(&input).unwrap();
    for &id in ids {
        fs::write(
            input.join(format!("{id}.json")),
            record_body(id, &format!("CyberSoul{id}")),
        )
        .unwrap();
    }
    tmp
}

fn config_with_per_page(per_page: usize) -> BuildConfig {
    BuildConfig {
        per_page,
        ..BuildConfig::default()
    }
}

/// Parse the spliced `window.PAGE_DATA` payload back out of a page.
fn extract_page_data(html: &str) -> Vec<TombstoneRecord> {
    let token = "window.PAGE_DATA = ";
    let start = html.find(token).unwrap() + token.len();
    let end = start + html[start..].find("];").unwrap() + 1;
    serde_json::from_str(&html[start..end]).unwrap()
}

fn read_page(root: &Path, name: &str) -> String {
    fs::read_to_string(root.join("dist").join(name)).unwrap()
}

#[test]
fn scenario_three_records_page_size_two() {
    let site = setup_site(&[1, 2, 3]);
    let outcome = generate::generate(site.path(), &config_with_per_page(2)).unwrap();
    assert!(matches!(outcome, Outcome::Complete(_)));

    let dist = site.path().join("dist");
    assert!(dist.join("index.html").exists());
    assert!(dist.join("page_2.html").exists());
    assert!(!dist.join("page_3.html").exists());

    let first = extract_page_data(&read_page(site.path(), "index.html"));
    let ids: Vec<&str> = first.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let second = extract_page_data(&read_page(site.path(), "page_2.html"));
    let ids: Vec<&str> = second.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["3"]);
}

#[test]
fn scenario_mismatched_id_rejected() {
    let site = setup_site(&[1, 2]);
    // 5.json whose body claims id 6
    fs::write(
        site.path().join("tombstones_raw/5.json"),
        record_body(6, "Impostor"),
    )
    .unwrap();

    let outcome = generate::generate(site.path(), &config_with_per_page(20)).unwrap();
    let summary = match outcome {
        Outcome::Complete(s) => s,
        other => panic!("expected completion, got {other:?}"),
    };
    assert_eq!(summary.valid_records, 2);
    assert_eq!(summary.rejected_records, 1);

    let data = extract_page_data(&read_page(site.path(), "index.html"));
    assert!(data.iter().all(|r| r.name() != "Impostor"));
}

#[test]
fn scenario_empty_input_aborts_without_output() {
    let site = setup_site(&[]);
    let outcome = generate::generate(site.path(), &config_with_per_page(20)).unwrap();
    assert!(matches!(outcome, Outcome::NoValidRecords));
    assert!(!site.path().join("dist").exists());
}

#[test]
fn scenario_link_missing_title_rejects_whole_record() {
    let site = setup_site(&[1]);
    fs::write(
        site.path().join("tombstones_raw/2.json"),
        r#"{
  "id": "2",
  "name": "CyberSoul2",
  "avatar": "/assets/m.png",
  "epitaph": "e",
  "links": [
    {"url": "http://example.com", "title": "ok"},
    {"url": "http://example.com/broken"}
  ]
}"#,
    )
    .unwrap();

    let outcome = generate::generate(site.path(), &config_with_per_page(20)).unwrap();
    let summary = match outcome {
        Outcome::Complete(s) => s,
        other => panic!("expected completion, got {other:?}"),
    };
    assert_eq!(summary.valid_records, 1);
    assert_eq!(summary.rejected_records, 1);

    let data = extract_page_data(&read_page(site.path(), "index.html"));
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].id(), "1");
}

#[test]
fn numeric_ordering_across_pages() {
    let site = setup_site(&[10, 2, 1, 21, 3]);
    generate::generate(site.path(), &config_with_per_page(3)).unwrap();

    let mut all_ids = Vec::new();
    for name in ["index.html", "page_2.html"] {
        let data = extract_page_data(&read_page(site.path(), name));
        all_ids.extend(data.iter().map(|r| r.id_num()).collect::<Vec<_>>());
    }
    assert_eq!(all_ids, vec![1, 2, 3, 10, 21]);
}

#[test]
fn page_counters_injected_per_page() {
    let site = setup_site(&[1, 2, 3]);
    generate::generate(site.path(), &config_with_per_page(1)).unwrap();

    let second = read_page(site.path(), "page_2.html");
    assert!(second.contains("window.CURRENT_PAGE_NUMBER = 2;"));
    assert!(second.contains("window.TOTAL_PAGES = 3;"));

    let third = read_page(site.path(), "page_3.html");
    assert!(third.contains("window.CURRENT_PAGE_NUMBER = 3;"));
    assert!(third.contains("window.TOTAL_PAGES = 3;"));
}

#[test]
fn round_trip_preserves_records_field_for_field() {
    let site = setup_site(&[1, 2]);
    generate::generate(site.path(), &config_with_per_page(20)).unwrap();

    let data = extract_page_data(&read_page(site.path(), "index.html"));
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].name(), "CyberSoul1");
    assert_eq!(data[0].avatar(), "/assets/m.png");
    assert!(data[0].epitaph().contains('\n'));
    assert_eq!(data[0].links()[0].title, "Example Link");
    assert_eq!(
        data[0].field("created").and_then(|v| v.as_str()),
        Some("2026-01-18")
    );
}

#[test]
fn emitted_payload_keeps_each_source_file_key_order() {
    let site = setup_site(&[]);
    // name deliberately before id; created interleaved mid-document.
    fs::write(
        site.path().join("tombstones_raw/1.json"),
        r#"{
  "name": "CyberSoul1",
  "created": "2026-01-18",
  "id": "1",
  "avatar": "/assets/m.png",
  "epitaph": "e"
}"#,
    )
    .unwrap();

    generate::generate(site.path(), &config_with_per_page(20)).unwrap();
    let html = read_page(site.path(), "index.html");

    let token = "window.PAGE_DATA = ";
    let start = html.find(token).unwrap() + token.len();
    let end = start + html[start..].find("];").unwrap() + 1;
    let payload = &html[start..end];

    let positions: Vec<usize> = ["\"name\"", "\"created\"", "\"id\"", "\"avatar\"", "\"epitaph\""]
        .iter()
        .map(|key| payload.find(key).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "key order changed: {payload}");
}

#[test]
fn non_ascii_record_text_survives_to_the_page() {
    let site = setup_site(&[]);
    fs::write(
        site.path().join("tombstones_raw/1.json"),
        r#"{
  "id": "1",
  "name": "赛博之魂",
  "avatar": "/assets/m.png",
  "epitaph": "安息吧。"
}"#,
    )
    .unwrap();

    generate::generate(site.path(), &config_with_per_page(20)).unwrap();
    let html = read_page(site.path(), "index.html");
    assert!(html.contains("赛博之魂"));
    assert!(html.contains("安息吧。"));
}

#[test]
fn static_dirs_copied_and_prior_copies_replaced() {
    let site = setup_site(&[1]);
    for (dir, file, body) in [
        ("js", "main.js", "// js"),
        ("css", "styles.css", "body{}"),
        ("assets", "m.png", "png"),
    ] {
        fs::create_dir_all(site.path().join(dir)).unwrap();
        fs::write(site.path().join(dir).join(file), body).unwrap();
    }
    // A stale file from a previous build
    fs::create_dir_all(site.path().join("dist/js")).unwrap();
    fs::write(site.path().join("dist/js/old.js"), "stale").unwrap();

    generate::generate(site.path(), &config_with_per_page(20)).unwrap();

    assert!(site.path().join("dist/js/main.js").exists());
    assert!(site.path().join("dist/css/styles.css").exists());
    assert!(site.path().join("dist/assets/m.png").exists());
    assert!(!site.path().join("dist/js/old.js").exists());
}

#[test]
fn seeded_site_builds_end_to_end() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("index.html"), TEMPLATE).unwrap();
    tombgen::seed::write_sample_records(&tmp.path().join("tombstones_raw"), 5).unwrap();

    let outcome = generate::generate(tmp.path(), &config_with_per_page(2)).unwrap();
    let summary = match outcome {
        Outcome::Complete(s) => s,
        other => panic!("expected completion, got {other:?}"),
    };
    assert_eq!(summary.valid_records, 5);
    assert_eq!(summary.pages_written, 3);
    assert!(tmp.path().join("dist/page_3.html").exists());
}
