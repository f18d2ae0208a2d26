//! CLI output formatting for the build pipeline.
//!
//! Output is information-centric: each record leads with its positional
//! index and name, with the source file shown as an indented `Source:` line.
//! Rejections and asset warnings get their own lines naming the offending
//! file and the violated constraint — the console is the build's only
//! reporting channel.
//!
//! Each step has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::assets::AssetStatus;
use crate::config::BuildConfig;
use crate::corpus::Corpus;
use crate::paginate::Page;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Corpus report
// ============================================================================

/// Format the corpus load result: accepted records, then skipped files.
pub fn format_corpus_output(corpus: &Corpus) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Records".to_string());
    for (i, record) in corpus.records.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), record.name()));
        lines.push(format!("        Source: {}.json", record.id()));
    }
    if corpus.records.is_empty() {
        lines.push("    (none)".to_string());
    }

    if !corpus.rejections.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for rejection in &corpus.rejections {
            lines.push(format!(
                "    {}: {}",
                rejection.filename, rejection.reason
            ));
        }
    }

    lines
}

/// Print the corpus report to stdout.
pub fn print_corpus_output(corpus: &Corpus) {
    for line in format_corpus_output(corpus) {
        println!("{}", line);
    }
}

// ============================================================================
// Page report
// ============================================================================

/// Format the pagination result: one `page → file` line per page.
pub fn format_pages_output(pages: &[Page], config: &BuildConfig) -> Vec<String> {
    let total_records: usize = pages.iter().map(|p| p.data.len()).sum();
    let mut lines = vec![format!(
        "Sorted {} tombstones into {} pages",
        total_records,
        pages.len()
    )];
    for page in pages {
        let filename = page_output_name(page.page_num, config);
        let noun = if page.data.len() == 1 {
            "record"
        } else {
            "records"
        };
        lines.push(format!(
            "    Page {} ({} {}) \u{2192} {}",
            page.page_num,
            page.data.len(),
            noun,
            filename
        ));
    }
    lines
}

/// Output filename for a page: `index.html` for page 1, the configured
/// format for everything after.
pub fn page_output_name(page_num: usize, config: &BuildConfig) -> String {
    if page_num == 1 {
        "index.html".to_string()
    } else {
        config.page_file_name(page_num)
    }
}

/// Print the pagination report to stdout.
pub fn print_pages_output(pages: &[Page], config: &BuildConfig) {
    for line in format_pages_output(pages, config) {
        println!("{}", line);
    }
}

// ============================================================================
// Asset report
// ============================================================================

/// Format asset copy statuses: copied directories and skip warnings.
pub fn format_asset_output(statuses: &[AssetStatus]) -> Vec<String> {
    statuses
        .iter()
        .map(|status| match status {
            AssetStatus::Copied { dir, files } => {
                let noun = if *files == 1 { "file" } else { "files" };
                format!("    {}/ \u{2192} {} {}", dir, files, noun)
            }
            AssetStatus::SkippedMissing { dir } => {
                format!("    Warning: static directory '{}' not found, skipping", dir)
            }
        })
        .collect()
}

/// Print the asset report to stdout.
pub fn print_asset_output(statuses: &[AssetStatus]) {
    for line in format_asset_output(statuses) {
        println!("{}", line);
    }
}
