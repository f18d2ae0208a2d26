//! Site generation: the build orchestrator.
//!
//! Sequences the whole pipeline for one build run:
//!
//! ```text
//! 1. Load + validate records        (corpus)
//! 2. Sort + paginate                (paginate)
//! 3. Read the HTML template
//! 4. Create the output directory
//! 5. Inject + write each page       (inject)
//! 6. Copy static assets             (assets)
//! ```
//!
//! Error handling follows a strict taxonomy. Fatal: missing input
//! directory, unreadable template (both surface as `Err`, before any output
//! is created). Abort: zero valid records or zero pages ends the run with a
//! message and no site, but is not a process failure. Recoverable: a bad
//! record, a missing asset directory, or a single page's write failure is
//! reported and the build carries on.

use crate::assets::{self, AssetStatus};
use crate::config::BuildConfig;
use crate::corpus::{self, CorpusError};
use crate::inject;
use crate::output;
use crate::paginate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Corpus(#[from] CorpusError),
    #[error("cannot read HTML template '{path}': {source}")]
    Template {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("asset copy failed: {0}")]
    Assets(#[from] assets::AssetError),
}

/// How a build run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Site written. Carries the build summary.
    Complete(Summary),
    /// No record survived validation; nothing was written.
    NoValidRecords,
    /// Pagination produced no pages; nothing was written.
    NoPages,
}

/// Counts for the final report.
#[derive(Debug)]
pub struct Summary {
    pub valid_records: usize,
    pub rejected_records: usize,
    pub pages_written: usize,
    pub pages_failed: usize,
    pub assets: Vec<AssetStatus>,
}

/// Run the full build for the site at `root`.
pub fn generate(root: &Path, config: &BuildConfig) -> Result<Outcome, GenerateError> {
    println!("==> Step 1: Loading records from {}", config.input_dir_name);
    let input_dir = root.join(&config.input_dir_name);
    let corpus = corpus::load(&input_dir)?;
    output::print_corpus_output(&corpus);

    if corpus.is_empty() {
        println!("No valid records to process; site generation aborted.");
        return Ok(Outcome::NoValidRecords);
    }

    println!("==> Step 2: Sorting and paginating");
    let valid_records = corpus.records.len();
    let rejected_records = corpus.rejections.len();
    let pages = paginate::paginate(corpus.records, config.per_page);
    if pages.is_empty() {
        println!("No pages to generate; site generation aborted.");
        return Ok(Outcome::NoPages);
    }
    output::print_pages_output(&pages, config);

    println!("==> Step 3: Reading HTML template");
    let template_path = root.join(&config.template_index_path);
    let template = fs::read_to_string(&template_path).map_err(|source| {
        GenerateError::Template {
            path: template_path.clone(),
            source,
        }
    })?;

    let output_dir = root.join(&config.output_dir_name);
    println!(
        "==> Step 4: Creating output directory {}",
        output_dir.display()
    );
    fs::create_dir_all(&output_dir)?;

    println!("==> Step 5: Generating HTML pages");
    let mut pages_written = 0;
    let mut pages_failed = 0;
    for page in &pages {
        let injection = inject::inject_page(&template, page)?;
        for marker in &injection.missing {
            println!(
                "    Warning: injection point '{}' not found in template",
                marker
            );
        }

        let filename = output::page_output_name(page.page_num, config);
        let path = output_dir.join(&filename);
        match fs::write(&path, injection.html) {
            Ok(()) => {
                println!("    Generated {}", filename);
                pages_written += 1;
            }
            Err(err) => {
                // Best-effort: remaining pages are still attempted.
                println!("    Error: cannot write '{}': {}", path.display(), err);
                pages_failed += 1;
            }
        }
    }

    println!("==> Step 6: Copying static assets");
    let assets = assets::copy_static_assets(root, &output_dir, config)?;
    output::print_asset_output(&assets);

    println!("==> Site generated at {}", output_dir.display());
    Ok(Outcome::Complete(Summary {
        valid_records,
        rejected_records,
        pages_written,
        pages_failed,
        assets,
    }))
}
