//! Sorting and pagination of the validated corpus.
//!
//! Records sort ascending by the *numeric* value of `id` — "2" comes before
//! "10", never lexical order. The sorted corpus is then sliced into
//! consecutive pages of at most `per_page` records; the last page may be
//! shorter. Page numbering is 1-based and contiguous, and every page carries
//! the same `total_pages` so the template can render pagination controls
//! without further context.

use crate::record::TombstoneRecord;
use serde::Serialize;

/// One output page: an ordered slice of the sorted corpus.
#[derive(Debug, Serialize)]
pub struct Page {
    /// 1-based sequential page number.
    pub page_num: usize,
    /// Records on this page, in corpus order. At most `per_page` entries.
    pub data: Vec<TombstoneRecord>,
    /// Total page count, identical across all pages of a build.
    pub total_pages: usize,
}

/// Sort `records` numerically by id and slice into pages of `per_page`.
///
/// An empty corpus yields zero pages; the orchestrator treats that as a
/// build abort. `per_page` is validated to be at least 1 at config load.
pub fn paginate(mut records: Vec<TombstoneRecord>, per_page: usize) -> Vec<Page> {
    if records.is_empty() {
        return Vec::new();
    }

    records.sort_by_key(|r| r.id_num());

    let total = records.len();
    let total_pages = total.div_ceil(per_page);

    let mut pages = Vec::with_capacity(total_pages);
    let mut chunks = records.into_iter();
    for page_num in 1..=total_pages {
        let data: Vec<TombstoneRecord> = chunks.by_ref().take(per_page).collect();
        pages.push(Page {
            page_num,
            data,
            total_pages,
        });
    }
    pages
}
