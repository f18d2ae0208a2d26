//! Template injection.
//!
//! The site template is a hand-maintained `index.html` whose script region
//! carries three placeholder assignments:
//!
//! ```text
//! <script>
//!     window.PAGE_DATA = [];
//!     window.CURRENT_PAGE_NUMBER = 1;
//!     window.TOTAL_PAGES = 1;
//! </script>
//! ```
//!
//! Injection is pure text splicing: find the assignment token, find the
//! value's terminator (`];` for the array, `;` for the integers), and splice
//! the generated text between. The record payload is serialized with
//! `serde_json`, which leaves non-ASCII text as literal UTF-8 and emits each
//! record's keys in source-document order — the emitted pages stay
//! human-readable and faithful to the input files.
//!
//! A marker that cannot be located (or whose terminator is absent) is
//! reported back to the caller and the template passes through unmodified at
//! that point; the remaining substitutions still run. The orchestrator
//! writes whatever was produced — partial substitution is not escalated.
//!
//! No I/O happens here. Identical template and page inputs always produce
//! byte-identical output.

use crate::paginate::Page;
use std::fmt;

const PAGE_DATA_TOKEN: &str = "window.PAGE_DATA = ";
const CURRENT_PAGE_TOKEN: &str = "window.CURRENT_PAGE_NUMBER = ";
const TOTAL_PAGES_TOKEN: &str = "window.TOTAL_PAGES = ";

/// The three injection points in the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    PageData,
    CurrentPage,
    TotalPages,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Marker::PageData => "window.PAGE_DATA",
            Marker::CurrentPage => "window.CURRENT_PAGE_NUMBER",
            Marker::TotalPages => "window.TOTAL_PAGES",
        };
        f.write_str(token)
    }
}

/// Result of injecting one page into the template.
#[derive(Debug)]
pub struct Injection {
    /// The page HTML, substituted wherever markers were found.
    pub html: String,
    /// Injection points that could not be located.
    pub missing: Vec<Marker>,
}

/// Splice one page's data into the template.
///
/// Serialization of validated records cannot produce non-string keys, so the
/// error branch exists only to satisfy `serde_json`'s signature.
pub fn inject_page(template: &str, page: &Page) -> Result<Injection, serde_json::Error> {
    let payload = serde_json::to_string(&page.data)?;

    let mut html = template.to_string();
    let mut missing = Vec::new();

    match splice_array(&html, PAGE_DATA_TOKEN, &payload) {
        Some(spliced) => html = spliced,
        None => missing.push(Marker::PageData),
    }
    match splice_scalar(&html, CURRENT_PAGE_TOKEN, &page.page_num.to_string()) {
        Some(spliced) => html = spliced,
        None => missing.push(Marker::CurrentPage),
    }
    match splice_scalar(&html, TOTAL_PAGES_TOKEN, &page.total_pages.to_string()) {
        Some(spliced) => html = spliced,
        None => missing.push(Marker::TotalPages),
    }

    Ok(Injection { html, missing })
}

/// Replace an array assignment: everything from after the token up to and
/// including the closing `]` (the `;` survives).
fn splice_array(content: &str, token: &str, replacement: &str) -> Option<String> {
    let start = content.find(token)? + token.len();
    let close = start + content[start..].find("];")?;
    Some(format!(
        "{}{}{}",
        &content[..start],
        replacement,
        &content[close + 1..]
    ))
}

/// Replace a scalar assignment: everything from after the token up to the
/// terminating `;` (exclusive).
fn splice_scalar(content: &str, token: &str, replacement: &str) -> Option<String> {
    let start = content.find(token)? + token.len();
    let end = start + content[start..].find(';')?;
    Some(format!(
        "{}{}{}",
        &content[..start],
        replacement,
        &content[end..]
    ))
}
