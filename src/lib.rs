//! # tombgen
//!
//! A static site generator for tombstone memorial listings. A directory of
//! `<id>.json` records is the data source; the output is a paginated static
//! site built around a single hand-maintained HTML template, ready to drop
//! on any file server.
//!
//! # Architecture: Linear Build Pipeline
//!
//! One build is a single pass through five stages:
//!
//! ```text
//! tombstones_raw/*.json → validate → sort + paginate → inject → dist/
//!                                                      assets  ↗
//! ```
//!
//! There is no intermediate state between stages and no incremental build:
//! the corpus is small, a full rebuild is cheap, and a one-shot pass keeps
//! every stage a plain function that unit tests can call directly.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Required `config.toml` loading and validation |
//! | [`record`] | Single-record schema validation with structured rejection reasons |
//! | [`corpus`] | Input directory enumeration, skip-and-report collection |
//! | [`paginate`] | Numeric-id sorting and fixed-size page slicing |
//! | [`inject`] | Text-splice injection of page data into the HTML template |
//! | [`assets`] | Replace-then-mirror copying of `js/`, `css/`, and assets |
//! | [`generate`] | Build orchestration and the error taxonomy |
//! | [`seed`] | Sample record generation for the `seed` command |
//! | [`output`] | CLI output formatting — pure `format_*` + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Template Splicing Over a Template Engine
//!
//! The page shell is a real `index.html` a designer can open in a browser:
//! its placeholder assignments (`window.PAGE_DATA = [];` and friends) render
//! as an empty site. The build splices generated values into those
//! assignments textually instead of rendering through a template engine, so
//! the template stays a valid, previewable HTML file with no custom syntax.
//! A marker the splicer cannot find is reported and skipped, never fatal —
//! a site with an empty page is more useful during template surgery than a
//! failed build.
//!
//! ## Skip-and-Report Validation
//!
//! One malformed record must not take down a site of hundreds. Validation
//! errors are values ([`record::RecordError`]) carried to the console
//! report, and the build only stops when *nothing* survives. The inverse
//! holds for configuration: a missing or bad `config.toml` is fatal at
//! startup, because every later path decision depends on it.
//!
//! ## Records Pass Through Whole
//!
//! Validation checks the schema fields but the injected payload carries the
//! entire source record — unknown fields included, keys in the order the
//! source file had them. The frontend owns the rendering; the build does
//! not get to decide which fields it may see or reorder them.

pub mod assets;
pub mod config;
pub mod corpus;
pub mod generate;
pub mod inject;
pub mod output;
pub mod paginate;
pub mod record;
pub mod seed;

#[cfg(test)]
pub(crate) mod test_helpers;
