//! Static asset copying.
//!
//! The published site needs the working directory's `js/`, `css/`, and
//! assets directories next to the generated pages. Each present source
//! directory replaces any prior copy under the output root wholesale:
//! delete the old destination, then mirror the source tree into place.
//! A missing source directory is a warning, not a failure — a site without
//! custom assets is still a site.

use crate::config::BuildConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid asset path: {0}")]
    InvalidPath(PathBuf),
}

/// Outcome of one static directory, for console reporting.
#[derive(Debug, PartialEq, Eq)]
pub enum AssetStatus {
    Copied { dir: String, files: usize },
    SkippedMissing { dir: String },
}

const DIST_JS_DIR: &str = "js";
const DIST_CSS_DIR: &str = "css";

/// Copy the static directories from `site_root` into `output_dir`.
///
/// The set is fixed: `js/`, `css/`, and the configured assets directory.
pub fn copy_static_assets(
    site_root: &Path,
    output_dir: &Path,
    config: &BuildConfig,
) -> Result<Vec<AssetStatus>, AssetError> {
    let dirs = [DIST_JS_DIR, DIST_CSS_DIR, config.assets_dir_name.as_str()];

    let mut statuses = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let source = site_root.join(dir);
        let dest = output_dir.join(dir);

        if source.is_dir() {
            if dest.exists() {
                fs::remove_dir_all(&dest)?;
            }
            let files = mirror_dir(&source, &dest)?;
            statuses.push(AssetStatus::Copied {
                dir: dir.to_string(),
                files,
            });
        } else {
            statuses.push(AssetStatus::SkippedMissing {
                dir: dir.to_string(),
            });
        }
    }
    Ok(statuses)
}

/// Deep-copy `src` into `dst`, returning the number of files copied.
fn mirror_dir(src: &Path, dst: &Path) -> Result<usize, AssetError> {
    let mut files = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| AssetError::InvalidPath(entry.path().to_path_buf()))?;
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            files += 1;
        }
    }
    Ok(files)
}
