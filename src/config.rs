//! Build configuration module.
//!
//! Handles loading and validating `config.toml` from the site root. Unlike
//! most settings files, the config is *required*: a missing or unparseable
//! file is the one fatal startup condition, because a build that silently
//! falls back to stock paths can overwrite the wrong directory. Individual
//! keys are all optional and default to the values below.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All keys are optional - defaults shown below
//!
//! per_page = 20                          # Records per generated page
//! input_dir_name = "tombstones_raw"      # Directory of <id>.json records
//! output_dir_name = "dist"               # Output directory for the site
//! template_index_path = "index.html"     # HTML template with injection markers
//! template_js_path = "js/main.js"        # Recognized, not consumed by the build
//! template_css_path = "css/styles.css"   # Recognized, not consumed by the build
//! assets_dir_name = "assets"             # Third static dir copied next to js/ and css/
//! template_page_name_format = "page_{}.html"  # Name for pages 2..N ({} = page number)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build settings loaded from `config.toml`.
///
/// Every field has a default; user config files need only specify the
/// values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Number of records per generated page.
    pub per_page: usize,
    /// Directory (relative to the site root) holding `<id>.json` records.
    pub input_dir_name: String,
    /// Directory (relative to the site root) the site is written into.
    pub output_dir_name: String,
    /// HTML template containing the three injection markers.
    pub template_index_path: String,
    /// Path of the site script. Recognized but not consumed by the build.
    pub template_js_path: String,
    /// Path of the site stylesheet. Recognized but not consumed by the build.
    pub template_css_path: String,
    /// Static directory copied into the output alongside `js/` and `css/`.
    pub assets_dir_name: String,
    /// Filename for pages 2..N; `{}` is replaced with the page number.
    pub template_page_name_format: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            per_page: 20,
            input_dir_name: "tombstones_raw".to_string(),
            output_dir_name: "dist".to_string(),
            template_index_path: "index.html".to_string(),
            template_js_path: "js/main.js".to_string(),
            template_css_path: "css/styles.css".to_string(),
            assets_dir_name: "assets".to_string(),
            template_page_name_format: "page_{}.html".to_string(),
        }
    }
}

impl BuildConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::Validation(
                "per_page must be at least 1".into(),
            ));
        }
        if !self.template_page_name_format.contains("{}") {
            return Err(ConfigError::Validation(
                "template_page_name_format must contain a '{}' placeholder".into(),
            ));
        }
        Ok(())
    }

    /// Render the page-N filename from `template_page_name_format`.
    ///
    /// Page 1 is always `index.html`; this is only used for pages 2..N.
    pub fn page_file_name(&self, page_num: usize) -> String {
        self.template_page_name_format
            .replacen("{}", &page_num.to_string(), 1)
    }
}

/// Load and validate the config file at `path`.
///
/// A missing file is `ConfigError::Missing`, not a silent default: the
/// caller treats any error from here as fatal.
pub fn load_config(path: &Path) -> Result<BuildConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Missing(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let config: BuildConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# tombgen Configuration
# =====================
# The config file itself is required; every key in it is optional.
# Values shown below are the defaults. Unknown keys will cause an error.

# Number of records per generated page.
per_page = 20

# Directory of <id>.json record files, relative to the site root.
input_dir_name = "tombstones_raw"

# Output directory the site is written into.
output_dir_name = "dist"

# HTML template carrying the window.PAGE_DATA / window.CURRENT_PAGE_NUMBER /
# window.TOTAL_PAGES injection markers.
template_index_path = "index.html"

# Site script and stylesheet paths. Recognized, not consumed by the build.
template_js_path = "js/main.js"
template_css_path = "css/styles.css"

# Static directory copied into the output alongside js/ and css/.
assets_dir_name = "assets"

# Filename for pages 2..N; {} is replaced with the page number.
# Page 1 is always index.html.
template_page_name_format = "page_{}.html"
"#
}
