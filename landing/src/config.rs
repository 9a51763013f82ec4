//! Site-level settings that are not page content: asset URLs, the
//! footer year and where the static export lands.
//!
//! Read from an optional TOML file; every key has a default.
//!
//! ```toml
//! logo_url = "https://cdn.example.org/afsah-logo.png"
//! copyright_year = 2025
//! out = "public/index.html"
//! ```

use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_LOGO_URL: &str = "/afsah-final-logo-02.png";
pub const DEFAULT_FONT_STYLESHEET_URL: &str = "https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@500;600&family=Inter:wght@400;500;600;700&display=swap";
pub const DEFAULT_OUT: &str = "dist/index.html";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Externally hosted logo image
    pub logo_url: String,
    /// Web font stylesheet (`@import`ed by the page CSS)
    pub font_stylesheet_url: String,
    /// Footer year; `None` means the year at render time
    pub copyright_year: Option<i32>,
    /// Output file for the static export
    pub out: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            logo_url: DEFAULT_LOGO_URL.to_string(),
            font_stylesheet_url: DEFAULT_FONT_STYLESHEET_URL.to_string(),
            copyright_year: None,
            out: PathBuf::from(DEFAULT_OUT),
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Year printed in the footer copyright line.
    pub fn year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}
