//! Error types for content validation and site configuration.

use std::path::PathBuf;

use thiserror::Error;

/// A static content table breaks one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("brand field `{0}` is empty")]
    EmptyBrandField(&'static str),

    #[error("duplicate {kind} `{key}`")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("nav item `{label}` points at `{href}`, expected an in-page fragment")]
    NotAFragment { label: String, href: String },
}

/// Loading `SiteConfig` from disk failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Writing the static page failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
