//! Error types for configuration loading.

use std::path::PathBuf;

/// Errors that can occur while loading configuration files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse layout: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}
