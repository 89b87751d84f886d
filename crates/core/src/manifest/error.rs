//! Error types for the manifest module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting or loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to write the summary file.
    #[error("Failed to write summary to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a summary file.
    #[error("Failed to read summary from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Summary file is not a string to string mapping.
    #[error("Invalid summary in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error.
    #[error("Failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}
