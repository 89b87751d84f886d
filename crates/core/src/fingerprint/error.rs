//! Error types for the fingerprint module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fingerprinting content.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// The configured hash algorithm is not recognized.
    #[error("Unsupported hash algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    /// The requested suffix length does not fit the digest.
    #[error("Invalid fingerprint length {length}: must be between 1 and {max}")]
    InvalidLength { length: usize, max: usize },

    /// Failed to read the file being fingerprinted.
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
