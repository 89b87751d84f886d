//! Error type for revision runs.

use thiserror::Error;

use crate::fingerprint::FingerprintError;
use crate::manifest::ManifestError;
use crate::relocator::RelocatorError;

/// Errors that abort a revision run.
#[derive(Debug, Error)]
pub enum RevisionError {
    /// Hashing failed or the hash options are invalid.
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),

    /// Destination resolution or file relocation failed.
    #[error(transparent)]
    Relocator(#[from] RelocatorError),

    /// Summary could not be written.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Invalid option value.
    #[error("Invalid option {option}: {reason}")]
    InvalidOption { option: &'static str, reason: String },

    /// A worker task panicked or was cancelled.
    #[error("Revision task failed: {0}")]
    TaskFailed(String),
}

impl RevisionError {
    /// Whether the run stopped while resolving a group's destination.
    pub fn is_destination_error(&self) -> bool {
        matches!(self, Self::Relocator(e) if e.is_destination_error())
    }
}
