//! Trait definitions for the relocator module.

use async_trait::async_trait;
use std::path::Path;

use super::error::RelocatorError;
use super::types::{RelocationRequest, RelocationResult};

/// Places files under their revisioned names.
#[async_trait]
pub trait Relocator: Send + Sync {
    /// Returns the name of this relocator implementation.
    fn name(&self) -> &str;

    /// Makes sure `dir` exists as a directory, creating it when absent.
    ///
    /// Fails with [`RelocatorError::NotADirectory`] when `dir` exists but is
    /// something else. Called once per group before any file is relocated.
    async fn prepare_destination(&self, dir: &Path) -> Result<(), RelocatorError>;

    /// Relocates one file and, when present, its source map.
    ///
    /// The primary file's result comes first, the source map's second.
    async fn relocate(
        &self,
        request: RelocationRequest,
    ) -> Result<Vec<RelocationResult>, RelocatorError>;
}
