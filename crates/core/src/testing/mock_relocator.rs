//! Mock relocator for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::relocator::{RelocationRequest, RelocationResult, Relocator, RelocatorError};

/// Mock implementation of the Relocator trait.
///
/// Never touches the file system. Provides controllable behavior for testing:
/// - Track relocation requests and prepared destinations for assertions
/// - Reject chosen destinations as non-directories
/// - Fail the next relocation
/// - Simulate slow relocations and observe concurrency
///
/// # Example
///
/// ```rust,ignore
/// use filerev_core::testing::MockRelocator;
///
/// let relocator = MockRelocator::new();
/// relocator.fail_destination(Path::new("dist")).await;
///
/// let requests = relocator.recorded_requests().await;
/// assert!(requests.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MockRelocator {
    /// Recorded relocation requests.
    requests: Arc<RwLock<Vec<RelocationRequest>>>,
    /// Destinations passed to `prepare_destination`.
    prepared: Arc<RwLock<Vec<PathBuf>>>,
    /// Destinations reported as existing non-directories.
    blocked: Arc<RwLock<HashSet<PathBuf>>>,
    /// If set, the next relocation fails with this error.
    next_error: Arc<RwLock<Option<RelocatorError>>>,
    /// Simulated relocation duration in milliseconds.
    delay_ms: u64,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockRelocator {
    /// Create a new mock relocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes each relocation take `ms` milliseconds.
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Reports `dir` as an existing non-directory.
    pub async fn fail_destination(&self, dir: &Path) {
        self.blocked.write().await.insert(dir.to_path_buf());
    }

    /// Configure the next relocation to fail with the given error.
    pub async fn set_next_error(&self, error: RelocatorError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get all recorded relocation requests.
    pub async fn recorded_requests(&self) -> Vec<RelocationRequest> {
        self.requests.read().await.clone()
    }

    /// Get the number of relocations performed.
    pub async fn relocation_count(&self) -> usize {
        self.requests.read().await.len()
    }

    /// Get the destinations that were prepared.
    pub async fn prepared_destinations(&self) -> Vec<PathBuf> {
        self.prepared.read().await.clone()
    }

    /// Highest number of relocations observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Relocator for MockRelocator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn prepare_destination(&self, dir: &Path) -> Result<(), RelocatorError> {
        if self.blocked.read().await.contains(dir) {
            return Err(RelocatorError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
        self.prepared.write().await.push(dir.to_path_buf());
        Ok(())
    }

    async fn relocate(
        &self,
        request: RelocationRequest,
    ) -> Result<Vec<RelocationResult>, RelocatorError> {
        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let result = RelocationResult {
            original_path: request.source.clone(),
            new_path: request.target(),
            was_source_map: false,
        };
        self.requests.write().await.push(request);
        Ok(vec![result])
    }
}
