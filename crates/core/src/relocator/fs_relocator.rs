//! File system relocator implementation.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};

use super::config::RelocatorConfig;
use super::error::RelocatorError;
use super::traits::Relocator;
use super::types::{
    has_source_map_extension, source_map_path, RelocationMode, RelocationRequest,
    RelocationResult,
};

/// File system based relocator implementation.
pub struct FsRelocator {
    config: RelocatorConfig,
}

impl FsRelocator {
    /// Creates a new file system relocator with the given configuration.
    pub fn new(config: RelocatorConfig) -> Self {
        Self { config }
    }

    /// Creates a relocator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RelocatorConfig::default())
    }

    /// Attempts to move a file atomically (rename).
    ///
    /// Returns `Ok(false)` when source and destination live on different
    /// filesystems.
    async fn try_atomic_move(source: &Path, destination: &Path) -> Result<bool, std::io::Error> {
        match fs::rename(source, destination).await {
            Ok(()) => Ok(true),
            Err(e) => {
                // EXDEV is 18 on Linux and macOS
                if e.kind() == ErrorKind::CrossesDevices || e.raw_os_error() == Some(18) {
                    Ok(false)
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Copies a file through a buffer, replacing any existing destination.
    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<u64, RelocatorError> {
        let source_file = File::open(source).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                RelocatorError::SourceNotFound {
                    path: source.to_path_buf(),
                }
            } else {
                RelocatorError::Io(e)
            }
        })?;

        let dest_file = File::create(destination).await.map_err(|e| {
            RelocatorError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
        })?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, source_file);
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, dest_file);
        let mut buffer = vec![0u8; self.config.buffer_size.max(1)];
        let mut total_bytes = 0u64;

        loop {
            let bytes_read = reader.read(&mut buffer).await.map_err(|e| {
                RelocatorError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
            })?;

            if bytes_read == 0 {
                break;
            }

            writer.write_all(&buffer[..bytes_read]).await.map_err(|e| {
                RelocatorError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
            })?;

            total_bytes += bytes_read as u64;
        }

        writer.flush().await.map_err(|e| {
            RelocatorError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
        })?;

        Ok(total_bytes)
    }

    /// Renames a file, falling back to copy-and-remove across filesystems.
    async fn move_file(&self, source: &Path, destination: &Path) -> Result<(), RelocatorError> {
        let moved = match Self::try_atomic_move(source, destination).await {
            Ok(moved) => moved,
            Err(e) => {
                if e.kind() == ErrorKind::NotFound && !fs::try_exists(source).await.unwrap_or(false)
                {
                    return Err(RelocatorError::SourceNotFound {
                        path: source.to_path_buf(),
                    });
                }
                return Err(RelocatorError::move_failed(
                    source.to_path_buf(),
                    destination.to_path_buf(),
                    e,
                ));
            }
        };

        if moved {
            return Ok(());
        }

        if !self.config.cross_device_fallback {
            return Err(RelocatorError::move_failed(
                source.to_path_buf(),
                destination.to_path_buf(),
                std::io::Error::from(ErrorKind::CrossesDevices),
            ));
        }

        tracing::debug!(
            "Cross-device move from {} to {}, copying instead",
            source.display(),
            destination.display()
        );
        self.copy_file(source, destination).await?;
        fs::remove_file(source).await.map_err(|e| {
            RelocatorError::move_failed(source.to_path_buf(), destination.to_path_buf(), e)
        })?;
        Ok(())
    }

    /// Creates the parent directory of a target file if it is missing.
    async fn ensure_parent_dir(&self, path: &Path) -> Result<(), RelocatorError> {
        if !self.config.create_parents {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !fs::try_exists(parent).await.unwrap_or(false) {
                fs::create_dir_all(parent).await.map_err(|e| {
                    RelocatorError::DirectoryCreationFailed {
                        path: parent.to_path_buf(),
                        source: e,
                    }
                })?;
            }
        }
        Ok(())
    }

    /// Moves or copies `source` to `destination`.
    async fn transfer(
        &self,
        source: &Path,
        destination: &Path,
        mode: RelocationMode,
    ) -> Result<(), RelocatorError> {
        // Copying a file onto itself would truncate it.
        if source == destination {
            return Ok(());
        }

        self.ensure_parent_dir(destination).await?;

        match mode {
            RelocationMode::Move => self.move_file(source, destination).await,
            RelocationMode::Copy => self.copy_file(source, destination).await.map(|_| ()),
        }
    }
}

#[async_trait]
impl Relocator for FsRelocator {
    fn name(&self) -> &str {
        "fs"
    }

    async fn prepare_destination(&self, dir: &Path) -> Result<(), RelocatorError> {
        match fs::symlink_metadata(dir).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(RelocatorError::NotADirectory {
                path: dir.to_path_buf(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Destination dir {} does not exist: creating", dir.display());
                fs::create_dir_all(dir)
                    .await
                    .map_err(|e| RelocatorError::DirectoryCreationFailed {
                        path: dir.to_path_buf(),
                        source: e,
                    })
            }
            Err(e) => Err(RelocatorError::Io(e)),
        }
    }

    async fn relocate(
        &self,
        request: RelocationRequest,
    ) -> Result<Vec<RelocationResult>, RelocatorError> {
        let target = request.target();
        self.transfer(&request.source, &target, request.mode).await?;

        let mut results = vec![RelocationResult {
            original_path: request.source.clone(),
            new_path: target.clone(),
            was_source_map: false,
        }];

        if has_source_map_extension(&request.source) {
            let map_source = source_map_path(&request.source);
            if fs::try_exists(&map_source).await.unwrap_or(false) {
                let map_target = source_map_path(&target);
                self.transfer(&map_source, &map_target, request.mode).await?;
                results.push(RelocationResult {
                    original_path: map_source,
                    new_path: map_target,
                    was_source_map: true,
                });
            }
        }

        Ok(results)
    }
}
