//! Orchestrator implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::fingerprint::fingerprint_file;
use crate::manifest::Manifest;
use crate::naming::split_file_name;
use crate::relocator::{
    has_source_map_extension, source_map_path, FsRelocator, RelocationMode, RelocationRequest,
    Relocator,
};

use super::config::{RevisionOptions, RevisionPlan};
use super::error::RevisionError;
use super::types::{FileGroup, GroupReport, RunReport};

/// Default read buffer for hashing.
const HASH_BUFFER_SIZE: usize = 64 * 1024;

/// Outcome of revisioning one source file.
struct FileOutcome {
    source_maps: usize,
}

/// Drives groups of files through fingerprinting, naming and relocation.
pub struct Orchestrator<R: Relocator> {
    relocator: Arc<R>,
    plan: Arc<RevisionPlan>,
    hash_buffer_size: usize,
}

impl Orchestrator<FsRelocator> {
    /// Creates a file system backed orchestrator from raw options.
    pub fn from_options(options: &RevisionOptions) -> Result<Self, RevisionError> {
        Ok(Self::new(FsRelocator::with_defaults(), options.plan()?))
    }
}

impl<R: Relocator + 'static> Orchestrator<R> {
    /// Creates a new orchestrator.
    pub fn new(relocator: R, plan: RevisionPlan) -> Self {
        Self::with_shared_relocator(Arc::new(relocator), plan)
    }

    /// Creates an orchestrator over a relocator the caller keeps a handle to.
    pub fn with_shared_relocator(relocator: Arc<R>, plan: RevisionPlan) -> Self {
        Self {
            relocator,
            plan: Arc::new(plan),
            hash_buffer_size: HASH_BUFFER_SIZE,
        }
    }

    /// Sets the read buffer size used while hashing.
    pub fn with_hash_buffer_size(mut self, size: usize) -> Self {
        self.hash_buffer_size = size.max(1);
        self
    }

    /// Returns the validated plan.
    pub fn plan(&self) -> &RevisionPlan {
        &self.plan
    }

    /// Revisions every group and returns the updated manifest.
    ///
    /// `manifest` is extended in place of any global state; pass
    /// `Manifest::new()` for an isolated run or a previous run's manifest to
    /// keep accumulating. The first error aborts the run and files already
    /// relocated stay where they are.
    pub async fn run(
        &self,
        groups: &[FileGroup],
        manifest: Manifest,
    ) -> Result<RunReport, RevisionError> {
        let shared = Arc::new(Mutex::new(manifest));
        let mut reports = Vec::with_capacity(groups.len());

        for (index, group) in groups.iter().enumerate() {
            let report = self.run_group(index, group, &shared).await?;
            reports.push(report);
        }

        let mut manifest = std::mem::take(&mut *shared.lock().await);

        if let Some(rule) = &self.plan.strip_path {
            manifest.apply_strip_path(rule);
        }

        let summary_path = match &self.plan.summary_file_path {
            Some(path) => {
                manifest.write(path).await?;
                info!("Filerev summary was stored to {}", path.display());
                Some(path.clone())
            }
            None => None,
        };

        Ok(RunReport {
            groups: reports,
            manifest,
            summary_path,
        })
    }

    /// Revisions one group. All files finish before the report is returned.
    async fn run_group(
        &self,
        index: usize,
        group: &FileGroup,
        manifest: &Arc<Mutex<Manifest>>,
    ) -> Result<GroupReport, RevisionError> {
        let destination = group.resolved_destination();
        debug!(
            "Revisioning group {} with the {} relocator",
            index,
            self.relocator.name()
        );
        if let Some(dir) = &destination {
            self.relocator.prepare_destination(dir).await?;
        }

        let mode = RelocationMode::for_destination(destination.as_deref());
        let semaphore = Arc::new(Semaphore::new(self.plan.max_parallel_files));
        let mut tasks = JoinSet::new();
        let mut skipped_directories = 0;

        let mut files = Vec::with_capacity(group.sources.len());
        for source in &group.sources {
            if is_directory(source).await {
                debug!("Skipping directory {}", source.display());
                skipped_directories += 1;
                continue;
            }
            files.push(source);
        }

        // A listed map is relocated together with its script or stylesheet.
        let mirrored: HashSet<PathBuf> = files
            .iter()
            .filter(|source| has_source_map_extension(source))
            .map(|source| source_map_path(source))
            .collect();

        for source in files {
            if mirrored.contains(source) {
                debug!(
                    "Skipping {}: relocated with its source file",
                    source.display()
                );
                continue;
            }

            let target_dir = match &destination {
                Some(dir) => dir.clone(),
                None => source.parent().map(Path::to_path_buf).unwrap_or_default(),
            };

            let job = FileJob {
                source: source.clone(),
                target_dir,
                mode,
                hash_buffer_size: self.hash_buffer_size,
            };
            let relocator = Arc::clone(&self.relocator);
            let plan = Arc::clone(&self.plan);
            let manifest = Arc::clone(manifest);
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| RevisionError::TaskFailed(e.to_string()))?;
                job.run(relocator.as_ref(), &plan, &manifest).await
            });
        }

        let mut files_revved = 0;
        let mut source_maps = 0;

        while let Some(joined) = tasks.join_next().await {
            let outcome = match joined {
                Ok(Ok(outcome)) => outcome,
                Ok(Err(e)) => {
                    tasks.abort_all();
                    return Err(e);
                }
                Err(e) => {
                    tasks.abort_all();
                    return Err(RevisionError::TaskFailed(e.to_string()));
                }
            };
            files_revved += 1;
            source_maps += outcome.source_maps;
        }

        info!(
            "Revved {} {}",
            files_revved,
            if files_revved == 1 { "file" } else { "files" }
        );

        Ok(GroupReport {
            index,
            destination,
            files_revved,
            source_maps,
            skipped_directories,
        })
    }
}

/// Work item for one source file.
struct FileJob {
    source: PathBuf,
    target_dir: PathBuf,
    mode: RelocationMode,
    hash_buffer_size: usize,
}

impl FileJob {
    async fn run<R: Relocator + ?Sized>(
        self,
        relocator: &R,
        plan: &RevisionPlan,
        manifest: &Mutex<Manifest>,
    ) -> Result<FileOutcome, RevisionError> {
        let fingerprint =
            fingerprint_file(&self.source, plan.algorithm, self.hash_buffer_size).await?;
        let (base, ext) = split_file_name(&self.source);
        let new_name = plan
            .naming
            .file_name(&base, fingerprint.suffix(plan.length), &ext);

        let results = relocator
            .relocate(RelocationRequest {
                source: self.source,
                target_dir: self.target_dir,
                new_name,
                mode: self.mode,
            })
            .await?;

        let mut manifest = manifest.lock().await;
        for result in &results {
            manifest.record(&result.original_path, &result.new_path);
            debug!(
                "{} changed to {}",
                result.original_path.display(),
                result.new_path.display()
            );
        }

        Ok(FileOutcome {
            source_maps: results.iter().filter(|r| r.was_source_map).count(),
        })
    }
}

async fn is_directory(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
