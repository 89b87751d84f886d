//! Types for the orchestrator module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::manifest::Manifest;

/// A set of source files sharing one optional destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileGroup {
    /// Files to revision, in order. Directories are skipped.
    pub sources: Vec<PathBuf>,

    /// Destination directory. When set, files are copied instead of moved.
    #[serde(default, rename = "dest", skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,

    /// Whether sources came from glob expansion, in which case the
    /// destination still carries a file name that must be dropped.
    #[serde(default, rename = "expand")]
    pub expanded_glob: bool,
}

impl FileGroup {
    /// A group revisioned in place.
    pub fn in_place<I, P>(sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            destination: None,
            expanded_glob: false,
        }
    }

    /// A group copied into `destination`.
    pub fn copied_to<I, P>(sources: I, destination: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            destination: Some(destination.into()),
            ..Self::in_place(sources)
        }
    }

    /// Marks the group as produced by glob expansion.
    pub fn expanded(mut self) -> Self {
        self.expanded_glob = true;
        self
    }

    /// The directory files are copied into, if any.
    pub fn resolved_destination(&self) -> Option<PathBuf> {
        let destination = self.destination.as_deref()?;
        if self.expanded_glob {
            Some(
                destination
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default(),
            )
        } else {
            Some(destination.to_path_buf())
        }
    }
}

/// Per-group outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupReport {
    /// Position of the group in the batch.
    pub index: usize,
    /// Resolved destination directory, if the group was copied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
    /// Primary files revisioned.
    pub files_revved: usize,
    /// Source maps mirrored alongside them.
    pub source_maps: usize,
    /// Directory entries skipped.
    pub skipped_directories: usize,
}

/// Result of a whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// One report per group, in batch order.
    pub groups: Vec<GroupReport>,
    /// The accumulated manifest after any strip rule was applied.
    pub manifest: Manifest,
    /// Where the manifest was written, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_path: Option<PathBuf>,
}

impl RunReport {
    /// Total primary files revisioned across all groups.
    pub fn total_files(&self) -> usize {
        self.groups.iter().map(|g| g.files_revved).sum()
    }
}
