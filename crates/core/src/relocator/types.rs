//! Types for the relocator module.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extensions of generated files that may carry a `.map` companion.
pub const SOURCE_MAP_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "css"];

/// How a file reaches its revisioned name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelocationMode {
    /// Rename in place; the original name disappears.
    Move,
    /// Copy into an explicit destination; the source stays.
    Copy,
}

impl RelocationMode {
    /// Groups with an explicit destination copy, all others move.
    pub fn for_destination(destination: Option<&Path>) -> Self {
        if destination.is_some() {
            Self::Copy
        } else {
            Self::Move
        }
    }
}

/// A single relocation request.
#[derive(Debug, Clone)]
pub struct RelocationRequest {
    /// File to relocate.
    pub source: PathBuf,
    /// Directory receiving the revisioned file.
    pub target_dir: PathBuf,
    /// New file name (not a path).
    pub new_name: String,
    /// Move or copy.
    pub mode: RelocationMode,
}

impl RelocationRequest {
    /// Path of the revisioned file.
    pub fn target(&self) -> PathBuf {
        self.target_dir.join(&self.new_name)
    }
}

/// Outcome of relocating one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationResult {
    /// Path the file had before relocation.
    pub original_path: PathBuf,
    /// Path the file has now.
    pub new_path: PathBuf,
    /// Whether this entry is a mirrored source map.
    pub was_source_map: bool,
}

/// Whether files with this path's extension may have a source map.
pub fn has_source_map_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_MAP_EXTENSIONS.contains(&ext))
}

/// `path` with `.map` appended to its full name.
pub fn source_map_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".map");
    PathBuf::from(name)
}
