//! Relocator module for placing revisioned files under their new names.
//!
//! A group without an explicit destination is revisioned in place: every file
//! is renamed inside its own directory. A group with a destination keeps its
//! sources untouched and copies each file into that directory instead.
//!
//! # Features
//!
//! - Destination directory resolution (created when missing, rejected when the
//!   path is an existing non-directory)
//! - Atomic renames with copy-and-remove fallback across filesystems
//! - Source map mirroring for script and stylesheet files
//!
//! # Example
//!
//! ```ignore
//! use filerev_core::relocator::{FsRelocator, RelocationMode, RelocationRequest, Relocator};
//!
//! let relocator = FsRelocator::with_defaults();
//! relocator.prepare_destination(Path::new("dist")).await?;
//!
//! let results = relocator
//!     .relocate(RelocationRequest {
//!         source: PathBuf::from("src/app.js"),
//!         target_dir: PathBuf::from("dist"),
//!         new_name: "app.3f2a9c1d.js".to_string(),
//!         mode: RelocationMode::Copy,
//!     })
//!     .await?;
//! ```

mod config;
mod error;
mod fs_relocator;
mod traits;
mod types;

pub use config::RelocatorConfig;
pub use error::RelocatorError;
pub use fs_relocator::FsRelocator;
pub use traits::Relocator;
pub use types::{
    has_source_map_extension, source_map_path, RelocationMode, RelocationRequest,
    RelocationResult, SOURCE_MAP_EXTENSIONS,
};
