//! Batch orchestrator for revisioning groups of files.
//!
//! Groups run one after another so destination creation and per-group
//! reporting stay deterministic. Inside a group every file is independent:
//! hashing, renaming or copying and source map mirroring run concurrently up
//! to `max_parallel_files`, and the group report is produced only once all of
//! them have finished.

mod config;
mod error;
mod runner;
mod types;

pub use config::{RevisionOptions, RevisionPlan};
pub use error::RevisionError;
pub use runner::Orchestrator;
pub use types::{FileGroup, GroupReport, RunReport};
