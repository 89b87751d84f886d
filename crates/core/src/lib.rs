//! Content-hash revisioning of build artifacts.
//!
//! Files are fingerprinted, renamed (or copied into a destination) under a
//! name embedding the fingerprint, and every relocation is recorded in a
//! [`Manifest`] mapping original paths to revisioned ones.

pub mod config;
pub mod fingerprint;
pub mod manifest;
pub mod naming;
pub mod orchestrator;
pub mod relocator;
pub mod testing;

pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use fingerprint::{fingerprint, fingerprint_file, Algorithm, Fingerprint, FingerprintError};
pub use manifest::{Manifest, ManifestError, StripRule};
pub use naming::{
    synthesize, ConfigWarning, DefaultNaming, FnNaming, NamingStrategy, TemplateNaming,
};
pub use orchestrator::{
    FileGroup, GroupReport, Orchestrator, RevisionError, RevisionOptions, RevisionPlan, RunReport,
};
pub use relocator::{
    FsRelocator, RelocationMode, RelocationRequest, RelocationResult, Relocator, RelocatorConfig,
    RelocatorError,
};
