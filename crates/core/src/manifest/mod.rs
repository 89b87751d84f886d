//! Manifest of original to revisioned paths.
//!
//! The manifest is an explicit value: the orchestrator takes one in and hands
//! it back, so accumulation across runs happens only when the caller passes
//! the previous manifest back in.

mod error;
mod path;
mod types;

pub use error::ManifestError;
pub use path::normalize_path;
pub use types::{Manifest, StripRule};
