//! Content fingerprinting for revisioned file names.
//!
//! A fingerprint is the lowercase hex digest of a file's raw bytes. It depends
//! on content only, never on the file name or location, so two byte-identical
//! files always receive the same suffix.
//!
//! # Example
//!
//! ```ignore
//! use filerev_core::fingerprint::{fingerprint, Algorithm};
//!
//! let digest = fingerprint(b"console.log(1);", Algorithm::Md5);
//! assert_eq!(digest.suffix(8).len(), 8);
//! ```

mod error;
mod hasher;
mod types;

pub use error::FingerprintError;
pub use hasher::{fingerprint, fingerprint_file};
pub use types::{Algorithm, Fingerprint, DEFAULT_LENGTH};
