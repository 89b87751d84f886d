//! Types for the fingerprint module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::FingerprintError;

/// Default number of hex characters kept from the digest.
pub const DEFAULT_LENGTH: usize = 8;

/// Hash algorithm used to fingerprint file content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// MD5 (fast, the conventional choice for cache busting).
    #[default]
    Md5,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
    /// BLAKE3 (256-bit output).
    Blake3,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 6] = [
        Self::Md5,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Blake3,
    ];

    /// Returns the canonical name of this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Blake3 => "blake3",
        }
    }

    /// Length of the full digest in hex characters.
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha224 => 56,
            Self::Sha256 | Self::Blake3 => 64,
            Self::Sha384 => 96,
            Self::Sha512 => 128,
        }
    }

    /// Checks that `length` hex characters can be taken from this digest.
    pub fn check_length(&self, length: usize) -> Result<usize, FingerprintError> {
        let max = self.hex_len();
        if length == 0 || length > max {
            return Err(FingerprintError::InvalidLength { length, max });
        }
        Ok(length)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| FingerprintError::UnsupportedAlgorithm {
                name: s.to_string(),
            })
    }
}

/// A full hex digest of some content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    algorithm: Algorithm,
    hex: String,
}

impl Fingerprint {
    pub(crate) fn new(algorithm: Algorithm, hex: String) -> Self {
        Self { algorithm, hex }
    }

    /// Algorithm that produced this digest.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The full lowercase hex digest.
    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// The first `length` hex characters, used as the file name suffix.
    ///
    /// Lengths past the end of the digest return the whole digest; callers
    /// validate the length up front with [`Algorithm::check_length`].
    pub fn suffix(&self, length: usize) -> &str {
        &self.hex[..length.min(self.hex.len())]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
