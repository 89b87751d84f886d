//! Manifest and strip rule types.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::path::Path;

use super::error::ManifestError;
use super::path::normalize_path;

/// Ordered mapping from normalized original path to revisioned path.
///
/// Keys are unique: recording an existing key replaces its value
/// (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a relocation, overwriting any earlier entry for the same key.
    pub fn record(&mut self, original: &Path, new: &Path) -> Option<String> {
        self.entries
            .insert(normalize_path(original), normalize_path(new))
    }

    /// Inserts a raw entry without normalization.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Looks up the revisioned path of an original path.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Overlays `other` on top of this manifest.
    pub fn merge(&mut self, other: Manifest) {
        self.entries.extend(other.entries);
    }

    /// Rewrites every key and value once with the strip rule.
    ///
    /// Only the first occurrence of each pattern is removed. When two keys
    /// collapse to the same stripped key the later one in key order wins.
    pub fn apply_strip_path(&mut self, rule: &StripRule) {
        let (src, dest) = rule.patterns();
        let entries = std::mem::take(&mut self.entries);

        self.entries = entries
            .into_iter()
            .map(|(key, value)| (strip_first(key, src), strip_first(value, dest)))
            .collect();
    }

    /// Serializes as JSON indented with four spaces.
    pub fn to_pretty_json(&self) -> Result<String, ManifestError> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Writes the manifest to `path`.
    pub async fn write(&self, path: &Path) -> Result<(), ManifestError> {
        let json = self.to_pretty_json()?;
        tokio::fs::write(path, json)
            .await
            .map_err(|source| ManifestError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Loads a manifest previously written with [`Manifest::write`].
    pub async fn load(path: &Path) -> Result<Self, ManifestError> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ManifestError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
        serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, String)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Substring removal applied to the manifest after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StripRule {
    /// Removed from both keys and values.
    Both(String),
    /// `src` is removed from keys, `dest` from values.
    Split {
        #[serde(default)]
        src: Option<String>,
        #[serde(default)]
        dest: Option<String>,
    },
}

impl StripRule {
    /// Key and value patterns; `None` leaves that side untouched.
    pub fn patterns(&self) -> (Option<&str>, Option<&str>) {
        match self {
            Self::Both(pattern) => (Some(pattern.as_str()), Some(pattern.as_str())),
            Self::Split { src, dest } => (src.as_deref(), dest.as_deref()),
        }
    }
}

fn strip_first(text: String, pattern: Option<&str>) -> String {
    match pattern {
        Some(p) if !p.is_empty() && text.contains(p) => text.replacen(p, "", 1),
        _ => text,
    }
}
