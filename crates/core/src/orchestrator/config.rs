//! Revision options and their validated form.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::fingerprint::{Algorithm, DEFAULT_LENGTH};
use crate::manifest::StripRule;
use crate::naming::{self, ConfigWarning, NamingStrategy};

use super::error::RevisionError;

/// User facing options for a revision run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevisionOptions {
    /// Hash algorithm name.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Number of hex characters kept from the digest.
    #[serde(default = "default_length")]
    pub length: usize,

    /// Naming template with `{name}`, `{hash}` and `{ext}` placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<Value>,

    /// Substring removed from manifest keys and values after the run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_path: Option<StripRule>,

    /// Where to write the manifest, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_file_path: Option<PathBuf>,

    /// Maximum files processed concurrently within a group.
    #[serde(default = "default_max_parallel_files")]
    pub max_parallel_files: usize,
}

fn default_algorithm() -> String {
    Algorithm::default().name().to_string()
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_max_parallel_files() -> usize {
    8
}

impl Default for RevisionOptions {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            length: default_length(),
            process: None,
            strip_path: None,
            summary_file_path: None,
            max_parallel_files: default_max_parallel_files(),
        }
    }
}

impl RevisionOptions {
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_strip_path(mut self, rule: StripRule) -> Self {
        self.strip_path = Some(rule);
        self
    }

    pub fn with_summary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.summary_file_path = Some(path.into());
        self
    }

    pub fn with_max_parallel_files(mut self, limit: usize) -> Self {
        self.max_parallel_files = limit;
        self
    }

    /// Validates the options once, resolving the algorithm and naming strategy.
    pub fn plan(&self) -> Result<RevisionPlan, RevisionError> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        let length = algorithm.check_length(self.length)?;

        if self.max_parallel_files == 0 {
            return Err(RevisionError::InvalidOption {
                option: "max_parallel_files",
                reason: "must be at least 1".to_string(),
            });
        }

        let (naming, warning) = naming::from_config(self.process.as_ref());
        if let Some(ref warning) = warning {
            tracing::warn!("{}", warning);
        }

        Ok(RevisionPlan {
            algorithm,
            length,
            naming,
            strip_path: self.strip_path.clone(),
            summary_file_path: self.summary_file_path.clone(),
            max_parallel_files: self.max_parallel_files,
            warnings: warning.into_iter().collect(),
        })
    }
}

/// Validated, immutable options for one run.
#[derive(Clone)]
pub struct RevisionPlan {
    pub algorithm: Algorithm,
    pub length: usize,
    pub naming: Arc<dyn NamingStrategy>,
    pub strip_path: Option<StripRule>,
    pub summary_file_path: Option<PathBuf>,
    pub max_parallel_files: usize,
    /// Non-fatal problems found while validating.
    pub warnings: Vec<ConfigWarning>,
}

impl RevisionPlan {
    /// Replaces the naming strategy, e.g. with a closure based one.
    pub fn with_naming(mut self, naming: Arc<dyn NamingStrategy>) -> Self {
        self.naming = naming;
        self
    }
}

impl fmt::Debug for RevisionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevisionPlan")
            .field("algorithm", &self.algorithm)
            .field("length", &self.length)
            .field("strip_path", &self.strip_path)
            .field("summary_file_path", &self.summary_file_path)
            .field("max_parallel_files", &self.max_parallel_files)
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::FingerprintError;
    use crate::naming::FnNaming;
    use serde_json::json;

    #[test]
    fn test_default_options() {
        let options = RevisionOptions::default();
        assert_eq!(options.algorithm, "md5");
        assert_eq!(options.length, 8);
        assert_eq!(options.max_parallel_files, 8);

        let plan = options.plan().unwrap();
        assert_eq!(plan.algorithm, Algorithm::Md5);
        assert!(plan.warnings.is_empty());
        assert_eq!(plan.naming.file_name("app", "1234", "js"), "app.1234.js");
    }

    #[test]
    fn test_unsupported_algorithm() {
        let result = RevisionOptions::default().with_algorithm("crc32").plan();
        assert!(matches!(
            result,
            Err(RevisionError::Fingerprint(
                FingerprintError::UnsupportedAlgorithm { .. }
            ))
        ));
    }

    #[test]
    fn test_length_longer_than_digest_is_rejected() {
        let result = RevisionOptions::default().with_length(40).plan();
        assert!(matches!(
            result,
            Err(RevisionError::Fingerprint(FingerprintError::InvalidLength {
                length: 40,
                max: 32
            }))
        ));
        assert!(RevisionOptions::default()
            .with_algorithm("sha256")
            .with_length(40)
            .plan()
            .is_ok());
    }

    #[test]
    fn test_zero_parallelism_is_rejected() {
        let result = RevisionOptions::default().with_max_parallel_files(0).plan();
        assert!(matches!(result, Err(RevisionError::InvalidOption { .. })));
    }

    #[test]
    fn test_non_template_process_warns() {
        let options = RevisionOptions {
            process: Some(json!(7)),
            ..Default::default()
        };
        let plan = options.plan().unwrap();
        assert_eq!(plan.warnings.len(), 1);
        assert_eq!(plan.naming.file_name("a", "b", "c"), "a.b.c");
    }

    #[test]
    fn test_with_naming_override() {
        let plan = RevisionOptions::default()
            .plan()
            .unwrap()
            .with_naming(Arc::new(FnNaming(|base: &str, suffix: &str, ext: &str| {
                format!("{suffix}-{base}.{ext}")
            })));
        assert_eq!(plan.naming.file_name("app", "ff", "js"), "ff-app.js");
    }

    #[test]
    fn test_options_from_toml() {
        let options: RevisionOptions = toml::from_str(
            r#"
algorithm = "sha256"
length = 12
process = "{name}-{hash}.{ext}"
strip_path = { src = "src/", dest = "dist/" }
summary_file_path = "dist/filerev.json"
"#,
        )
        .unwrap();

        assert_eq!(options.length, 12);
        assert_eq!(
            options.strip_path,
            Some(StripRule::Split {
                src: Some("src/".to_string()),
                dest: Some("dist/".to_string())
            })
        );
        let plan = options.plan().unwrap();
        assert_eq!(plan.naming.file_name("app", "ab", "js"), "app-ab.js");
    }
}
