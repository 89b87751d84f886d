//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use filerev_core::{Config, StripRule};

/// Rename build artifacts after a hash of their content.
#[derive(Parser, Debug)]
#[command(name = "filerev", version, about = "Content-hash file revisioning")]
pub struct Cli {
    /// Files forming an extra group, processed after configured groups.
    pub files: Vec<PathBuf>,

    /// Path to a `filerev.toml` configuration file.
    #[arg(short, long, env = "FILEREV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Copy FILES into this directory instead of renaming them in place.
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Treat `--dest` as a file path whose directory is the destination.
    #[arg(long, requires = "dest")]
    pub expand: bool,

    /// Hash algorithm (md5, sha224, sha256, sha384, sha512, blake3).
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Number of hex characters of the hash kept in file names.
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Naming template, e.g. `{name}-{hash}.{ext}`.
    #[arg(long)]
    pub template: Option<String>,

    /// Write the manifest to this file.
    #[arg(short, long)]
    pub summary: Option<PathBuf>,

    /// Remove this text from manifest keys and values.
    #[arg(long, conflicts_with_all = ["strip_src", "strip_dest"])]
    pub strip_path: Option<String>,

    /// Remove this text from manifest keys only.
    #[arg(long)]
    pub strip_src: Option<String>,

    /// Remove this text from manifest values only.
    #[arg(long)]
    pub strip_dest: Option<String>,

    /// Continue accumulating into a manifest written by an earlier run.
    #[arg(long)]
    pub previous_summary: Option<PathBuf>,

    /// Maximum files processed at once within a group.
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Print the manifest to stdout when done.
    #[arg(long)]
    pub print: bool,

    /// Enable debug output, including every renamed file.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Applies command line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        let options = &mut config.options;

        if let Some(algorithm) = &self.algorithm {
            options.algorithm = algorithm.clone();
        }
        if let Some(length) = self.length {
            options.length = length;
        }
        if let Some(template) = &self.template {
            options.process = Some(serde_json::Value::String(template.clone()));
        }
        if let Some(summary) = &self.summary {
            options.summary_file_path = Some(summary.clone());
        }
        if let Some(jobs) = self.jobs {
            options.max_parallel_files = jobs;
        }
        if let Some(rule) = self.strip_rule() {
            options.strip_path = Some(rule);
        }
    }

    fn strip_rule(&self) -> Option<StripRule> {
        if let Some(pattern) = &self.strip_path {
            return Some(StripRule::Both(pattern.clone()));
        }
        if self.strip_src.is_none() && self.strip_dest.is_none() {
            return None;
        }
        Some(StripRule::Split {
            src: self.strip_src.clone(),
            dest: self.strip_dest.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "filerev",
            "--algorithm",
            "sha256",
            "--length",
            "12",
            "--strip-src",
            "src/",
            "app.js",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.options.algorithm, "sha256");
        assert_eq!(config.options.length, 12);
        assert_eq!(
            config.options.strip_path,
            Some(StripRule::Split {
                src: Some("src/".to_string()),
                dest: None
            })
        );
        assert_eq!(cli.files, vec![PathBuf::from("app.js")]);
    }

    #[test]
    fn test_no_overrides_keep_defaults() {
        let cli = Cli::parse_from(["filerev"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.options.algorithm, "md5");
        assert!(config.options.strip_path.is_none());
    }

    #[test]
    fn test_strip_path_conflicts_with_split_flags() {
        let result =
            Cli::try_parse_from(["filerev", "--strip-path", "a/", "--strip-dest", "b/"]);
        assert!(result.is_err());
    }
}
