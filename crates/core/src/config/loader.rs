use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix of environment variables overriding file values,
/// e.g. `FILEREV_OPTIONS__LENGTH=10`.
pub const ENV_PREFIX: &str = "FILEREV_";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::StripRule;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[options]
algorithm = "sha256"
length = 10
strip_path = "build/"

[[groups]]
sources = ["build/app.js"]

[[groups]]
sources = ["build/site.css"]
dest = "dist/css"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.options.algorithm, "sha256");
        assert_eq!(config.options.length, 10);
        assert_eq!(
            config.options.strip_path,
            Some(StripRule::Both("build/".to_string()))
        );
        assert_eq!(config.groups.len(), 2);
        assert_eq!(config.groups[1].destination, Some(PathBuf::from("dist/css")));
    }

    #[test]
    fn test_load_config_from_str_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.options.algorithm, "md5");
        assert_eq!(config.options.length, 8);
        assert!(config.groups.is_empty());
    }

    #[test]
    fn test_load_config_from_str_bad_type() {
        let result = load_config_from_str("[options]\nlength = \"long\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/filerev.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[options]
summary_file_path = "dist/filerev.json"

[relocator]
buffer_size = 1024

[[groups]]
sources = ["a.js", "b.js"]
dest = "dist/a.js"
expand = true
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(
            config.options.summary_file_path,
            Some(PathBuf::from("dist/filerev.json"))
        );
        assert_eq!(config.relocator.buffer_size, 1024);
        assert_eq!(
            config.groups[0].resolved_destination(),
            Some(PathBuf::from("dist"))
        );
    }
}
