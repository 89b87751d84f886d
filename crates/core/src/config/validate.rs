use super::{types::Config, ConfigError};
use crate::orchestrator::RevisionPlan;

/// Validate configuration
/// Currently validates:
/// - Algorithm is supported and length fits its digest
/// - Parallelism and buffer size are not 0
/// - Every group lists at least one source
///
/// Returns the plan built from the options so callers do not build it twice.
pub fn validate_config(config: &Config) -> Result<RevisionPlan, ConfigError> {
    let plan = config
        .options
        .plan()
        .map_err(|e| ConfigError::ValidationError(format!("options: {}", e)))?;

    if config.relocator.buffer_size == 0 {
        return Err(ConfigError::ValidationError(
            "relocator.buffer_size cannot be 0".to_string(),
        ));
    }

    if let Some(index) = config.groups.iter().position(|g| g.sources.is_empty()) {
        return Err(ConfigError::ValidationError(format!(
            "groups[{}] has no sources",
            index
        )));
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::{FileGroup, RevisionOptions};
    use crate::relocator::RelocatorConfig;

    fn config_with(options: RevisionOptions) -> Config {
        Config {
            options,
            relocator: RelocatorConfig::default(),
            groups: vec![FileGroup::in_place(["app.js"])],
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&config_with(RevisionOptions::default())).is_ok());
    }

    #[test]
    fn test_validate_returns_plan_with_warnings() {
        let mut options = RevisionOptions::default()
            .with_algorithm("sha256")
            .with_length(12);
        options.process = Some(serde_json::json!(42));

        let plan = validate_config(&config_with(options)).unwrap();
        assert_eq!(plan.algorithm, crate::fingerprint::Algorithm::Sha256);
        assert_eq!(plan.length, 12);
        assert_eq!(plan.warnings.len(), 1);
    }

    #[test]
    fn test_validate_unknown_algorithm_fails() {
        let result = validate_config(&config_with(
            RevisionOptions::default().with_algorithm("rot13"),
        ));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(ref msg) if msg.contains("rot13")));
    }

    #[test]
    fn test_validate_length_fails() {
        let result = validate_config(&config_with(RevisionOptions::default().with_length(0)));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_empty_group_fails() {
        let mut config = config_with(RevisionOptions::default());
        config.groups.push(FileGroup::default());
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("groups[1]"));
    }

    #[test]
    fn test_validate_zero_buffer_fails() {
        let mut config = config_with(RevisionOptions::default());
        config.relocator.buffer_size = 0;
        assert!(validate_config(&config).is_err());
    }
}
