//! Configuration validation.

use crate::errors::ConfigError;
use crate::types::DroverConfig;

/// Validate a merged configuration before use.
///
/// Checks that remote and branch names are plausible git refs (non-empty,
/// no whitespace, no leading '-') and that the timeout is non-zero.
pub fn validate_config(config: &DroverConfig) -> Result<(), ConfigError> {
    validate_ref_name(config.git.remote(), "git.remote")?;
    validate_ref_name(config.git.default_branch(), "git.default_branch")?;

    if config.git.timeout_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "git.timeout_secs must be greater than zero".to_string(),
        });
    }

    if config.publish.commit_message().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "publish.commit_message cannot be blank".to_string(),
        });
    }

    Ok(())
}

fn validate_ref_name(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("{field} cannot be empty"),
        });
    }
    if value.starts_with('-') || value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("{field}: '{value}' is not a valid git name"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GitConfig, PublishConfig};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&DroverConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = DroverConfig {
            git: GitConfig {
                timeout_secs: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_rejects_whitespace_remote() {
        let config = DroverConfig {
            git: GitConfig {
                remote: Some("my origin".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_blank_commit_message() {
        let config = DroverConfig {
            publish: PublishConfig {
                commit_message: Some("   ".to_string()),
                retry: None,
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
