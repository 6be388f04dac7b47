//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.drover/config.toml` (global user preferences)
//! 3. **Project config** - `./.drover/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the binary)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::{DroverConfig, GitConfig, PublishConfig};
use crate::validation::validate_config;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.drover/config.toml`)
/// 3. Project config (`./.drover/config.toml`)
///
/// # Errors
///
/// Returns an error if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<DroverConfig, Box<dyn std::error::Error>> {
    let mut config = DroverConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => {
            debug!(event = "config.user_loaded");
            config = merge_configs(config, user_config);
        }
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => {
            debug!(event = "config.project_loaded");
            config = merge_configs(config, project_config);
        }
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.drover/config.toml.
fn load_user_config() -> Result<DroverConfig, Box<dyn std::error::Error>> {
    let home = dirs::home_dir().ok_or("home directory not found (is $HOME set?)")?;
    load_config_file(&user_config_path(&home))
}

/// Load the project configuration from ./.drover/config.toml.
fn load_project_config() -> Result<DroverConfig, Box<dyn std::error::Error>> {
    let project_root = std::env::current_dir()?;
    load_config_file(&project_config_path(&project_root))
}

fn user_config_path(home: &Path) -> PathBuf {
    home.join(".drover").join("config.toml")
}

fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".drover").join("config.toml")
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<DroverConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)))?;
    let config: DroverConfig = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields replace base values only when explicitly set. Template
/// tables are merged entry-by-entry with override entries winning.
pub fn merge_configs(base: DroverConfig, override_config: DroverConfig) -> DroverConfig {
    let templates = match (base.templates, override_config.templates) {
        (Some(mut base_templates), Some(override_templates)) => {
            base_templates.extend(override_templates);
            Some(base_templates)
        }
        (None, Some(override_templates)) => Some(override_templates),
        (Some(base_templates), None) => Some(base_templates),
        (None, None) => None,
    };

    DroverConfig {
        git: GitConfig {
            remote: override_config.git.remote.or(base.git.remote),
            default_branch: override_config
                .git
                .default_branch
                .or(base.git.default_branch),
            timeout_secs: override_config.git.timeout_secs.or(base.git.timeout_secs),
        },
        publish: PublishConfig {
            commit_message: override_config
                .publish
                .commit_message
                .or(base.publish.commit_message),
            retry: override_config.publish.retry.or(base.publish.retry),
        },
        templates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_merge_override_wins() {
        let base = DroverConfig {
            git: GitConfig {
                remote: Some("origin".to_string()),
                default_branch: Some("main".to_string()),
                timeout_secs: None,
            },
            ..Default::default()
        };
        let override_config = DroverConfig {
            git: GitConfig {
                remote: Some("backup".to_string()),
                default_branch: None,
                timeout_secs: Some(10),
            },
            ..Default::default()
        };

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.git.remote(), "backup");
        assert_eq!(merged.git.default_branch(), "main");
        assert_eq!(merged.git.timeout_secs(), 10);
    }

    #[test]
    fn test_merge_templates_entry_by_entry() {
        let mut base_templates = HashMap::new();
        base_templates.insert("py".to_string(), "print('base')".to_string());
        base_templates.insert("rb".to_string(), "puts 'base'".to_string());
        let mut override_templates = HashMap::new();
        override_templates.insert("py".to_string(), "print('override')".to_string());

        let merged = merge_configs(
            DroverConfig {
                templates: Some(base_templates),
                ..Default::default()
            },
            DroverConfig {
                templates: Some(override_templates),
                ..Default::default()
            },
        );

        let templates = merged.templates.unwrap();
        assert_eq!(templates["py"], "print('override')");
        assert_eq!(templates["rb"], "puts 'base'");
    }

    #[test]
    fn test_load_config_file_missing_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load_config_file(&dir.path().join("config.toml"));
        assert!(result.is_err());
        assert!(is_file_not_found(result.unwrap_err().as_ref()));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        let result = load_config_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_config_file_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[git]\nremote = \"upstream\"\ntimeout_secs = 5\n").unwrap();
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.git.remote(), "upstream");
        assert_eq!(config.git.timeout_secs(), 5);
    }
}
