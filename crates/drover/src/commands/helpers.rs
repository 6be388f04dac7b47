use std::time::Duration;

use tracing::warn;

use drover_core::{DroverConfig, WorkspaceContext};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> DroverConfig {
    match DroverConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.drover/config.toml and ./.drover/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            DroverConfig::default()
        }
    }
}

/// Workspace rooted at the process working directory.
pub fn workspace_context() -> Result<WorkspaceContext, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()
        .map_err(|e| format!("Cannot determine the current directory: {}", e))?;
    Ok(WorkspaceContext::new(cwd))
}

/// Per-subprocess git timeout from config.
pub fn git_timeout(config: &DroverConfig) -> Duration {
    Duration::from_secs(config.git.timeout_secs())
}
