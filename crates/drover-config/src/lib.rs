//! # drover-config
//!
//! TOML configuration types, loading, and validation for drover.
//!
//! Single source of truth for the `DroverConfig` type. Configuration is
//! merged from a hierarchy: built-in defaults, then `~/.drover/config.toml`,
//! then `./.drover/config.toml`, then CLI flags (applied by the binary).

mod loading;
mod validation;

pub mod errors;
pub mod types;

pub use errors::ConfigError;
pub use loading::{load_config_file, load_hierarchy, merge_configs};
pub use types::{DroverConfig, GitConfig, PublishConfig};
pub use validation::validate_config;

impl DroverConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
