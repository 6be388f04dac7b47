//! drover-core: Core library for scaffolding files and publishing them to git.
//!
//! This library provides the business logic behind the drover CLI:
//!
//! # Main Entry Points
//!
//! - [`files`] - Workspace-scoped filesystem operations
//! - [`templates`] - Extension-to-boilerplate template registry
//! - [`publish`] - The guarded create → commit → push pipeline

pub mod files;
pub mod logging;
pub mod publish;
pub mod templates;

// Re-export config types so the CLI depends on one crate for core types
pub use drover_config::{ConfigError, DroverConfig, GitConfig, PublishConfig};

pub use files::{FileError, WorkspaceContext};
pub use publish::{
    Prompter, PublishError, PublishOptions, PublishReport, PublishRequest, PushAttempt,
    ScriptedPrompter, run_publish,
};
pub use templates::TemplateRegistry;

// Re-export logging initialization
pub use logging::init_logging;
