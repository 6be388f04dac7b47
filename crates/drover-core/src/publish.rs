//! The guarded create → commit → push pipeline.
//!
//! One publish attempt walks EnsureRepo → EnsureRemote → Stage → Commit →
//! Push, with a classification-driven retry policy around the push step.
//! The pipeline holds no state across attempts; every invocation starts
//! clean from its inputs.

pub mod pipeline;
pub mod prompter;
pub mod types;

pub use pipeline::run_publish;
pub use prompter::{Prompter, ScriptedPrompter};
pub use types::{PublishError, PublishOptions, PublishReport, PublishRequest, PushAttempt};
