//! # drover-git
//!
//! Git gateway for drover. Mutating operations (init, add, commit, push,
//! remote management, pull) shell out to the `git` binary so they inherit
//! the user's SSH agent and credential helpers; read-only queries go through
//! git2 and degrade gracefully instead of propagating errors.
//!
//! All git2 types stay contained in this crate; callers only deal with
//! standard Rust types and the types in [`types`].

pub mod cli;
pub mod errors;
pub mod push;
pub mod query;
pub mod runner;
pub mod status;
pub mod test_support;
pub mod types;
pub mod validation;

pub use errors::{GitError, GitErrorHint};
pub use push::{PushStrategy, stage_commit_push};
pub use query::{current_branch, diagnostics, has_commits, is_repository, remote_url};
pub use status::status_of;
pub use types::{FileStatus, PushFailure, PushOutcome, PushStage, RepoDiagnostics};
