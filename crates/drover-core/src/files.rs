//! Workspace-scoped filesystem operations.
//!
//! All operations go through a [`WorkspaceContext`] value instead of a
//! process-wide current directory, and every name is validated before any
//! OS call is made.

pub mod errors;
pub mod operations;
pub mod validation;

pub use errors::FileError;
pub use operations::WorkspaceContext;
pub use validation::validate_relative_path;
