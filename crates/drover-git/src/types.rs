use std::collections::BTreeSet;

use serde::Serialize;

use crate::errors::GitErrorHint;

/// Best-effort snapshot of a repository's publishing-relevant state.
///
/// Recomputed fresh on every call to [`crate::query::diagnostics`]; never
/// cached. Every field degrades to its negative value when the underlying
/// check fails, so a diagnostics record is always fully populated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepoDiagnostics {
    pub is_repo: bool,
    pub has_remote: bool,
    pub remote_url: Option<String>,
    pub has_commits: bool,
    pub current_branch: Option<String>,
    pub staged: BTreeSet<String>,
    pub modified: BTreeSet<String>,
    pub untracked: BTreeSet<String>,
}

impl RepoDiagnostics {
    /// True when the working tree has nothing staged, modified, or untracked.
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty() && self.untracked.is_empty()
    }
}

/// Which step of the add/commit/push sequence a failure happened at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PushStage {
    Add,
    Commit,
    Push,
}

impl std::fmt::Display for PushStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PushStage::Add => write!(f, "add"),
            PushStage::Commit => write!(f, "commit"),
            PushStage::Push => write!(f, "push"),
        }
    }
}

/// A failed add/commit/push step with its raw git output.
#[derive(Debug, Clone, Serialize)]
pub struct PushFailure {
    pub stage: PushStage,
    /// Trimmed stderr of the failing git call. Never empty.
    pub raw: String,
    /// Heuristic classification of `raw`, when one matched.
    pub hint: Option<GitErrorHint>,
}

/// Result of one add/commit/push sequence.
#[derive(Debug, Clone, Serialize)]
pub enum PushOutcome {
    Success,
    Failure(PushFailure),
}

impl PushOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PushOutcome::Success)
    }
}

/// Status of a single path, derived from its short-form status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileStatus {
    Clean,
    Untracked,
    Modified,
    Added,
    Deleted,
    Unknown,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FileStatus::Clean => "clean",
            FileStatus::Untracked => "untracked",
            FileStatus::Modified => "modified",
            FileStatus::Added => "added",
            FileStatus::Deleted => "deleted",
            FileStatus::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}
