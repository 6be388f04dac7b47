//! Push invocations and the ordered fallback strategy list.
//!
//! The fallback list is deliberately data, not branching code: the publish
//! pipeline walks [`PushStrategy::FALLBACK_ORDER`] in sequence and stops at
//! the first success. The ordering is part of the tool's observable
//! behavior and must not change.

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use crate::cli;
use crate::errors::GitError;
use crate::runner::run_git;
use crate::types::{PushFailure, PushOutcome, PushStage};
use crate::validation::{validate_branch_name, validate_git_arg};

/// One way of invoking `git push`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum PushStrategy {
    /// `push <remote> <branch>`
    ToBranch,
    /// `push --set-upstream <remote> <branch>`
    SetUpstream,
    /// `push -u <remote> <branch>`
    UpstreamFlag,
    /// `push <remote> HEAD`
    Head,
}

impl PushStrategy {
    /// Fallback order walked after an unclassified push failure.
    pub const FALLBACK_ORDER: [PushStrategy; 4] = [
        PushStrategy::ToBranch,
        PushStrategy::SetUpstream,
        PushStrategy::UpstreamFlag,
        PushStrategy::Head,
    ];

    /// Argument vector for this strategy.
    pub fn args(&self, remote: &str, branch: &str) -> Vec<String> {
        let owned = |parts: &[&str]| parts.iter().map(|s| s.to_string()).collect();
        match self {
            PushStrategy::ToBranch => owned(&["push", remote, branch]),
            PushStrategy::SetUpstream => owned(&["push", "--set-upstream", remote, branch]),
            PushStrategy::UpstreamFlag => owned(&["push", "-u", remote, branch]),
            PushStrategy::Head => owned(&["push", remote, "HEAD"]),
        }
    }

    /// Human-readable command line, for attempt reports.
    pub fn describe(&self, remote: &str, branch: &str) -> String {
        format!("git {}", self.args(remote, branch).join(" "))
    }
}

/// Push using the given strategy.
pub fn push_with(
    dir: &Path,
    strategy: PushStrategy,
    remote: &str,
    branch: &str,
    timeout: Duration,
) -> Result<(), GitError> {
    validate_git_arg(remote, "remote name")?;
    validate_branch_name(branch)?;

    info!(
        event = "git.push_started",
        strategy = ?strategy,
        remote = remote,
        branch = branch
    );

    let args = strategy.args(remote, branch);
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    match run_git(dir, &arg_refs, timeout) {
        Ok(_) => {
            info!(event = "git.push_completed", strategy = ?strategy);
            Ok(())
        }
        Err(e) => {
            warn!(event = "git.push_failed", strategy = ?strategy, error = %e);
            Err(e)
        }
    }
}

/// Execute add → commit → push as three sequential steps.
///
/// The first failing step short-circuits and reports its stage with the raw
/// git output; committing with nothing staged fails at the Commit stage.
pub fn stage_commit_push(
    dir: &Path,
    paths: &[String],
    message: &str,
    remote: &str,
    branch: &str,
    timeout: Duration,
) -> PushOutcome {
    for path in paths {
        if let Err(e) = cli::stage(dir, path, timeout) {
            return failure(PushStage::Add, e);
        }
    }

    if let Err(e) = cli::commit(dir, message, timeout) {
        return failure(PushStage::Commit, e);
    }

    match push_with(dir, PushStrategy::ToBranch, remote, branch, timeout) {
        Ok(()) => PushOutcome::Success,
        Err(e) => failure(PushStage::Push, e),
    }
}

/// Convert a gateway error into a stage-tagged failure.
///
/// The raw message is never empty: errors without diagnostic text fall back
/// to their Display form.
pub(crate) fn failure(stage: PushStage, error: GitError) -> PushOutcome {
    let hint = error.hint();
    let raw = match error.raw_message() {
        Some(raw) if !raw.is_empty() => raw.to_string(),
        _ => error.to_string(),
    };
    PushOutcome::Failure(PushFailure { stage, raw, hint })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GitErrorHint;
    use crate::test_support;
    use tempfile::TempDir;

    const TIMEOUT: Duration = Duration::from_secs(30);

    #[test]
    fn test_fallback_order_is_fixed() {
        let order: Vec<String> = PushStrategy::FALLBACK_ORDER
            .iter()
            .map(|s| s.describe("origin", "main"))
            .collect();
        assert_eq!(
            order,
            vec![
                "git push origin main",
                "git push --set-upstream origin main",
                "git push -u origin main",
                "git push origin HEAD",
            ]
        );
    }

    #[test]
    fn test_push_rejects_invalid_remote() {
        let dir = TempDir::new().unwrap();
        test_support::init_repo_with_commit(dir.path()).unwrap();
        let result = push_with(
            dir.path(),
            PushStrategy::ToBranch,
            "--evil",
            "main",
            TIMEOUT,
        );
        assert!(matches!(result, Err(GitError::InvalidArgument { .. })));
    }

    #[test]
    fn test_stage_commit_push_succeeds_with_local_remote() {
        let dir = TempDir::new().unwrap();
        let remote_dir = TempDir::new().unwrap();
        test_support::init_repo_with_commit(dir.path()).unwrap();
        let url = test_support::create_bare_remote(remote_dir.path()).unwrap();
        test_support::add_remote(dir.path(), "origin", &url).unwrap();

        std::fs::write(dir.path().join("a.txt"), "hello").unwrap();
        let outcome = stage_commit_push(
            dir.path(),
            &["a.txt".to_string()],
            "Update files",
            "origin",
            "main",
            TIMEOUT,
        );
        assert!(outcome.is_success(), "outcome: {outcome:?}");
    }

    #[test]
    fn test_stage_commit_push_nothing_staged_fails_at_commit() {
        let dir = TempDir::new().unwrap();
        test_support::init_repo_with_commit(dir.path()).unwrap();

        let outcome = stage_commit_push(dir.path(), &[], "Update files", "origin", "main", TIMEOUT);
        match outcome {
            PushOutcome::Failure(f) => {
                assert_eq!(f.stage, PushStage::Commit);
                assert!(!f.raw.is_empty());
            }
            PushOutcome::Success => panic!("expected Commit-stage failure"),
        }
    }

    #[test]
    fn test_stage_commit_push_missing_path_fails_at_add() {
        let dir = TempDir::new().unwrap();
        test_support::init_repo_with_commit(dir.path()).unwrap();

        let outcome = stage_commit_push(
            dir.path(),
            &["missing.txt".to_string()],
            "Update files",
            "origin",
            "main",
            TIMEOUT,
        );
        match outcome {
            PushOutcome::Failure(f) => assert_eq!(f.stage, PushStage::Add),
            PushOutcome::Success => panic!("expected Add-stage failure"),
        }
    }

    #[test]
    fn test_push_without_remote_classifies_no_remote() {
        let dir = TempDir::new().unwrap();
        test_support::init_repo_with_commit(dir.path()).unwrap();
        std::fs::write(dir.path().join("a.txt"), "x").unwrap();

        let outcome = stage_commit_push(
            dir.path(),
            &["a.txt".to_string()],
            "Update files",
            "origin",
            "main",
            TIMEOUT,
        );
        match outcome {
            PushOutcome::Failure(f) => {
                assert_eq!(f.stage, PushStage::Push);
                assert_eq!(f.hint, Some(GitErrorHint::NoRemote));
            }
            PushOutcome::Success => panic!("expected Push-stage failure"),
        }
    }
}
