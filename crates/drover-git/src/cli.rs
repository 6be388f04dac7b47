//! Git CLI wrappers for mutating and auth-requiring operations.
//!
//! Operations like `push` and `pull` require authentication. The git CLI
//! inherits the user's SSH agent and credential helpers automatically, so
//! everything that writes to the repository or talks to a remote shells out
//! instead of going through git2.
//!
//! Each function validates arguments, logs structured events, and maps
//! errors consistently. All calls share the bounded-timeout runner in
//! [`crate::runner`].

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use crate::errors::GitError;
use crate::query;
use crate::runner::run_git;
use crate::validation::{validate_branch_name, validate_git_arg};

/// Initialize a repository and set the default primary branch name.
///
/// Idempotent on the `init` itself (`git init` in an existing repo is a
/// no-op); `branch -M` renames the initial branch even before any commit.
pub fn init_repo(dir: &Path, default_branch: &str, timeout: Duration) -> Result<(), GitError> {
    validate_branch_name(default_branch)?;

    info!(
        event = "git.init_started",
        branch = default_branch,
        path = %dir.display()
    );

    run_git(dir, &["init"], timeout)?;
    run_git(dir, &["branch", "-M", default_branch], timeout)?;

    info!(event = "git.init_completed", branch = default_branch);
    Ok(())
}

/// Stage a single path for the next commit.
pub fn stage(dir: &Path, path: &str, timeout: Duration) -> Result<(), GitError> {
    if path.is_empty() {
        return Err(GitError::InvalidArgument {
            label: "path".to_string(),
            message: "cannot be empty".to_string(),
        });
    }

    // `--` keeps paths that look like options from being parsed as such.
    run_git(dir, &["add", "--", path], timeout)
        .map(|_| ())
        .inspect_err(|e| {
            warn!(event = "git.add_failed", path = path, error = %e);
        })
}

/// Commit staged changes with the given message.
///
/// Committing with nothing staged is a failure (git exits non-zero with
/// "nothing to commit"), which callers surface as a Commit-stage failure.
pub fn commit(dir: &Path, message: &str, timeout: Duration) -> Result<(), GitError> {
    if message.trim().is_empty() {
        return Err(GitError::InvalidArgument {
            label: "commit message".to_string(),
            message: "cannot be blank".to_string(),
        });
    }

    run_git(dir, &["commit", "-m", message], timeout)
        .map(|_| ())
        .inspect_err(|e| {
            warn!(event = "git.commit_failed", error = %e);
        })
}

/// Add a named remote.
///
/// If a remote with that name already exists, fails with
/// `GitError::RemoteExists` carrying the current URL; replacing it is a
/// separate, explicitly-confirmed step (see [`replace_remote`]).
pub fn add_remote(dir: &Path, name: &str, url: &str, timeout: Duration) -> Result<(), GitError> {
    validate_git_arg(name, "remote name")?;
    validate_git_arg(url, "remote URL")?;

    if let Some(existing) = query::remote_url(dir, name) {
        return Err(GitError::RemoteExists {
            name: name.to_string(),
            url: existing,
        });
    }

    info!(event = "git.remote_add_started", name = name, url = url);
    run_git(dir, &["remote", "add", name, url], timeout)?;
    info!(event = "git.remote_add_completed", name = name);
    Ok(())
}

/// Remove and re-add a remote under the same name.
///
/// Only call after the user has explicitly confirmed the replacement.
pub fn replace_remote(
    dir: &Path,
    name: &str,
    url: &str,
    timeout: Duration,
) -> Result<(), GitError> {
    validate_git_arg(name, "remote name")?;
    validate_git_arg(url, "remote URL")?;

    info!(event = "git.remote_replace_started", name = name, url = url);
    run_git(dir, &["remote", "remove", name], timeout)?;
    run_git(dir, &["remote", "add", name, url], timeout)?;
    info!(event = "git.remote_replace_completed", name = name);
    Ok(())
}

/// Pull a branch from a remote.
pub fn pull(dir: &Path, remote: &str, branch: &str, timeout: Duration) -> Result<(), GitError> {
    validate_git_arg(remote, "remote name")?;
    validate_branch_name(branch)?;

    info!(event = "git.pull_started", remote = remote, branch = branch);
    run_git(dir, &["pull", remote, branch], timeout)?;
    info!(event = "git.pull_completed", remote = remote, branch = branch);
    Ok(())
}

/// Recent commits as `git log --oneline` text.
pub fn log_oneline(dir: &Path, count: usize, timeout: Duration) -> Result<String, GitError> {
    let output = run_git(dir, &["log", "--oneline", "-n", &count.to_string()], timeout)
        .inspect_err(|e| {
            warn!(event = "git.log_failed", error = %e);
        })?;
    Ok(output.stdout)
}

/// Short-form status output, optionally narrowed to one path.
pub fn status_porcelain(
    dir: &Path,
    path: Option<&str>,
    timeout: Duration,
) -> Result<String, GitError> {
    let output = match path {
        Some(p) => run_git(dir, &["status", "--porcelain", "--", p], timeout)?,
        None => run_git(dir, &["status", "--porcelain"], timeout)?,
    };
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use tempfile::TempDir;

    const TIMEOUT: Duration = Duration::from_secs(30);

    #[test]
    fn test_init_repo_sets_default_branch() {
        let dir = TempDir::new().unwrap();
        init_repo(dir.path(), "main", TIMEOUT).unwrap();
        assert!(dir.path().join(".git").exists());
        assert_eq!(
            query::current_branch(dir.path()),
            Some("main".to_string())
        );
    }

    #[test]
    fn test_init_repo_is_idempotent() {
        let dir = TempDir::new().unwrap();
        init_repo(dir.path(), "main", TIMEOUT).unwrap();
        init_repo(dir.path(), "main", TIMEOUT).unwrap();
    }

    #[test]
    fn test_init_repo_rejects_invalid_branch() {
        let dir = TempDir::new().unwrap();
        assert!(init_repo(dir.path(), "-evil", TIMEOUT).is_err());
        assert!(!dir.path().join(".git").exists());
    }

    #[test]
    fn test_stage_and_commit() {
        let dir = TempDir::new().unwrap();
        test_support::init_repo(dir.path()).unwrap();
        std::fs::write(dir.path().join("a.txt"), "hello").unwrap();

        stage(dir.path(), "a.txt", TIMEOUT).unwrap();
        commit(dir.path(), "Add a.txt", TIMEOUT).unwrap();

        let log = log_oneline(dir.path(), 5, TIMEOUT).unwrap();
        assert!(log.contains("Add a.txt"));
    }

    #[test]
    fn test_commit_with_nothing_staged_fails() {
        let dir = TempDir::new().unwrap();
        test_support::init_repo_with_commit(dir.path()).unwrap();

        let result = commit(dir.path(), "Empty", TIMEOUT);
        assert!(matches!(result, Err(GitError::CommandFailed { .. })));
    }

    #[test]
    fn test_commit_rejects_blank_message() {
        let dir = TempDir::new().unwrap();
        test_support::init_repo(dir.path()).unwrap();
        assert!(matches!(
            commit(dir.path(), "  ", TIMEOUT),
            Err(GitError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_add_remote_then_conflict() {
        let dir = TempDir::new().unwrap();
        test_support::init_repo(dir.path()).unwrap();

        add_remote(dir.path(), "origin", "https://example.com/a.git", TIMEOUT).unwrap();
        let result = add_remote(dir.path(), "origin", "https://example.com/b.git", TIMEOUT);
        match result {
            Err(GitError::RemoteExists { name, url }) => {
                assert_eq!(name, "origin");
                assert_eq!(url, "https://example.com/a.git");
            }
            other => panic!("expected RemoteExists, got {other:?}"),
        }
    }

    #[test]
    fn test_replace_remote_swaps_url() {
        let dir = TempDir::new().unwrap();
        test_support::init_repo(dir.path()).unwrap();

        add_remote(dir.path(), "origin", "https://example.com/a.git", TIMEOUT).unwrap();
        replace_remote(dir.path(), "origin", "https://example.com/b.git", TIMEOUT).unwrap();
        assert_eq!(
            query::remote_url(dir.path(), "origin"),
            Some("https://example.com/b.git".to_string())
        );
    }

    #[test]
    fn test_status_porcelain_single_path() {
        let dir = TempDir::new().unwrap();
        test_support::init_repo_with_commit(dir.path()).unwrap();
        std::fs::write(dir.path().join("new.txt"), "x").unwrap();
        std::fs::write(dir.path().join("other.txt"), "y").unwrap();

        let output = status_porcelain(dir.path(), Some("new.txt"), TIMEOUT).unwrap();
        assert!(output.contains("new.txt"));
        assert!(!output.contains("other.txt"));
    }
}
