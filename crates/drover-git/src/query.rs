//! Read-only repository queries through git2.
//!
//! Everything here degrades gracefully: a query that cannot be answered
//! returns its negative value (`false`/`None`/empty) instead of propagating
//! an error, so [`diagnostics`] can always hand back a fully populated
//! record whatever state the repository is in.

use std::path::Path;

use git2::{Repository, Status, StatusOptions};
use tracing::{debug, warn};

use crate::types::RepoDiagnostics;

/// Check whether `dir` is the root of a git repository.
///
/// Deliberately checks for the `.git` metadata directory rather than
/// discovering through parents: drover only ever publishes from the
/// workspace root, and a parent repository must not be mistaken for it.
pub fn is_repository(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Name of the currently checked-out branch.
///
/// Returns `None` in a detached state or when the query fails. Works on an
/// unborn branch (repository with no commits yet) by reading HEAD's
/// symbolic target directly.
pub fn current_branch(dir: &Path) -> Option<String> {
    let repo = match Repository::open(dir) {
        Ok(r) => r,
        Err(e) => {
            debug!(
                event = "git.query.repo_open_failed",
                path = %dir.display(),
                error = %e
            );
            return None;
        }
    };

    let head = match repo.find_reference("HEAD") {
        Ok(r) => r,
        Err(e) => {
            debug!(event = "git.query.head_read_failed", error = %e);
            return None;
        }
    };

    head.symbolic_target()
        .and_then(|target| target.strip_prefix("refs/heads/"))
        .map(str::to_string)
}

/// URL of the named remote, if configured.
///
/// Returns `None` if the repo can't be opened, has no such remote, or the
/// URL is not valid UTF-8.
pub fn remote_url(dir: &Path, name: &str) -> Option<String> {
    let repo = Repository::open(dir).ok()?;
    let remote = repo.find_remote(name).ok()?;
    match remote.url() {
        Some(url) => Some(url.to_string()),
        None => {
            debug!(
                event = "git.query.invalid_remote_url",
                name = name,
                "Remote URL is not valid UTF-8"
            );
            None
        }
    }
}

/// Whether the repository has at least one commit on HEAD.
pub fn has_commits(dir: &Path) -> bool {
    let Ok(repo) = Repository::open(dir) else {
        return false;
    };
    match repo.head() {
        Ok(head) => head.peel_to_commit().is_ok(),
        Err(_) => false,
    }
}

/// Aggregate repository/remote/commit/status checks into one record.
///
/// Best-effort by construction: each sub-check swallows its own failure and
/// reports the negative value, so this function never fails as a whole.
pub fn diagnostics(dir: &Path, remote_name: &str) -> RepoDiagnostics {
    let mut diag = RepoDiagnostics {
        is_repo: is_repository(dir),
        ..Default::default()
    };
    if !diag.is_repo {
        return diag;
    }

    diag.remote_url = remote_url(dir, remote_name);
    diag.has_remote = diag.remote_url.is_some();
    diag.has_commits = has_commits(dir);
    diag.current_branch = current_branch(dir);
    collect_file_sets(dir, &mut diag);
    diag
}

/// Fill the staged/modified/untracked sets from git2 statuses.
///
/// On failure the sets stay empty; the record remains usable.
fn collect_file_sets(dir: &Path, diag: &mut RepoDiagnostics) {
    let repo = match Repository::open(dir) {
        Ok(r) => r,
        Err(_) => return,
    };

    let mut opts = StatusOptions::new();
    opts.include_untracked(true);
    opts.include_ignored(false);

    let statuses = match repo.statuses(Some(&mut opts)) {
        Ok(s) => s,
        Err(e) => {
            warn!(
                event = "git.query.status_check_failed",
                path = %dir.display(),
                error = %e
            );
            return;
        }
    };

    for entry in statuses.iter() {
        let Some(path) = entry.path() else { continue };
        let status = entry.status();

        if status.intersects(
            Status::INDEX_NEW
                | Status::INDEX_MODIFIED
                | Status::INDEX_DELETED
                | Status::INDEX_RENAMED
                | Status::INDEX_TYPECHANGE,
        ) {
            diag.staged.insert(path.to_string());
        }
        if status.intersects(
            Status::WT_MODIFIED | Status::WT_DELETED | Status::WT_RENAMED | Status::WT_TYPECHANGE,
        ) {
            diag.modified.insert(path.to_string());
        }
        if status.contains(Status::WT_NEW) {
            diag.untracked.insert(path.to_string());
        }
    }
}
