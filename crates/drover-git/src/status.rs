//! Per-path file status from git's short-form output.

use std::path::Path;
use std::time::Duration;

use crate::cli;
use crate::errors::GitError;
use crate::types::FileStatus;

/// Status of one path, derived from its `status --porcelain` line.
///
/// An empty porcelain output means the path is tracked and unchanged
/// (or does not exist, which git reports the same way).
pub fn status_of(dir: &Path, path: &str, timeout: Duration) -> Result<FileStatus, GitError> {
    let output = cli::status_porcelain(dir, Some(path), timeout)?;
    Ok(parse_porcelain_line(&output))
}

/// Map a two-letter porcelain code to a [`FileStatus`].
///
/// Column 1 is the index state, column 2 the worktree state. Index states
/// win: a staged-new file reads as `Added` even with further worktree edits.
fn parse_porcelain_line(output: &str) -> FileStatus {
    let Some(line) = output.lines().next() else {
        return FileStatus::Clean;
    };
    let mut chars = line.chars();
    let index = chars.next().unwrap_or(' ');
    let worktree = chars.next().unwrap_or(' ');

    match (index, worktree) {
        ('?', '?') => FileStatus::Untracked,
        ('A', _) => FileStatus::Added,
        ('D', _) | (_, 'D') => FileStatus::Deleted,
        ('M', _) | (_, 'M') => FileStatus::Modified,
        (' ', ' ') => FileStatus::Clean,
        _ => FileStatus::Unknown,
    }
}
