//! Shared subprocess runner for the git binary.
//!
//! Every mutating git operation goes through [`run_git`], which enforces a
//! bounded timeout. The git binary can block indefinitely on network I/O or
//! credential prompts; the runner kills the process when the deadline passes
//! instead of hanging the whole tool.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::errors::GitError;

/// How often the runner polls a child process while waiting for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Captured output of a successful git invocation.
#[derive(Debug)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run a git subcommand in `dir`, capturing output, with a bounded timeout.
///
/// Returns `Ok` only on exit code 0. Non-zero exit yields
/// `GitError::CommandFailed` carrying the trimmed stderr (falling back to
/// stdout when stderr is empty) so callers can classify and surface it.
pub fn run_git(dir: &Path, args: &[&str], timeout: Duration) -> Result<GitOutput, GitError> {
    let git = which::which("git").map_err(|_| GitError::GitNotFound)?;
    let command_name = args.first().copied().unwrap_or("git");

    debug!(
        event = "git.runner.spawned",
        command = command_name,
        path = %dir.display()
    );

    let mut child = Command::new(git)
        .current_dir(dir)
        .args(args)
        // Never let git fall back to an interactive credential prompt;
        // a prompt with no terminal attached would hang until the timeout.
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| GitError::CommandFailed {
            command: command_name.to_string(),
            message: format!("Failed to execute git: {e}"),
        })?;

    // Drain both pipes on background threads so a chatty child can't
    // deadlock against a full pipe buffer while we poll for exit.
    let stdout_reader = spawn_pipe_reader(child.stdout.take());
    let stderr_reader = spawn_pipe_reader(child.stderr.take());

    let status = match wait_with_deadline(&mut child, timeout) {
        Some(status) => status,
        None => {
            let _ = child.kill();
            let _ = child.wait();
            let _ = stdout_reader.join();
            let _ = stderr_reader.join();
            warn!(
                event = "git.runner.timed_out",
                command = command_name,
                timeout_secs = timeout.as_secs()
            );
            return Err(GitError::Timeout {
                command: command_name.to_string(),
                seconds: timeout.as_secs(),
            });
        }
    };

    let stdout = String::from_utf8_lossy(&stdout_reader.join().unwrap_or_default()).into_owned();
    let stderr = String::from_utf8_lossy(&stderr_reader.join().unwrap_or_default()).into_owned();

    if status.success() {
        debug!(event = "git.runner.completed", command = command_name);
        Ok(GitOutput { stdout, stderr })
    } else {
        let message = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        debug!(
            event = "git.runner.failed",
            command = command_name,
            code = status.code().unwrap_or(-1),
            stderr = %message
        );
        Err(GitError::CommandFailed {
            command: command_name.to_string(),
            message,
        })
    }
}

fn spawn_pipe_reader<R: Read + Send + 'static>(
    pipe: Option<R>,
) -> std::thread::JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

/// Poll the child until it exits or the deadline passes.
///
/// Returns `None` on deadline expiry; the caller is responsible for killing
/// the child.
fn wait_with_deadline(child: &mut Child, timeout: Duration) -> Option<std::process::ExitStatus> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) => {
                if Instant::now() >= deadline {
                    return None;
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            // try_wait errors are unusual (EINTR-class); treat as expired
            // rather than spinning forever.
            Err(_) => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_git_version_succeeds() {
        let dir = TempDir::new().unwrap();
        let output = run_git(dir.path(), &["--version"], Duration::from_secs(30)).unwrap();
        assert!(output.stdout.contains("git version"));
    }

    #[test]
    fn test_run_git_failure_carries_stderr() {
        let dir = TempDir::new().unwrap();
        // status outside a repository fails with "not a git repository"
        let result = run_git(dir.path(), &["status"], Duration::from_secs(30));
        match result {
            Err(GitError::CommandFailed { command, message }) => {
                assert_eq!(command, "status");
                assert!(!message.is_empty());
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_run_git_kills_on_timeout() {
        let dir = TempDir::new().unwrap();
        run_git(dir.path(), &["init"], Duration::from_secs(30)).unwrap();

        // The ext transport spawns the given command and waits for pack
        // protocol data from it; `sleep` never answers, so the fetch hangs
        // until the runner's deadline kills it.
        let result = run_git(
            dir.path(),
            &["-c", "protocol.ext.allow=always", "fetch", "ext::sleep 3"],
            Duration::from_millis(300),
        );
        match result {
            Err(GitError::Timeout { seconds, .. }) => assert_eq!(seconds, 0),
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_run_git_in_missing_dir_fails() {
        let result = run_git(
            Path::new("/nonexistent/drover-test"),
            &["status"],
            Duration::from_secs(30),
        );
        assert!(result.is_err());
    }
}
