//! The publish state machine: EnsureRepo → EnsureRemote → Stage → Commit →
//! Push, with classification-driven retries around the push step.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info, warn};

use drover_config::DroverConfig;
use drover_git::{
    GitError, GitErrorHint, PushFailure, PushOutcome, PushStage, PushStrategy, cli, push, query,
    stage_commit_push,
};

use crate::files::WorkspaceContext;
use crate::publish::prompter::Prompter;
use crate::publish::types::{
    PublishError, PublishOptions, PublishReport, PublishRequest, PushAttempt,
};

/// Run one publish attempt to completion.
///
/// Strictly sequential: every git call is a blocking subprocess or git2
/// query, and the single `&mut dyn Prompter` borrow keeps one attempt
/// in flight at a time. No state survives the call; re-running starts
/// clean from the inputs.
pub fn run_publish(
    ctx: &WorkspaceContext,
    config: &DroverConfig,
    request: &PublishRequest,
    options: &PublishOptions,
    prompter: &mut dyn Prompter,
) -> Result<PublishReport, PublishError> {
    let dir = ctx.root();
    let timeout = Duration::from_secs(config.git.timeout_secs());
    let remote = config.git.remote();

    info!(
        event = "core.publish.started",
        path = %dir.display(),
        paths = request.paths.len(),
        retry = options.retry
    );

    let initialized_repo = ensure_repo(dir, config, options, prompter, timeout)?;
    let remote_added = ensure_remote(dir, remote, options, prompter, timeout)?;

    // Never guess a branch name: a detached HEAD fails the attempt here,
    // before anything is staged.
    let branch = query::current_branch(dir).ok_or(PublishError::NoBranch)?;

    let message = request
        .message
        .as_deref()
        .unwrap_or(config.publish.commit_message());

    let outcome = stage_commit_push(dir, &request.paths, message, remote, &branch, timeout);
    let failure = match outcome {
        PushOutcome::Success => {
            info!(event = "core.publish.completed", branch = %branch);
            return Ok(PublishReport {
                branch,
                strategy: PushStrategy::ToBranch,
                attempts: Vec::new(),
                initialized_repo,
                remote_added,
            });
        }
        PushOutcome::Failure(failure) if failure.stage != PushStage::Push => {
            warn!(
                event = "core.publish.stage_failed",
                stage = %failure.stage,
                raw = %failure.raw
            );
            return Err(PublishError::StageFailed { failure });
        }
        PushOutcome::Failure(failure) => failure,
    };

    if !options.retry {
        warn!(event = "core.publish.push_failed", raw = %failure.raw);
        return Err(PublishError::PushFailed { failure });
    }

    retry_push(
        dir,
        remote,
        &branch,
        request,
        message,
        failure,
        prompter,
        timeout,
    )
    .map(|(strategy, attempts)| {
        info!(event = "core.publish.completed_after_retry", strategy = ?strategy);
        PublishReport {
            branch,
            strategy,
            attempts,
            initialized_repo,
            remote_added,
        }
    })
}

/// EnsureRepo: initialize on caller opt-in, otherwise fail fast.
///
/// Returns whether a fresh repository was initialized.
fn ensure_repo(
    dir: &Path,
    config: &DroverConfig,
    options: &PublishOptions,
    prompter: &mut dyn Prompter,
    timeout: Duration,
) -> Result<bool, PublishError> {
    if query::is_repository(dir) {
        return Ok(false);
    }

    let approved = options.init_without_asking
        || prompter.confirm("This directory is not a git repository. Initialize one?");
    if !approved {
        info!(event = "core.publish.init_declined", path = %dir.display());
        return Err(PublishError::NotARepo);
    }

    cli::init_repo(dir, config.git.default_branch(), timeout)
        .map_err(|e| PublishError::InitFailed { raw: raw_of(&e) })?;
    Ok(true)
}

/// EnsureRemote: solicit a URL when none is configured, but never block the
/// attempt on it; pushing without a remote fails downstream and feeds the
/// retry policy.
///
/// Returns the URL that was added or swapped in, if any.
fn ensure_remote(
    dir: &Path,
    remote: &str,
    options: &PublishOptions,
    prompter: &mut dyn Prompter,
    timeout: Duration,
) -> Result<Option<String>, PublishError> {
    let existing = query::remote_url(dir, remote);

    let url = match (&existing, &options.remote_url) {
        // Configured remote and no override: nothing to do.
        (Some(_), None) => return Ok(None),
        (Some(current), Some(requested)) if current == requested => return Ok(None),
        (Some(_), Some(requested)) => requested.clone(),
        (None, Some(requested)) => requested.clone(),
        (None, None) => match prompter.remote_url() {
            Some(url) => url,
            None => {
                debug!(event = "core.publish.no_remote_supplied");
                return Ok(None);
            }
        },
    };

    if configure_remote(dir, remote, &url, prompter, timeout)? {
        Ok(Some(url))
    } else {
        Ok(None)
    }
}

/// Add the remote, asking before replacing an existing one.
///
/// Returns whether the remote now points at `url`. A declined replacement
/// keeps the existing remote in place and is not an error; the attempt
/// continues with whatever was configured before.
fn configure_remote(
    dir: &Path,
    remote: &str,
    url: &str,
    prompter: &mut dyn Prompter,
    timeout: Duration,
) -> Result<bool, PublishError> {
    match cli::add_remote(dir, remote, url, timeout) {
        Ok(()) => Ok(true),
        Err(GitError::RemoteExists { name, url: current }) => {
            let question =
                format!("Remote '{name}' already points at {current}. Replace it with {url}?");
            if !prompter.confirm(&question) {
                info!(event = "core.publish.remote_replace_declined", name = %name);
                return Ok(false);
            }
            cli::replace_remote(dir, remote, url, timeout)
                .map(|()| true)
                .map_err(|e| PublishError::RemoteSetupFailed { raw: raw_of(&e) })
        }
        Err(e) => Err(PublishError::RemoteSetupFailed { raw: raw_of(&e) }),
    }
}

/// The retry policy: one classified branch, or the fixed fallback list.
///
/// Every branch is attempted at most once; exhaustion surfaces the initial
/// failure plus every retry's raw output.
#[allow(clippy::too_many_arguments)]
fn retry_push(
    dir: &Path,
    remote: &str,
    branch: &str,
    request: &PublishRequest,
    message: &str,
    initial: PushFailure,
    prompter: &mut dyn Prompter,
    timeout: Duration,
) -> Result<(PushStrategy, Vec<PushAttempt>), PublishError> {
    info!(
        event = "core.publish.retry_started",
        hint = ?initial.hint,
        raw = %initial.raw
    );
    let mut attempts = Vec::new();

    match initial.hint {
        Some(GitErrorHint::NoUpstream) => {
            // The branch exists remotely-unknown; a single --set-upstream
            // push both publishes and links it.
            let strategy = PushStrategy::SetUpstream;
            match push::push_with(dir, strategy, remote, branch, timeout) {
                Ok(()) => return Ok((strategy, attempts)),
                Err(e) => attempts.push(attempt_record(strategy, remote, branch, &e)),
            }
        }
        Some(GitErrorHint::NoRemote) => {
            let Some(url) = prompter.remote_url() else {
                warn!(event = "core.publish.retry_no_remote_url");
                return Err(PublishError::AllStrategiesExhausted { initial, attempts });
            };
            configure_remote(dir, remote, &url, prompter, timeout)?;

            let strategy = PushStrategy::ToBranch;
            restage(dir, &request.paths, message, timeout);
            match push::push_with(dir, strategy, remote, branch, timeout) {
                Ok(()) => return Ok((strategy, attempts)),
                Err(e) => attempts.push(attempt_record(strategy, remote, branch, &e)),
            }
        }
        _ => {
            for strategy in PushStrategy::FALLBACK_ORDER {
                restage(dir, &request.paths, message, timeout);
                match push::push_with(dir, strategy, remote, branch, timeout) {
                    Ok(()) => return Ok((strategy, attempts)),
                    Err(e) => attempts.push(attempt_record(strategy, remote, branch, &e)),
                }
            }
        }
    }

    warn!(
        event = "core.publish.exhausted",
        retries = attempts.len()
    );
    Err(PublishError::AllStrategiesExhausted { initial, attempts })
}

/// Re-stage the target paths before a retry.
///
/// A commit is attempted but its failure is benign: after the first
/// successful commit there is usually nothing new to commit, and letting
/// that error through would mint duplicate commits on every retry.
fn restage(dir: &Path, paths: &[String], message: &str, timeout: Duration) {
    for path in paths {
        if let Err(e) = cli::stage(dir, path, timeout) {
            debug!(event = "core.publish.restage_failed", path = %path, error = %e);
        }
    }
    if let Err(e) = cli::commit(dir, message, timeout) {
        debug!(event = "core.publish.retry_commit_skipped", error = %e);
    }
}

fn attempt_record(
    strategy: PushStrategy,
    remote: &str,
    branch: &str,
    error: &GitError,
) -> PushAttempt {
    PushAttempt {
        command: strategy.describe(remote, branch),
        raw: raw_of(error),
    }
}

/// Raw diagnostic text of an error, falling back to its Display form.
fn raw_of(error: &GitError) -> String {
    match error.raw_message() {
        Some(raw) if !raw.is_empty() => raw.to_string(),
        _ => error.to_string(),
    }
}
