use drover_git::{PushFailure, PushStrategy};

/// Inputs for one publish attempt. No lifecycle beyond the attempt.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// Paths to stage, relative to the workspace root.
    pub paths: Vec<String>,
    /// Commit message; the configured fallback applies when `None`.
    pub message: Option<String>,
}

/// Caller knobs for one publish attempt.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Initialize a repository without asking when the directory isn't one.
    pub init_without_asking: bool,
    /// Remote URL supplied up front (skips the EnsureRemote prompt).
    pub remote_url: Option<String>,
    /// Walk the fallback strategy list on unclassified push failures.
    /// When false the first push failure is terminal (basic mode).
    pub retry: bool,
}

/// One failed push retry, recorded for the final report.
#[derive(Debug, Clone)]
pub struct PushAttempt {
    /// The command line that was tried, e.g. "git push -u origin main".
    pub command: String,
    /// Trimmed stderr of the failed attempt.
    pub raw: String,
}

/// A completed publish: what succeeded and what it took to get there.
#[derive(Debug, Clone)]
pub struct PublishReport {
    pub branch: String,
    /// The push invocation that finally succeeded.
    pub strategy: PushStrategy,
    /// Failed attempts that preceded the success, in order.
    pub attempts: Vec<PushAttempt>,
    /// Whether EnsureRepo initialized a fresh repository.
    pub initialized_repo: bool,
    /// Remote URL added during this attempt, if any.
    pub remote_added: Option<String>,
}

/// Terminal failure states of the pipeline.
///
/// Every variant carries enough raw git output for the user to debug;
/// nothing the underlying tool printed is discarded.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Not a git repository (initialization declined)")]
    NotARepo,

    #[error("Cannot determine the current branch (detached HEAD?); refusing to guess")]
    NoBranch,

    #[error("Repository initialization failed: {raw}")]
    InitFailed { raw: String },

    #[error("Remote configuration failed: {raw}")]
    RemoteSetupFailed { raw: String },

    #[error("{} failed: {}", failure.stage, failure.raw)]
    StageFailed { failure: PushFailure },

    #[error("Push failed: {}", failure.raw)]
    PushFailed { failure: PushFailure },

    #[error("All push strategies exhausted after {} retries", attempts.len())]
    AllStrategiesExhausted {
        /// The failure that triggered the retry policy.
        initial: PushFailure,
        /// Every retry attempt, in the order it was made.
        attempts: Vec<PushAttempt>,
    },
}

impl PublishError {
    /// All raw git messages collected on the way to this failure.
    pub fn raw_messages(&self) -> Vec<&str> {
        match self {
            PublishError::NotARepo | PublishError::NoBranch => Vec::new(),
            PublishError::InitFailed { raw } | PublishError::RemoteSetupFailed { raw } => {
                vec![raw.as_str()]
            }
            PublishError::StageFailed { failure } | PublishError::PushFailed { failure } => {
                vec![failure.raw.as_str()]
            }
            PublishError::AllStrategiesExhausted { initial, attempts } => {
                let mut raws = vec![initial.raw.as_str()];
                raws.extend(attempts.iter().map(|a| a.raw.as_str()));
                raws
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drover_git::PushStage;

    #[test]
    fn test_exhausted_error_surfaces_every_raw_message() {
        let error = PublishError::AllStrategiesExhausted {
            initial: PushFailure {
                stage: PushStage::Push,
                raw: "first".to_string(),
                hint: None,
            },
            attempts: vec![
                PushAttempt {
                    command: "git push origin main".to_string(),
                    raw: "second".to_string(),
                },
                PushAttempt {
                    command: "git push origin HEAD".to_string(),
                    raw: "third".to_string(),
                },
            ],
        };
        assert_eq!(error.raw_messages(), vec!["first", "second", "third"]);
        assert!(error.to_string().contains("2 retries"));
    }
}
