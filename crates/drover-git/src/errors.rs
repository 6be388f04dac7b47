#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("git binary not found on PATH")]
    GitNotFound,

    #[error("Invalid {label}: {message}")]
    InvalidArgument { label: String, message: String },

    #[error("git {command} failed: {message}")]
    CommandFailed { command: String, message: String },

    #[error("git {command} did not finish within {seconds}s")]
    Timeout { command: String, seconds: u64 },

    #[error("Remote '{name}' already exists with URL {url}")]
    RemoteExists { name: String, url: String },

    #[error("Git2 library error: {source}")]
    Git2Error {
        #[from]
        source: git2::Error,
    },

    #[error("IO error during git operation: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl GitError {
    /// The raw diagnostic text carried by this error, if any.
    ///
    /// For subprocess failures this is the trimmed stderr of the git binary;
    /// it is preserved verbatim so the user can debug unclassified failures.
    pub fn raw_message(&self) -> Option<&str> {
        match self {
            GitError::CommandFailed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Best-effort classification of this error's diagnostic text.
    pub fn hint(&self) -> Option<GitErrorHint> {
        self.raw_message().map(classify_stderr)
    }
}

/// Best-effort classification of a git failure message.
///
/// Git's messages are locale- and version-dependent, so this is a heuristic:
/// anything unmatched is `Unknown` and the raw text stays with the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum GitErrorHint {
    NotARepo,
    NoRemote,
    NoUpstream,
    NoCommits,
    Unknown,
}

/// Classify a git stderr message by substring match.
pub fn classify_stderr(stderr: &str) -> GitErrorHint {
    let lower = stderr.to_lowercase();

    let no_upstream = ["no upstream branch", "has no upstream"];
    if no_upstream.iter().any(|p| lower.contains(p)) {
        return GitErrorHint::NoUpstream;
    }

    let no_remote = [
        "no remote",
        "does not appear to be a git repository",
        "no configured push destination",
    ];
    if no_remote.iter().any(|p| lower.contains(p)) {
        return GitErrorHint::NoRemote;
    }

    if lower.contains("not a git repository") {
        return GitErrorHint::NotARepo;
    }

    let no_commits = ["does not have any commits yet", "no commits yet"];
    if no_commits.iter().any(|p| lower.contains(p)) {
        return GitErrorHint::NoCommits;
    }

    GitErrorHint::Unknown
}
