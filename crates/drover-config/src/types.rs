use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level drover configuration.
///
/// Fields are `Option<T>` (or optional sections) to support proper config
/// hierarchy merging: only explicitly-set values override lower-priority
/// configs. Use the accessor methods for defaulted reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DroverConfig {
    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    /// Extra file templates keyed by extension (without the leading dot).
    /// Entries here override the built-in template table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<HashMap<String, String>>,
}

/// Git configuration: which remote and branch to publish to, and how long
/// to wait on the git binary before giving up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitConfig {
    /// Remote name to push to. Default: "origin"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,

    /// Branch name set when drover initializes a repository.
    /// Default: "main"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    /// Per-subprocess timeout in seconds. The git binary can block
    /// indefinitely on credential prompts; this bounds each call.
    /// Default: 30
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl GitConfig {
    /// Returns the remote name, defaulting to "origin".
    pub fn remote(&self) -> &str {
        self.remote.as_deref().unwrap_or("origin")
    }

    /// Returns the branch used when initializing repositories, defaulting to "main".
    pub fn default_branch(&self) -> &str {
        self.default_branch.as_deref().unwrap_or("main")
    }

    /// Returns the per-call git timeout, defaulting to 30 seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(30)
    }
}

/// Publish pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Commit message used when the caller supplies none.
    /// Default: "Update files"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,

    /// Whether push failures walk the fallback strategy list.
    /// Default: true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<bool>,
}

impl PublishConfig {
    /// Returns the fallback commit message, defaulting to "Update files".
    pub fn commit_message(&self) -> &str {
        self.commit_message.as_deref().unwrap_or("Update files")
    }

    /// Returns whether the retry strategy list is enabled, defaulting to true.
    pub fn retry(&self) -> bool {
        self.retry.unwrap_or(true)
    }
}
