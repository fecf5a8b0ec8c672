//! Persisted poller configuration
//!
//! The config file doubles as the poller's only durable state: the
//! `commit_sha` key records the last branch tip that triggered a merge.

mod storage;

pub use storage::{DEFAULT_CONFIG_FILE, load_config, save_config};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat configuration record read from and written back to `config.yaml`
///
/// Absent keys load as empty strings, so a config without `commit_sha`
/// treats the first fetched tip as new.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the GitHub REST API (e.g. `https://api.github.com`)
    pub github_api_url: String,
    /// Owner of the watched repository
    pub repo_owner: String,
    /// Name of the watched repository
    pub repo_name: String,
    /// Access token sent as `Authorization: token ...`
    pub github_token: String,
    /// Base URL of the server that performs merges
    pub server_url: String,
    /// Last branch tip seen by the poller
    #[serde(rename = "commit_sha")]
    pub last_commit_sha: String,
}

impl Config {
    /// Record a new branch tip, leaving every other field untouched
    pub fn record_commit(&mut self, sha: &str) {
        self.last_commit_sha = sha.to_string();
    }
}

// Hand-written so the token never reaches logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("github_api_url", &self.github_api_url)
            .field("repo_owner", &self.repo_owner)
            .field("repo_name", &self.repo_name)
            .field("github_token", &"<redacted>")
            .field("server_url", &self.server_url)
            .field("last_commit_sha", &self.last_commit_sha)
            .finish()
    }
}
