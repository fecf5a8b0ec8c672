//! Remote services the poller talks to
//!
//! Two narrow traits sit between the run pipeline and the network so
//! the pipeline can be exercised without HTTP.

mod github;
mod merge_server;

pub use github::GitHubService;
pub use merge_server::MergeServer;

use crate::error::Result;
use async_trait::async_trait;

/// Source of branch tip commits
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Get the SHA of the tip commit of `branch`
    async fn latest_commit_sha(&self, branch: &str) -> Result<String>;
}

/// Remote action that merges the watched branch
#[async_trait]
pub trait MergeTrigger: Send + Sync {
    /// Ask the server to perform the merge
    async fn trigger_merge(&self) -> Result<()>;
}

/// Strip trailing slashes so paths can be appended with `/`.
pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// `User-Agent` sent on every request
pub(crate) const USER_AGENT: &str = concat!("merge-poller/", env!("CARGO_PKG_VERSION"));
