//! Mock services for testing the poll pipeline

use async_trait::async_trait;
use merge_poller::error::{Error, Result};
use merge_poller::platform::{CommitSource, MergeTrigger};
use std::path::PathBuf;
use std::sync::Mutex;

/// Commit source returning a canned tip
///
/// Features:
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockCommitSource {
    sha: String,
    calls: Mutex<Vec<String>>,
    error: Mutex<Option<Error>>,
}

impl MockCommitSource {
    /// Source whose branch tip is `sha`
    pub fn with_sha(sha: &str) -> Self {
        Self {
            sha: sha.to_string(),
            calls: Mutex::new(Vec::new()),
            error: Mutex::new(None),
        }
    }

    /// Make the next `latest_commit_sha` fail with `err`
    pub fn fail_with(&self, err: Error) {
        *self.error.lock().unwrap() = Some(err);
    }

    /// Branches requested so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommitSource for MockCommitSource {
    async fn latest_commit_sha(&self, branch: &str) -> Result<String> {
        self.calls.lock().unwrap().push(branch.to_string());
        if let Some(err) = self.error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(self.sha.clone())
    }
}

/// Merge trigger that records calls
///
/// Optionally snapshots a file at call time so tests can check what was
/// on disk when the merge was requested.
pub struct MockMergeTrigger {
    calls: Mutex<usize>,
    error: Mutex<Option<Error>>,
    observe_path: Option<PathBuf>,
    observed: Mutex<Vec<String>>,
}

impl MockMergeTrigger {
    /// Trigger that always succeeds
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(0),
            error: Mutex::new(None),
            observe_path: None,
            observed: Mutex::new(Vec::new()),
        }
    }

    /// Trigger that reads `path` each time it is called
    pub fn observing(path: PathBuf) -> Self {
        Self {
            observe_path: Some(path),
            ..Self::new()
        }
    }

    /// Make the next `trigger_merge` fail with `err`
    pub fn fail_with(&self, err: Error) {
        *self.error.lock().unwrap() = Some(err);
    }

    /// Number of merge requests
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// File contents seen at each call
    pub fn observed(&self) -> Vec<String> {
        self.observed.lock().unwrap().clone()
    }
}

#[async_trait]
impl MergeTrigger for MockMergeTrigger {
    async fn trigger_merge(&self) -> Result<()> {
        *self.calls.lock().unwrap() += 1;
        if let Some(path) = &self.observe_path {
            let content = std::fs::read_to_string(path).unwrap_or_default();
            self.observed.lock().unwrap().push(content);
        }
        if let Some(err) = self.error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(())
    }
}
