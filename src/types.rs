//! Core types for merge-poller

/// Branch whose tip is watched
pub const WATCHED_BRANCH: &str = "main";

/// Result of comparing the stored tip with the fetched one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitChange {
    /// Fetched tip equals the stored one
    Unchanged,
    /// Branch moved since the last run
    Changed {
        /// Tip recorded in the config
        previous: String,
        /// Tip reported by the API
        current: String,
    },
}

/// What a single poll run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Nothing to do; the branch tip is already recorded
    Unchanged {
        /// Current branch tip
        sha: String,
    },
    /// New tip recorded and merge requested
    Merged {
        /// Tip recorded before this run
        previous: String,
        /// Tip recorded by this run
        current: String,
    },
    /// New tip detected, but nothing written or triggered
    DryRun {
        /// Tip recorded in the config
        previous: String,
        /// Tip reported by the API
        current: String,
    },
}

/// Options for a poll run
#[derive(Debug, Clone, Copy, Default)]
pub struct PollOptions {
    /// Fetch and compare only
    pub dry_run: bool,
}
