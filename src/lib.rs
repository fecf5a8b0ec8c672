//! merge-poller: watch a GitHub branch and request a merge when it moves
//!
//! One run loads `config.yaml`, asks the GitHub API for the tip of
//! `main`, and when it differs from the recorded `commit_sha`, records
//! the new tip and calls the merge server's `/merge-main` endpoint.
//! Scheduling is left to cron or a systemd timer.

pub mod config;
pub mod error;
pub mod platform;
pub mod types;
pub mod watch;
