//! Error types for merge-poller

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that abort a poll run
#[derive(Debug, Error)]
pub enum Error {
    /// Config file missing, malformed, or not writable
    #[error("config error: {0}")]
    Config(String),

    /// Request could not be sent or the connection failed
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Branch-info endpoint answered with a non-200 status
    #[error("GitHub API responded with status: {0}")]
    GitHubStatus(StatusCode),

    /// Merge endpoint answered with a non-200 status
    #[error("server responded with status {status}: {body}")]
    ServerStatus {
        /// Numeric HTTP status
        status: u16,
        /// Response body text, possibly empty
        body: String,
    },

    /// Branch-info body is not valid JSON
    #[error("failed to parse branch response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Branch-info body is JSON but lacks an expected field
    #[error("unexpected JSON structure: {0}")]
    UnexpectedJson(String),
}

/// Result type alias for merge-poller operations
pub type Result<T> = std::result::Result<T, Error>;
