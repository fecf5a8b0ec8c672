//! Shared test helpers

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{MockCommitSource, MockMergeTrigger};

use merge_poller::config::{Config, DEFAULT_CONFIG_FILE};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Config pointing at the given API and server base URLs
pub fn sample_config(api_url: &str, server_url: &str, sha: &str) -> Config {
    Config {
        github_api_url: api_url.to_string(),
        repo_owner: "octo".to_string(),
        repo_name: "widgets".to_string(),
        github_token: "ghp_test".to_string(),
        server_url: server_url.to_string(),
        last_commit_sha: sha.to_string(),
    }
}

/// Temp directory holding a `config.yaml`
pub struct TempConfig {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TempConfig {
    /// Write `config` to a fresh temp directory
    pub fn new(config: &Config) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, serde_yaml::to_string(config).expect("encode config"))
            .expect("write config");
        Self { dir, path }
    }

    /// Raw file contents
    pub fn contents(&self) -> String {
        fs::read_to_string(&self.path).expect("read config")
    }

    /// Parsed file contents
    pub fn load(&self) -> Config {
        merge_poller::config::load_config(&self.path).expect("load config")
    }
}
