//! Client for the remote merge endpoint

use crate::config::Config;
use crate::error::{Error, Result};
use crate::platform::{MergeTrigger, USER_AGENT, normalize_base_url};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Path of the endpoint that merges `main`
const MERGE_PATH: &str = "merge-main";

/// Server that performs merges on request
pub struct MergeServer {
    http_client: Client,
    server_url: String,
}

impl MergeServer {
    /// Create a client for the server at `server_url`
    pub fn new(server_url: &str) -> Result<Self> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http_client,
            server_url: normalize_base_url(server_url),
        })
    }

    /// Create a client for the server named in `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.server_url)
    }

    /// URL of the merge endpoint
    pub fn merge_url(&self) -> String {
        format!("{}/{MERGE_PATH}", self.server_url)
    }
}

#[async_trait]
impl MergeTrigger for MergeServer {
    async fn trigger_merge(&self) -> Result<()> {
        let url = self.merge_url();
        debug!(%url, "requesting merge");

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            // The body usually says why; an unreadable body is not worth a second error.
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ServerStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!(%url, "merge accepted");
        Ok(())
    }
}
