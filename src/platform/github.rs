//! GitHub branch-info client

use crate::config::Config;
use crate::error::{Error, Result};
use crate::platform::{CommitSource, USER_AGENT, normalize_base_url};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

/// Reads branch tips from the GitHub REST API
pub struct GitHubService {
    http_client: Client,
    api_url: String,
    owner: String,
    repo: String,
}

impl GitHubService {
    const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

    /// Create a new GitHub service
    pub fn new(api_url: &str, owner: String, repo: String, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static(Self::ACCEPT_GITHUB_JSON),
        );

        let mut auth = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|e| Error::Config(format!("github_token is not a valid header value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            api_url: normalize_base_url(api_url),
            owner,
            repo,
        })
    }

    /// Create a service for the repository named in `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.github_api_url,
            config.repo_owner.clone(),
            config.repo_name.clone(),
            &config.github_token,
        )
    }

    /// URL of the branch-info endpoint for `branch`
    pub fn branch_url(&self, branch: &str) -> String {
        format!(
            "{}/repos/{}/{}/branches/{}",
            self.api_url,
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.repo),
            urlencoding::encode(branch)
        )
    }
}

/// Pull `commit.sha` out of a branch-info response body
pub(crate) fn parse_branch_sha(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)?;

    let commit = value
        .get("commit")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::UnexpectedJson("'commit' key not found".to_string()))?;

    let sha = commit
        .get("sha")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::UnexpectedJson("'sha' key not found".to_string()))?;

    Ok(sha.to_string())
}

#[async_trait]
impl CommitSource for GitHubService {
    async fn latest_commit_sha(&self, branch: &str) -> Result<String> {
        let url = self.branch_url(branch);
        debug!(%url, "fetching branch tip");

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(%status, "branch request failed");
            return Err(Error::GitHubStatus(status));
        }

        let body = response.text().await?;
        let sha = parse_branch_sha(&body)?;

        debug!(branch, sha = %sha, "fetched branch tip");
        Ok(sha)
    }
}
