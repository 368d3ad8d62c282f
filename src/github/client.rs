//! GitHub API client implementation

use crate::core::{ActionError, ActionResult};
use crate::di::traits::MetaClient;
use crate::github::types::GitHubApiDetails;
use crate::github::url::{api_url_for, parse_github_url};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};
use std::collections::HashMap;
use std::time::Duration;

/// Client for the GitHub `/meta` endpoint
pub struct GitHubMetaClient {
    http_client: HttpClient,
}

impl GitHubMetaClient {
    /// Create a new GitHub client
    pub fn new() -> ActionResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("codeql-action/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ActionError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// URL of the meta endpoint for a GitHub instance
    pub fn meta_url(details: &GitHubApiDetails) -> ActionResult<String> {
        let api_url = api_url_for(&parse_github_url(&details.url)?);
        Ok(format!("{}/meta", api_url.trim_end_matches('/')))
    }

    /// Request the meta endpoint and return its response
    async fn meta_request(&self, details: &GitHubApiDetails) -> ActionResult<reqwest::Response> {
        let url = Self::meta_url(details)?;
        tracing::debug!("Requesting {}", url);

        let mut request = self.http_client.get(&url);
        if !details.auth.is_empty() {
            let value = header::HeaderValue::from_str(&format!("token {}", details.auth))
                .map_err(|e| ActionError::Config(format!("Invalid GitHub token: {}", e)))?;
            request = request.header(header::AUTHORIZATION, value);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ActionError::HttpStatus {
                status: status.as_u16(),
                message: format!("GitHub API error: HTTP {}", status),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl MetaClient for GitHubMetaClient {
    async fn fetch_meta_headers(
        &self,
        details: &GitHubApiDetails,
    ) -> ActionResult<HashMap<String, String>> {
        let response = self.meta_request(details).await?;

        // Header names from reqwest are already lowercase
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        Ok(headers)
    }
}
