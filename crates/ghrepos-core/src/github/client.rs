//! HTTP client for the two read-only GitHub endpoints.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use super::types::{Repository, UserProfile};
use crate::config::GithubConfig;
use crate::error::{Error, Result};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Read access to the GitHub data the panel needs.
///
/// [`GithubClient`] is the network implementation; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Fetch `GET /users/{username}`.
    async fn fetch_user(&self, username: &str) -> Result<UserProfile>;

    /// Fetch `GET /users/{username}/repos`, in API order.
    async fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>>;
}

/// GitHub REST client without authentication.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: Url,
}

impl GithubClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL or user agent is invalid, or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let base_url = config.base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::InvalidConfig(format!("user_agent: {e}")))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self { http, base_url })
    }

    /// API root this client talks to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the profile endpoint for `username`.
    ///
    /// The username is percent-encoded as a single path segment and is not
    /// otherwise validated; an empty name yields `/users/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the base URL cannot take path segments.
    pub fn user_url(&self, username: &str) -> Result<Url> {
        self.endpoint(&["users", username])
    }

    /// URL of the repository-list endpoint for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the base URL cannot take path segments.
    pub fn repos_url(&self, username: &str) -> Result<Url> {
        self.endpoint(&["users", username, "repos"])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        username: &str,
        what: &'static str,
    ) -> Result<T> {
        debug!(%url, what, "sending GitHub request");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ApiStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let body = response.text().await?;
        trace!(what, bytes = body.len(), "GitHub response received");

        serde_json::from_str(&body).map_err(|e| Error::Decode {
            what,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        let url = self.user_url(username)?;
        self.get_json(url, username, "user profile").await
    }

    async fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = self.repos_url(username)?;
        self.get_json(url, username, "repository list").await
    }
}
