//! GitHub API endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Public GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Connection settings for the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GithubConfig {
    /// Base URL of the REST API. Tests point this at a local mock server.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Value of the `User-Agent` header. GitHub rejects requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl GithubConfig {
    /// Configuration targeting a custom API root, with other fields defaulted.
    #[must_use]
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Parse the API root.
    ///
    /// The returned URL always ends with `/` so that relative joins append
    /// instead of replacing the last path segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the URL does not parse or is not
    /// an http(s) URL.
    pub fn base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| Error::InvalidConfig(format!("api_url '{}': {e}", self.api_url)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "api_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.base_url()?;
        if self.user_agent.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "user_agent cannot be empty".to_string(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(Error::InvalidConfig(
                "timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    format!("ghrepos/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_timeout_seconds() -> u64 {
    30
}
