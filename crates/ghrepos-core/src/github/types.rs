//! GitHub API payloads.
//!
//! Only the fields the panel displays are deserialized; everything else in
//! the response is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile from `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account login.
    pub login: String,
    /// Display name. Many accounts never set one.
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Follower count.
    pub followers: u64,
    /// Number of public repositories.
    pub public_repos: u64,
    /// Profile page URL.
    pub html_url: String,
}

impl UserProfile {
    /// Display name, falling back to the login.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.login)
    }
}

/// A repository record from `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name, unique within one user's list.
    pub name: String,
    /// Size in kilobytes.
    pub size: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Star count.
    pub stargazers_count: u64,
    /// Primary language, if GitHub detected one.
    #[serde(default)]
    pub language: Option<String>,
    /// Web URL.
    pub html_url: String,
}

/// Sort repositories newest first by creation timestamp.
///
/// Order among equal timestamps is unspecified.
pub fn sort_newest_first(repos: &mut [Repository]) {
    repos.sort_unstable_by(|a, b| b.created_at.cmp(&a.created_at));
}
