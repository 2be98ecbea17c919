//! GitHub REST API access.
//!
//! Two read-only calls are made per search: the user profile and the
//! user's public repository list.

mod client;
mod types;

pub use client::{GithubApi, GithubClient};
pub use types::{Repository, UserProfile, sort_newest_first};
