//! Inputs to and outputs from the panel reducer.

use serde::{Deserialize, Serialize};

use crate::github::{Repository, UserProfile};
use crate::view::FilterField;

/// Identifies one fetch. Results carrying an older token are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken(pub u64);

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything that can change panel state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A username was submitted from the form.
    Search {
        /// Username, unvalidated.
        username: String,
    },
    /// Re-issue the last search after a failure.
    Retry,
    /// The profile request resolved (sequential fetching).
    ProfileLoaded {
        /// Request the result belongs to.
        token: RequestToken,
        /// Fetched profile.
        user: UserProfile,
    },
    /// The repository request resolved (sequential fetching).
    ReposLoaded {
        /// Request the result belongs to.
        token: RequestToken,
        /// Repositories in API order.
        repos: Vec<Repository>,
    },
    /// Both requests resolved (concurrent fetching).
    FetchCompleted {
        /// Request the result belongs to.
        token: RequestToken,
        /// Fetched profile.
        user: UserProfile,
        /// Repositories in API order.
        repos: Vec<Repository>,
    },
    /// A request failed.
    FetchFailed {
        /// Request the failure belongs to.
        token: RequestToken,
        /// Error description shown to the user.
        message: String,
    },
    /// Select the filter dimension.
    SetFilterField(FilterField),
    /// Replace the filter text.
    SetFilterText(String),
    /// Jump to a page (1-based).
    SetPage(usize),
    /// Step forward one page.
    NextPage,
    /// Step back one page.
    PrevPage,
}

impl Action {
    /// Token of a fetch result, `None` for user-originated actions.
    #[must_use]
    pub const fn token(&self) -> Option<RequestToken> {
        match self {
            Self::ProfileLoaded { token, .. }
            | Self::ReposLoaded { token, .. }
            | Self::FetchCompleted { token, .. }
            | Self::FetchFailed { token, .. } => Some(*token),
            _ => None,
        }
    }
}

/// Work requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start fetching profile and repositories.
    Fetch(FetchRequest),
}

/// A fetch to perform on behalf of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Token the results must carry.
    pub token: RequestToken,
    /// Username to fetch.
    pub username: String,
}
