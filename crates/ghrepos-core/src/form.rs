//! Username input form.

use serde::{Deserialize, Serialize};

use crate::panel::Action;

/// A submitted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Username exactly as typed.
    pub username: String,
}

impl From<SearchRequest> for Action {
    fn from(request: SearchRequest) -> Self {
        Self::Search {
            username: request.username,
        }
    }
}

/// Text field plus the "search triggered" flag that makes the panel visible.
///
/// No validation is done here; a bad username is left for the API to reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    username: String,
    submitted: bool,
}

impl SearchForm {
    /// Empty, not yet submitted form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field value.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether the form was submitted at least once.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Replace the field value.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Submit the current value. Every call yields a new request, even for
    /// an unchanged username.
    pub fn submit(&mut self) -> SearchRequest {
        self.submitted = true;
        SearchRequest {
            username: self.username.clone(),
        }
    }
}
