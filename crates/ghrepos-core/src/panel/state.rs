//! Panel state and its reducer.
//!
//! All panel mutations go through [`PanelState::apply`]. Network results are
//! tagged with a [`RequestToken`]; only results for the latest request are
//! accepted.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::action::{Action, Effect, FetchRequest, RequestToken};
use crate::config::ViewConfig;
use crate::error::Result;
use crate::github::{Repository, UserProfile, sort_newest_first};
use crate::view::{Filter, RepoView, clamp_page, filter_repos, page_count};

/// Lifecycle of one username submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Waiting for the profile.
    Loading,
    /// Profile shown, repositories still pending.
    ProfileLoaded,
    /// Profile and repositories available.
    Ready,
    /// A request failed; `Retry` starts over.
    Error {
        /// Failure description.
        message: String,
    },
}

impl Phase {
    /// Whether a request is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Loading | Self::ProfileLoaded)
    }
}

/// Serializable state of the repository panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    settings: ViewConfig,
    username: String,
    phase: Phase,
    current: Option<RequestToken>,
    issued: u64,
    user: Option<UserProfile>,
    repos: Option<Vec<Repository>>,
    filter: Filter,
    page: usize,
}

impl PanelState {
    /// Create an idle panel.
    #[must_use]
    pub fn new(settings: ViewConfig) -> Self {
        Self {
            settings,
            page: 1,
            ..Self::default()
        }
    }

    /// View settings (page size, date format).
    #[must_use]
    pub const fn settings(&self) -> &ViewConfig {
        &self.settings
    }

    /// Last submitted username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Token of the latest request, if any was issued.
    #[must_use]
    pub const fn current_token(&self) -> Option<RequestToken> {
        self.current
    }

    /// Fetched profile.
    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Fetched repositories, newest first. Empty until they arrive.
    #[must_use]
    pub fn repos(&self) -> &[Repository] {
        self.repos.as_deref().unwrap_or_default()
    }

    /// Active filter.
    #[must_use]
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Page count of the filtered view.
    #[must_use]
    pub fn page_count(&self) -> usize {
        let filtered = filter_repos(self.repos(), &self.filter, &self.settings);
        page_count(filtered.len(), self.settings.page_size)
    }

    /// Derive the rows for the current render.
    #[must_use]
    pub fn view(&self) -> RepoView<'_> {
        RepoView::derive(self.repos(), &self.filter, self.page, &self.settings)
    }

    /// Serialize the state as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply one action, returning work for the caller to perform.
    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        if let Some(token) = action.token().filter(|token| !self.accepts(*token)) {
            debug!(
                %token,
                current = ?self.current,
                "discarding stale fetch result"
            );
            return None;
        }

        match action {
            Action::Search { username } => Some(self.start(username)),
            Action::Retry => {
                if matches!(self.phase, Phase::Error { .. }) {
                    let username = self.username.clone();
                    Some(self.start(username))
                } else {
                    debug!(phase = ?self.phase, "retry ignored outside error state");
                    None
                }
            }
            Action::ProfileLoaded { user, .. } => {
                self.user = Some(user);
                self.settle();
                None
            }
            Action::ReposLoaded { repos, .. } => {
                self.accept_repos(repos);
                self.settle();
                None
            }
            Action::FetchCompleted { user, repos, .. } => {
                self.user = Some(user);
                self.accept_repos(repos);
                self.settle();
                None
            }
            Action::FetchFailed { message, .. } => {
                warn!(username = %self.username, error = %message, "fetch failed");
                self.phase = Phase::Error { message };
                None
            }
            Action::SetFilterField(field) => {
                self.filter.field = field;
                self.page = 1;
                None
            }
            Action::SetFilterText(text) => {
                self.filter.text = text;
                self.page = 1;
                None
            }
            Action::SetPage(page) => {
                self.page = clamp_page(page, self.page_count());
                None
            }
            Action::NextPage => {
                self.page = clamp_page(self.page.saturating_add(1), self.page_count());
                None
            }
            Action::PrevPage => {
                self.page = clamp_page(self.page.saturating_sub(1), self.page_count());
                None
            }
        }
    }

    fn accepts(&self, token: RequestToken) -> bool {
        self.current == Some(token) && self.phase.is_pending()
    }

    fn start(&mut self, username: String) -> Effect {
        self.issued += 1;
        let token = RequestToken(self.issued);

        debug!(%token, %username, "starting fetch");

        self.current = Some(token);
        self.username.clone_from(&username);
        self.user = None;
        self.repos = None;
        self.page = 1;
        self.phase = Phase::Loading;

        Effect::Fetch(FetchRequest { token, username })
    }

    fn accept_repos(&mut self, mut repos: Vec<Repository>) {
        sort_newest_first(&mut repos);
        self.repos = Some(repos);
    }

    fn settle(&mut self) {
        self.phase = match (&self.user, &self.repos) {
            (Some(_), Some(_)) => Phase::Ready,
            (Some(_), None) => Phase::ProfileLoaded,
            (None, _) => Phase::Loading,
        };
    }
}
