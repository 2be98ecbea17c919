//! Repository panel: state machine, fetch execution and the driver tying
//! them together.
//!
//! The reducer ([`PanelState::apply`]) is synchronous and pure apart from
//! logging. [`PanelDriver`] owns it, spawns fetches for the effects it
//! returns and feeds their results back in.

mod action;
mod fetch;
mod state;

use std::sync::Arc;

pub use action::{Action, Effect, FetchRequest, RequestToken};
pub use fetch::run_fetch;
pub use state::{PanelState, Phase};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::{AppConfig, FetchMode, ViewConfig};
use crate::error::Result;
use crate::github::{GithubApi, GithubClient};

/// Owns a [`PanelState`] and runs the fetches it asks for.
pub struct PanelDriver {
    state: PanelState,
    api: Arc<dyn GithubApi>,
    mode: FetchMode,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
    in_flight: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for PanelDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelDriver")
            .field("state", &self.state)
            .field("api", &"<dyn GithubApi>")
            .field("mode", &self.mode)
            .field("in_flight", &self.in_flight.is_some())
            .finish()
    }
}

impl PanelDriver {
    /// Create a driver over any [`GithubApi`] implementation.
    #[must_use]
    pub fn new(api: Arc<dyn GithubApi>, settings: ViewConfig, mode: FetchMode) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: PanelState::new(settings),
            api,
            mode,
            tx,
            rx,
            in_flight: None,
        }
    }

    /// Create a driver talking to the GitHub API described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = GithubClient::new(&config.github)?;
        debug!(base_url = %client.base_url(), mode = %config.fetch.mode, "GitHub client ready");
        Ok(Self::new(
            Arc::new(client),
            config.view.clone(),
            config.fetch.mode,
        ))
    }

    /// Current panel state.
    #[must_use]
    pub const fn state(&self) -> &PanelState {
        &self.state
    }

    /// Fetch scheduling mode.
    #[must_use]
    pub const fn mode(&self) -> FetchMode {
        self.mode
    }

    /// Apply `action` and start any fetch it requests.
    ///
    /// A new fetch aborts the previous one; results already queued from it
    /// are still filtered out by their token. Must be called within a tokio
    /// runtime.
    pub fn dispatch(&mut self, action: Action) {
        let Some(Effect::Fetch(request)) = self.state.apply(action) else {
            return;
        };

        if let Some(previous) = self.in_flight.take() {
            debug!("aborting superseded fetch");
            previous.abort();
        }

        let api = Arc::clone(&self.api);
        let mode = self.mode;
        let tx = self.tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            run_fetch(api.as_ref(), request, mode, &tx).await;
        }));
    }

    /// Wait for the next fetch result.
    ///
    /// Pending forever while nothing is in flight, which makes it suitable
    /// as a `tokio::select!` branch.
    pub async fn next_result(&mut self) -> Option<Action> {
        self.rx.recv().await
    }

    /// Apply fetch results until no request is pending.
    pub async fn settle(&mut self) {
        while self.state.phase().is_pending() {
            match self.rx.recv().await {
                Some(action) => self.dispatch(action),
                None => break,
            }
        }
    }
}
