//! Executes [`FetchRequest`]s against a [`GithubApi`].

use futures::future::try_join;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use super::action::{Action, FetchRequest, RequestToken};
use crate::config::FetchMode;
use crate::error::Error;
use crate::github::GithubApi;

/// Perform `request` and report the outcome on `tx`.
///
/// In [`FetchMode::Concurrent`] both reads run together and a single
/// [`Action::FetchCompleted`] or [`Action::FetchFailed`] is sent. In
/// [`FetchMode::Sequential`] the profile is read first and reported as soon
/// as it arrives, then the repositories.
pub async fn run_fetch(
    api: &dyn GithubApi,
    request: FetchRequest,
    mode: FetchMode,
    tx: &UnboundedSender<Action>,
) {
    let FetchRequest { token, username } = request;
    info!(%token, %username, %mode, "fetching profile and repositories");

    match mode {
        FetchMode::Concurrent => {
            let action =
                match try_join(api.fetch_user(&username), api.fetch_repos(&username)).await {
                    Ok((user, repos)) => Action::FetchCompleted { token, user, repos },
                    Err(e) => failed(token, &e),
                };
            send(tx, action);
        }
        FetchMode::Sequential => {
            let user = match api.fetch_user(&username).await {
                Ok(user) => user,
                Err(e) => {
                    send(tx, failed(token, &e));
                    return;
                }
            };
            if !send(tx, Action::ProfileLoaded { token, user }) {
                return;
            }

            let action = match api.fetch_repos(&username).await {
                Ok(repos) => Action::ReposLoaded { token, repos },
                Err(e) => failed(token, &e),
            };
            send(tx, action);
        }
    }
}

fn failed(token: RequestToken, error: &Error) -> Action {
    Action::FetchFailed {
        token,
        message: error.to_string(),
    }
}

fn send(tx: &UnboundedSender<Action>, action: Action) -> bool {
    if tx.send(action).is_err() {
        debug!("panel receiver dropped, discarding fetch result");
        return false;
    }
    true
}
