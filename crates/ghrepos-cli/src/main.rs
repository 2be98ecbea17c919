//! ghrepos - browse a GitHub user's public repositories from the terminal.
//!
//! Fetches a user's profile and repositories, lists them newest first and
//! lets the list be filtered on one field and paged through.

use anyhow::{Context, Result};
use clap::Parser;

mod args;
mod command;
mod logging;
mod session;

use args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    logging::init(&args.log_level, args.log_json)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting ghrepos");

    // Load configuration
    let mut config = if let Some(config_path) = &args.config {
        ghrepos_core::AppConfig::load_from(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
    } else {
        ghrepos_core::AppConfig::load().context("failed to load configuration")?
    };

    if let Some(mode) = &args.fetch_mode {
        config.fetch.mode = mode.parse().context("invalid --fetch-mode")?;
    }

    tracing::debug!(
        api_url = %config.github.api_url,
        fetch_mode = %config.fetch.mode,
        page_size = config.view.page_size,
        "configuration loaded"
    );

    match &args.username {
        Some(username) => session::run_once(&config, username, &args).await,
        None => session::run_interactive(&config).await,
    }
}
