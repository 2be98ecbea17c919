//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Browse a GitHub user's public repositories
///
/// With a USERNAME, fetches that user once and prints the requested page.
/// Without one, starts an interactive session reading commands from stdin.
#[derive(Debug, Parser)]
#[command(name = "ghrepos")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// GitHub username to show
    pub username: Option<String>,

    /// Path to configuration file
    ///
    /// If not specified, searches for ghrepos.toml in:
    /// 1. $GHREPOS_CONFIG environment variable (ignored when empty)
    /// 2. Current directory
    /// 3. ~/.config/ghrepos/ghrepos.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Logging level
    ///
    /// Valid values: trace, debug, info, warn, error
    #[arg(short, long, default_value = "warn", env = "GHREPOS_LOG")]
    pub log_level: String,

    /// Output logs as JSON (for structured logging)
    #[arg(long, default_value = "false", env = "GHREPOS_LOG_JSON")]
    pub log_json: bool,

    /// Filter dimension: name, size, created_at, stargazers_count or language
    #[arg(short, long, value_name = "FIELD")]
    pub field: Option<String>,

    /// Filter text, matched case-insensitively as a substring
    #[arg(short = 'q', long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,

    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Request scheduling: concurrent or sequential (overrides the config file)
    #[arg(long, value_name = "MODE")]
    pub fetch_mode: Option<String>,

    /// Print the panel state as JSON instead of the table
    #[arg(long)]
    pub json: bool,
}
