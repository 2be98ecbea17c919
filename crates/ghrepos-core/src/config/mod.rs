//! Configuration types and loading.
//!
//! This module provides the configuration structures for ghrepos:
//! API endpoint settings, view settings and the fetch strategy.

mod github;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
pub use github::{DEFAULT_API_URL, GithubConfig};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::view::DEFAULT_PAGE_SIZE;

/// Name of the configuration file looked up in the working and config directories.
pub const CONFIG_FILE_NAME: &str = "ghrepos.toml";

/// Environment variable pointing at a configuration file.
pub const CONFIG_ENV_VAR: &str = "GHREPOS_CONFIG";

/// Main configuration for ghrepos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// GitHub API settings.
    #[serde(default)]
    pub github: GithubConfig,

    /// Presentation settings.
    #[serde(default)]
    pub view: ViewConfig,

    /// Fetch strategy.
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Presentation settings for the repository table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// `strftime` pattern used to display (and filter on) dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Time zone dates are shown in.
    #[serde(default)]
    pub timezone: DateZone,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            date_format: default_date_format(),
            timezone: DateZone::default(),
        }
    }
}

/// Time zone used when turning timestamps into calendar dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateZone {
    /// The zone of the machine running ghrepos (`TZ` on Unix).
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
}

/// How the profile and repository requests are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Issue both requests at once and join them.
    #[default]
    Concurrent,
    /// Request the profile, then the repositories.
    Sequential,
}

impl FromStr for FetchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Ok(Self::Concurrent),
            "sequential" => Ok(Self::Sequential),
            _ => Err(Error::UnknownFetchMode(s.to_string())),
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Concurrent => "concurrent",
            Self::Sequential => "sequential",
        })
    }
}

/// Fetch strategy settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// Request scheduling mode.
    #[serde(default)]
    pub mode: FetchMode,
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

impl AppConfig {
    /// Load configuration from the default locations.
    ///
    /// Paths checked in order:
    /// 1. `$GHREPOS_CONFIG` environment variable, unless empty
    /// 2. `./ghrepos.toml` (current directory)
    /// 3. `<config dir>/ghrepos/ghrepos.toml`
    ///
    /// Falls back to built-in defaults when no file exists. Nothing is
    /// written to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|path| !path.is_empty()) {
            return Self::load_from(Path::new(&path));
        }

        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Self::load_from(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("ghrepos").join(CONFIG_FILE_NAME);
            if user_config.exists() {
                return Self::load_from(&user_config);
            }
            tracing::debug!(
                path = %user_config.display(),
                "no configuration file found, using defaults"
            );
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, parsing fails, or the
    /// values are invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.github.validate()?;

        if self.view.page_size == 0 {
            return Err(Error::InvalidConfig(
                "page_size must be greater than zero".to_string(),
            ));
        }

        let broken_format = self.view.date_format.is_empty()
            || StrftimeItems::new(&self.view.date_format).any(|item| matches!(item, Item::Error));
        if broken_format {
            return Err(Error::InvalidConfig(format!(
                "date_format '{}' is not a valid strftime pattern",
                self.view.date_format
            )));
        }
        Ok(())
    }
}
