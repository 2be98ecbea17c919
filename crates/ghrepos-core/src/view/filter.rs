//! Single-dimension substring filter over repository records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DateZone, ViewConfig};
use crate::error::{Error, Result};
use crate::github::Repository;

/// The repository field a filter text is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    /// Repository name.
    #[default]
    Name,
    /// Size in KB, as a decimal string.
    Size,
    /// Creation date, formatted with the configured date format and zone.
    CreatedAt,
    /// Star count, as a decimal string.
    StargazersCount,
    /// Primary language. Repositories without one never match.
    Language,
}

impl FilterField {
    /// Every dimension, in selector order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Size,
        Self::CreatedAt,
        Self::StargazersCount,
        Self::Language,
    ];

    /// Canonical identifier, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::CreatedAt => "created_at",
            Self::StargazersCount => "stargazers_count",
            Self::Language => "language",
        }
    }

    /// Human-readable label for selectors and headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::CreatedAt => "Created",
            Self::StargazersCount => "Stars",
            Self::Language => "Language",
        }
    }

    /// String form of this field for `repo`, or `None` when the field is null.
    #[must_use]
    pub fn value_of(self, repo: &Repository, settings: &ViewConfig) -> Option<String> {
        match self {
            Self::Name => Some(repo.name.clone()),
            Self::Size => Some(repo.size.to_string()),
            Self::CreatedAt => Some(format_date(
                &repo.created_at,
                &settings.date_format,
                settings.timezone,
            )),
            Self::StargazersCount => Some(repo.stargazers_count.to_string()),
            Self::Language => repo.language.clone(),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "size" => Ok(Self::Size),
            "created_at" | "created" | "date" => Ok(Self::CreatedAt),
            "stargazers_count" | "stars" => Ok(Self::StargazersCount),
            "language" | "lang" => Ok(Self::Language),
            _ => Err(Error::UnknownFilterField(s.to_string())),
        }
    }
}

/// Format a timestamp for display and date filtering.
///
/// The calendar date is taken in `zone`, so an early-morning UTC timestamp
/// shows the previous day west of Greenwich.
#[must_use]
pub fn format_date(timestamp: &DateTime<Utc>, date_format: &str, zone: DateZone) -> String {
    match zone {
        DateZone::Local => timestamp.with_timezone(&Local).format(date_format).to_string(),
        DateZone::Utc => timestamp.format(date_format).to_string(),
    }
}

/// The active filter: one field and a free-text needle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Field the text is matched against.
    pub field: FilterField,
    /// Needle; matched case-insensitively as a substring.
    pub text: String,
}

impl Filter {
    /// Create a filter.
    #[must_use]
    pub fn new(field: FilterField, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
        }
    }

    /// Whether `repo` passes this filter.
    ///
    /// Numbers and dates are compared on their string form, so `"20"`
    /// matches a size of `205`. A null language fails regardless of the text.
    #[must_use]
    pub fn matches(&self, repo: &Repository, settings: &ViewConfig) -> bool {
        let Some(value) = self.field.value_of(repo, settings) else {
            return false;
        };
        if self.text.is_empty() {
            return true;
        }
        value.to_lowercase().contains(&self.text.to_lowercase())
    }
}
