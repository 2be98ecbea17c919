//! Error types for ghrepos-core.
//!
//! This module defines the canonical error type for the library.

use std::path::PathBuf;

/// The main error type for ghrepos-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport failure (connect, timeout, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The GitHub API answered with a non-success status.
    #[error("GitHub API error ({status}) for {url}: {body}")]
    ApiStatus {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
        /// Response body, possibly empty.
        body: String,
    },

    /// The requested user does not exist.
    #[error("GitHub user not found: {0}")]
    UserNotFound(String),

    /// The response body could not be decoded.
    #[error("failed to decode {what} response: {message}")]
    Decode {
        /// Which response failed to decode.
        what: &'static str,
        /// Decoder message.
        message: String,
    },

    /// An endpoint URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Unknown filter dimension name.
    #[error("unknown filter field '{0}' (expected one of: name, size, created_at, stargazers_count, language)")]
    UnknownFilterField(String),

    /// Unknown fetch mode name.
    #[error("unknown fetch mode '{0}' (expected concurrent or sequential)")]
    UnknownFetchMode(String),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Invalid configuration values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized Result type for ghrepos-core operations.
pub type Result<T> = std::result::Result<T, Error>;
