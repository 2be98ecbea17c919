//! # ghrepos-core
//!
//! Core library for browsing a GitHub user's public repositories.
//!
//! A search fetches the user's profile and repository list, sorts the
//! repositories newest first and exposes a filtered, paginated view of them.
//!
//! ## Architecture
//!
//! - [`form`] - username input and submission
//! - [`panel`] - panel state machine, fetch execution and driver
//! - [`view`] - filtering and pagination derived per render
//! - [`github`] - GitHub REST client and payload types
//! - [`render`] - plain-text rendering of the panel
//! - [`config`] - configuration types and loading
//! - [`error`] - error types for the library
//!
//! ## Example
//!
//! ```rust,ignore
//! use ghrepos_core::{AppConfig, PanelDriver, panel::Action, render};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ghrepos_core::Error> {
//!     let config = AppConfig::load()?;
//!     let mut driver = PanelDriver::from_config(&config)?;
//!     driver.dispatch(Action::Search { username: "octocat".into() });
//!     driver.settle().await;
//!     print!("{}", render::render(driver.state()));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod github;
pub mod panel;
pub mod render;
pub mod view;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use form::SearchForm;
pub use panel::{PanelDriver, PanelState, Phase};
