//! Film Villa: a terminal movie finder over an OMDb-style directory.
//!
//! Film Villa provides:
//! - Title search against a remote movie directory, ten results per page
//! - Page-by-page navigation within the reported result count
//! - Client-side ordering of the held page (newest first, or A-Z)
//! - A detail view with the full record of one title
//! - Asynchronous directory requests that never block input or rendering

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Runtime (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Directory     │   │ Worker Layer  │
//! │ (ui/)         │   │ (directory/)  │   │ (worker/)     │
//! │ - Rendering   │   │ - HTTP client │   │ - Task spawn  │
//! │ - Theming     │   │ - Wire models │   │ - Responses   │
//! │ - Components  │   │ - Trait seam  │   │ - Trace link  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Core types
//! │  - Error types (domain/error)                       │
//! │  - Movie model (domain/movie)                       │
//! │  - Result ordering (domain/ordering)                │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`directory`]: Movie directory trait and its OMDb HTTP client
//! - [`domain`]: Core domain types (movies, ordering, errors)
//! - [`infrastructure`]: Platform paths (config and data directories)
//! - [`worker`]: Background tasks running directory requests
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: Tracing subscriber and OTLP file export
//!
//! # Configuration
//!
//! Settings come from `~/.config/filmvilla/config.toml` (platform config
//! directory), then CLI flags and environment override them:
//!
//! ```toml
//! api_key = "abc123"
//! seed_query = "2025"
//! pagination_fallback = "batman"   # "" disables paging an empty query
//! sort = "recency"                 # or "title"
//! request_timeout_secs = 15
//! theme = "villa-night"
//! trace_level = "info"
//! ```
//!
//! # Example
//!
//! ```rust
//! use filmvilla::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::Submit { query: "batman".to_string() })?;
//! for action in actions {
//!     match action {
//!         Action::Dispatch(request) => { /* hand to DirectoryWorker::dispatch */ }
//!         Action::Quit => break,
//!     }
//! }
//! # Ok::<(), filmvilla::FilmVillaError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Last Completion Wins
//!
//! Searches are never cancelled. When two overlap, whichever completion the
//! control loop processes last determines the result area. Tickets on each
//! request exist for log correlation only.
//!
//! ## Immutable View Models
//!
//! Rendering reads a view model computed from state; it never mutates state and
//! is where the missing-poster placeholder is substituted.

pub mod app;
pub mod directory;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

use std::path::Path;

use serde::Deserialize;

pub use app::{handle_event, Action, AppState, Event, PageDelta, Phase, SortMode};
pub use domain::{FilmVillaError, Result};
pub use ui::Theme;

/// Default directory endpoint.
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Application configuration.
///
/// Deserialized from TOML; every key is optional and falls back to the value in
/// [`Config::default`].
///
/// # Example
///
/// ```toml
/// api_key = "abc123"
/// sort = "title"
/// theme = "villa-day"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key sent as the `apikey` query parameter. Required to reach the directory.
    pub api_key: Option<String>,

    /// Directory endpoint. Default: `http://www.omdbapi.com/`
    pub base_url: String,

    /// Query searched on start. Default: `"2025"`
    pub seed_query: String,

    /// Term searched when paging while the query is empty.
    ///
    /// An empty string disables the substitution, making such page changes
    /// no-ops. Default: `"batman"`
    pub pagination_fallback: String,

    /// Initial sort mode. Default: recency
    pub sort: SortMode,

    /// Per-request HTTP timeout in seconds. Default: 15
    pub request_timeout_secs: u64,

    /// Built-in theme name to use.
    ///
    /// Options: `villa-night`, `villa-day`, `plain`. Ignored if `theme_file`
    /// is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            seed_query: "2025".to_string(),
            pagination_fallback: "batman".to_string(),
            sort: SortMode::default(),
            request_timeout_secs: 15,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`FilmVillaError::Config`] on invalid TOML or mistyped values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use filmvilla::{Config, SortMode};
    ///
    /// let config = Config::from_toml_str("sort = \"title\"\nseed_query = \"superman\"")?;
    /// assert_eq!(config.sort, SortMode::ByTitle);
    /// assert_eq!(config.seed_query, "superman");
    /// assert_eq!(config.request_timeout_secs, 15);
    /// # Ok::<(), filmvilla::FilmVillaError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FilmVillaError::Io`] if the file cannot be read and
    /// [`FilmVillaError::Config`] if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Loads configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. The default location is optional; when it
    /// is absent, defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Config::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }

        match infrastructure::config_file() {
            Some(default_path) if default_path.is_file() => {
                tracing::debug!(path = %default_path.display(), "loading configuration");
                Self::from_file(default_path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// The pagination fallback term, or `None` when disabled.
    #[must_use]
    pub fn fallback_term(&self) -> Option<String> {
        let term = self.pagination_fallback.trim();
        (!term.is_empty()).then(|| term.to_string())
    }

    /// Resolves the configured theme.
    ///
    /// Falls back to the default theme when the file or name cannot be loaded.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Builds the start-up state from configuration.
///
/// The seed query becomes the current query at page 1. No request is issued;
/// the caller submits the seed query to load the first page.
///
/// # Example
///
/// ```rust
/// use filmvilla::{initialize, Config, Phase};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.query, "2025");
/// assert_eq!(state.page, 1);
/// assert_eq!(state.phase, Phase::Idle);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(seed_query = %config.seed_query, sort = %config.sort, "initializing film villa");

    AppState::new(
        config.seed_query.clone(),
        config.sort,
        config.fallback_term(),
        config.resolve_theme(),
    )
}
