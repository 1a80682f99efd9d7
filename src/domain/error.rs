//! Error types for Film Villa.
//!
//! This module defines the centralized error type [`FilmVillaError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Directory failures never escape the controller: the worker classifies them into
//! [`SearchFailure`](crate::domain::SearchFailure) values before they reach state.
//! Only configuration, I/O and rendering problems surface to the binary.

use thiserror::Error;

/// The main error type for Film Villa operations.
///
/// # Examples
///
/// ```
/// use filmvilla::FilmVillaError;
///
/// fn validate_config() -> Result<(), FilmVillaError> {
///     Err(FilmVillaError::Config("api_key is missing".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum FilmVillaError {
    /// The HTTP request could not be sent or its body could not be read.
    ///
    /// Covers connection failures, timeouts and body decoding errors raised by
    /// `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The directory answered with a non-success HTTP status.
    #[error("Directory returned HTTP {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// A response body did not match the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The directory reported `"Response": "False"`.
    ///
    /// The string carries the directory's own `Error` message, for example
    /// `"Movie not found!"`.
    #[error("Directory error: {0}")]
    Directory(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A frame could not be formatted.
    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),
}

impl FilmVillaError {
    /// Returns `true` for errors raised by the directory itself rather than the
    /// transport between us and it.
    #[must_use]
    pub const fn is_directory_failure(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

impl From<toml::de::Error> for FilmVillaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// A specialized `Result` type for Film Villa operations.
pub type Result<T> = std::result::Result<T, FilmVillaError>;
