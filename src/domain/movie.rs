//! Movie domain model.
//!
//! This module defines the records the controller holds: [`MovieSummary`] rows
//! returned by a title search, the lazily fetched [`MovieDetail`], and the
//! [`SearchPage`] / [`SearchFailure`] outcomes of a search request. These types are
//! independent of the directory's wire format (see `directory::models`).

use serde::{Deserialize, Serialize};

/// Sentinel the directory uses for "no value".
pub const NOT_AVAILABLE: &str = "N/A";

/// Poster reference of a title.
///
/// The directory reports a missing poster with the literal string `"N/A"`. The
/// controller keeps that distinction as [`Poster::Missing`]; choosing a placeholder
/// image is up to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Poster {
    /// Poster image URL.
    Url(String),
    /// No poster is available.
    Missing,
}

impl Poster {
    /// Returns the poster URL, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Missing => None,
        }
    }
}

impl From<String> for Poster {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
            Self::Missing
        } else {
            Self::Url(value)
        }
    }
}

impl From<Poster> for String {
    fn from(value: Poster) -> Self {
        match value {
            Poster::Url(url) => url,
            Poster::Missing => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Kind of title as reported by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
    Episode,
    Game,
    /// Any type string the directory adds later.
    Other(String),
}

impl From<&str> for MediaType {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "movie" => Self::Movie,
            "series" => Self::Series,
            "episode" => Self::Episode,
            "game" => Self::Game,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Movie => f.write_str("movie"),
            Self::Series => f.write_str("series"),
            Self::Episode => f.write_str("episode"),
            Self::Game => f.write_str("game"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

/// Minimal title record returned by a search request.
///
/// `year` stays a string: series report ranges such as `"2019–2021"` or an open
/// range `"2019–"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Opaque directory identifier (`imdbID`), unique per title and edition.
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster: Poster,
    pub media_type: MediaType,
}

impl MovieSummary {
    /// Returns the leading year of [`MovieSummary::year`], if it starts with digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use filmvilla::domain::{MediaType, MovieSummary, Poster};
    ///
    /// let summary = MovieSummary {
    ///     id: "tt7366338".to_string(),
    ///     title: "Chernobyl".to_string(),
    ///     year: "2019–2021".to_string(),
    ///     poster: Poster::Missing,
    ///     media_type: MediaType::Series,
    /// };
    /// assert_eq!(summary.release_year(), Some(2019));
    /// ```
    #[must_use]
    pub fn release_year(&self) -> Option<u32> {
        parse_leading_year(&self.year)
    }
}

/// Parses the leading run of ASCII digits of a year string.
///
/// Leading whitespace is skipped. Returns `None` when the string does not start
/// with a digit or the number does not fit in a `u32`.
#[must_use]
pub fn parse_leading_year(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Full record of a single title, fetched when a summary is selected.
///
/// Fields the directory reports as `"N/A"` are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub summary: MovieSummary,
    /// Content rating, e.g. `"PG"`.
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genres: Vec<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    /// Main cast as one comma separated string.
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub box_office: Option<String>,
    pub imdb_rating: Option<String>,
    pub imdb_votes: Option<String>,
    pub metascore: Option<String>,
}

impl MovieDetail {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.summary.title
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.summary.id
    }
}

/// One page of search results.
///
/// `total_results` counts matches across all pages and is independent of the
/// number of items on this page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub items: Vec<MovieSummary>,
    pub total_results: u32,
}

/// Why a search produced no result set.
///
/// Both kinds empty the held results; keeping them apart only changes what the
/// empty state says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchFailure {
    /// The directory answered with its failure discriminant.
    NoResults {
        /// Directory message, e.g. `"Movie not found!"`.
        message: String,
    },
    /// The request or its response could not be processed.
    Transport {
        message: String,
    },
}

impl SearchFailure {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NoResults { message } | Self::Transport { message } => message,
        }
    }
}

impl From<&crate::domain::FilmVillaError> for SearchFailure {
    fn from(err: &crate::domain::FilmVillaError) -> Self {
        match err {
            crate::domain::FilmVillaError::Directory(message) => Self::NoResults {
                message: message.clone(),
            },
            other => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_year_handles_ranges_and_garbage() {
        assert_eq!(parse_leading_year("1978"), Some(1978));
        assert_eq!(parse_leading_year("2019–2021"), Some(2019));
        assert_eq!(parse_leading_year("2019–"), Some(2019));
        assert_eq!(parse_leading_year(" 2001"), Some(2001));
        assert_eq!(parse_leading_year("N/A"), None);
        assert_eq!(parse_leading_year(""), None);
        assert_eq!(parse_leading_year("99999999999999"), None);
    }

    #[test]
    fn poster_sentinel_maps_to_missing() {
        assert_eq!(Poster::from("N/A".to_string()), Poster::Missing);
        assert_eq!(Poster::from(String::new()), Poster::Missing);
        assert_eq!(
            Poster::from("https://img/x.jpg".to_string()),
            Poster::Url("https://img/x.jpg".to_string())
        );
        assert_eq!(String::from(Poster::Missing), "N/A");
    }

    #[test]
    fn media_type_parses_known_and_unknown_kinds() {
        assert_eq!(MediaType::from("movie"), MediaType::Movie);
        assert_eq!(MediaType::from("Series"), MediaType::Series);
        assert_eq!(MediaType::from("podcast"), MediaType::Other("podcast".to_string()));
        assert_eq!(MediaType::Episode.to_string(), "episode");
    }

    #[test]
    fn failure_kind_follows_error_kind() {
        let no_results = crate::domain::FilmVillaError::Directory("Movie not found!".to_string());
        assert_eq!(
            SearchFailure::from(&no_results),
            SearchFailure::NoResults { message: "Movie not found!".to_string() }
        );

        let transport = crate::domain::FilmVillaError::Api {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert!(matches!(SearchFailure::from(&transport), SearchFailure::Transport { .. }));
    }
}
