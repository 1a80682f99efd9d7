//! Wire records of the movie directory.
//!
//! These types mirror the directory's JSON documents field for field. They are
//! separate from the domain models so the quirks of the wire format (string
//! encoded counts, `"True"`/`"False"` discriminants, `"N/A"` placeholders) stay
//! in this module.

use crate::domain::{
    FilmVillaError, MediaType, MovieDetail, MovieSummary, Poster, Result, SearchPage, NOT_AVAILABLE,
};
use serde::Deserialize;

/// Value of the `Response` field on success.
const RESPONSE_TRUE: &str = "True";

/// Message used when a failed response carries no `Error` field.
const UNKNOWN_ERROR: &str = "Unknown directory error";

/// Envelope returned by a title search (`?s=...&page=...`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchEnvelope {
    pub response: String,
    #[serde(default)]
    pub search: Vec<SummaryRecord>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One entry of the `Search` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryRecord {
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(default)]
    pub poster: Option<String>,
}

/// Document returned by a lookup (`?i=...&plot=full`).
///
/// Every field is optional on the wire because a failed lookup only carries
/// `Response` and `Error`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetailRecord {
    pub response: String,
    pub error: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub poster: Option<String>,
    pub metascore: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub box_office: Option<String>,
}

/// Drops the directory's `"N/A"` placeholder and blank values.
fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != NOT_AVAILABLE
    })
}

fn directory_failure(error: Option<String>) -> FilmVillaError {
    FilmVillaError::Directory(error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
}

impl From<SummaryRecord> for MovieSummary {
    fn from(record: SummaryRecord) -> Self {
        Self {
            id: record.imdb_id,
            title: record.title,
            year: record.year,
            poster: Poster::from(record.poster.unwrap_or_default()),
            media_type: MediaType::from(record.kind.as_str()),
        }
    }
}

impl SearchEnvelope {
    /// Classifies the envelope into a search page.
    ///
    /// An unparsable `totalResults` counts as zero.
    ///
    /// # Errors
    ///
    /// Returns [`FilmVillaError::Directory`] when `Response` is not `"True"`.
    pub fn into_search_page(self) -> Result<SearchPage> {
        if self.response != RESPONSE_TRUE {
            return Err(directory_failure(self.error));
        }

        let total_results = self
            .total_results
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);

        Ok(SearchPage {
            items: self.search.into_iter().map(MovieSummary::from).collect(),
            total_results,
        })
    }
}

impl DetailRecord {
    /// Classifies the record into a movie detail.
    ///
    /// # Errors
    ///
    /// Returns [`FilmVillaError::Directory`] when `Response` is not `"True"`.
    pub fn into_detail(self) -> Result<MovieDetail> {
        if self.response != RESPONSE_TRUE {
            return Err(directory_failure(self.error));
        }

        let genres = available(self.genre)
            .map(|genre| {
                genre
                    .split(", ")
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(MovieDetail {
            summary: MovieSummary {
                id: self.imdb_id.unwrap_or_default(),
                title: self.title.unwrap_or_default(),
                year: self.year.unwrap_or_default(),
                poster: Poster::from(self.poster.unwrap_or_default()),
                media_type: MediaType::from(self.kind.as_deref().unwrap_or_default()),
            },
            rated: available(self.rated),
            released: available(self.released),
            runtime: available(self.runtime),
            genres,
            director: available(self.director),
            writer: available(self.writer),
            actors: available(self.actors),
            plot: available(self.plot),
            language: available(self.language),
            country: available(self.country),
            awards: available(self.awards),
            box_office: available(self.box_office),
            imdb_rating: available(self.imdb_rating),
            imdb_votes: available(self.imdb_votes),
            metascore: available(self.metascore),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_OK: &str = r#"{
        "Search": [
            {"Title": "Superman", "Year": "1978", "imdbID": "tt0078346", "Type": "movie", "Poster": "N/A"},
            {"Title": "Superman & Lois", "Year": "2021–2024", "imdbID": "tt11192306", "Type": "series",
             "Poster": "https://m.media-amazon.com/images/M/lois.jpg"}
        ],
        "totalResults": "23",
        "Response": "True"
    }"#;

    #[test]
    fn search_envelope_converts_summaries() {
        let envelope: SearchEnvelope = serde_json::from_str(SEARCH_OK).expect("valid json");
        let page = envelope.into_search_page().expect("successful page");

        assert_eq!(page.total_results, 23);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "tt0078346");
        assert_eq!(page.items[0].poster, Poster::Missing);
        assert_eq!(page.items[1].media_type, MediaType::Series);
        assert_eq!(
            page.items[1].poster.url(),
            Some("https://m.media-amazon.com/images/M/lois.jpg")
        );
    }

    #[test]
    fn failed_search_carries_directory_message() {
        let envelope: SearchEnvelope =
            serde_json::from_str(r#"{"Response":"False","Error":"Movie not found!"}"#)
                .expect("valid json");
        let err = envelope.into_search_page().expect_err("failure discriminant");
        assert!(err.is_directory_failure());
        assert_eq!(err.to_string(), "Directory error: Movie not found!");
    }

    #[test]
    fn garbage_total_counts_as_zero() {
        let envelope: SearchEnvelope =
            serde_json::from_str(r#"{"Response":"True","Search":[],"totalResults":"many"}"#)
                .expect("valid json");
        assert_eq!(envelope.into_search_page().expect("page").total_results, 0);
    }

    #[test]
    fn detail_record_drops_placeholders_and_splits_genres() {
        let record: DetailRecord = serde_json::from_str(
            r#"{
                "Title": "Superman", "Year": "1978", "Rated": "PG", "Runtime": "143 min",
                "Genre": "Action, Adventure, Sci-Fi", "Director": "Richard Donner",
                "Actors": "Christopher Reeve, Margot Kidder", "Plot": "An alien orphan...",
                "Language": "English", "Country": "United States, United Kingdom",
                "Poster": "N/A", "imdbRating": "7.4", "imdbID": "tt0078346",
                "Type": "movie", "BoxOffice": "N/A", "Response": "True"
            }"#,
        )
        .expect("valid json");

        let detail = record.into_detail().expect("detail");
        assert_eq!(detail.title(), "Superman");
        assert_eq!(detail.id(), "tt0078346");
        assert_eq!(detail.genres, ["Action", "Adventure", "Sci-Fi"]);
        assert_eq!(detail.box_office, None);
        assert_eq!(detail.writer, None);
        assert_eq!(detail.imdb_rating.as_deref(), Some("7.4"));
        assert_eq!(detail.summary.poster, Poster::Missing);
    }

    #[test]
    fn failed_lookup_is_a_directory_failure() {
        let record: DetailRecord =
            serde_json::from_str(r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#)
                .expect("valid json");
        assert!(record.into_detail().expect_err("failure").is_directory_failure());
    }
}
