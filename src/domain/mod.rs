//! Domain layer for Film Villa.
//!
//! This module contains the core domain types, independent of the HTTP directory
//! and of rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Summary, detail and search outcome records
//! - [`ordering`]: Sort modes and result comparators

pub mod error;
pub mod movie;
pub mod ordering;

pub use error::{FilmVillaError, Result};
pub use movie::{
    parse_leading_year, MediaType, MovieDetail, MovieSummary, Poster, SearchFailure, SearchPage,
    NOT_AVAILABLE,
};
pub use ordering::{compare_by_recency, compare_by_title, sort_summaries, SortMode};
