//! Result ordering for the held result set.
//!
//! Two comparators are defined, one per [`SortMode`]. Both are total, and
//! [`sort_summaries`] applies them with a stable sort so equal keys keep their
//! input order.

use super::movie::MovieSummary;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Active comparator applied to the held result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Newest first by leading year. Titles without a parsable year go last.
    #[default]
    #[serde(alias = "recency")]
    ByRecency,
    /// Alphabetical by title, ignoring accents and case.
    #[serde(alias = "title")]
    ByTitle,
}

impl SortMode {
    /// Label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ByRecency => "Latest First",
            Self::ByTitle => "Title (A-Z)",
        }
    }

    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::ByRecency => Self::ByTitle,
            Self::ByTitle => Self::ByRecency,
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = crate::domain::FilmVillaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recency" | "year" | "by-recency" | "latest" => Ok(Self::ByRecency),
            "title" | "by-title" | "alpha" => Ok(Self::ByTitle),
            other => Err(crate::domain::FilmVillaError::Config(format!(
                "unknown sort mode '{other}' (expected 'recency' or 'title')"
            ))),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByRecency => f.write_str("recency"),
            Self::ByTitle => f.write_str("title"),
        }
    }
}

/// Orders newer titles before older ones.
///
/// Unparsable years compare as the lowest possible value, so they end up after
/// every dated title. Two undated titles compare equal.
#[must_use]
pub fn compare_by_recency(a: &MovieSummary, b: &MovieSummary) -> Ordering {
    // Option orders None below Some, which is what "lowest" needs.
    b.release_year().cmp(&a.release_year())
}

/// Primary collation key: decomposed, combining marks dropped, lowercased.
fn base_letters(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Orders titles alphabetically.
///
/// Comparison runs in three levels, like a root-locale collator: base letters
/// first (so "Élite" sits between "Eden" and "Fargo"), then accents, then case.
/// The last level is the exact text, which keeps the order total.
#[must_use]
pub fn compare_by_title(a: &MovieSummary, b: &MovieSummary) -> Ordering {
    base_letters(&a.title)
        .cmp(&base_letters(&b.title))
        .then_with(|| {
            a.title
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.title.chars().flat_map(char::to_lowercase))
        })
        .then_with(|| a.title.cmp(&b.title))
}

/// Sorts summaries in place according to `mode`.
///
/// Uses a stable sort: summaries that compare equal keep their relative order.
pub fn sort_summaries(mode: SortMode, summaries: &mut [MovieSummary]) {
    let _span = tracing::trace_span!("sort_summaries", mode = %mode, count = summaries.len()).entered();

    match mode {
        SortMode::ByRecency => summaries.sort_by(compare_by_recency),
        SortMode::ByTitle => summaries.sort_by(compare_by_title),
    }
}
