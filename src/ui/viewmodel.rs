//! View model types representing renderable UI state.
//!
//! View models are computed from application state and contain only
//! display-ready data: labels are already worded, missing posters already
//! replaced, disabled controls already decided.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic.

/// Image shown for titles without a poster.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/400x600/e5e7eb/6b7280?text=No+Poster";

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title and tagline.
    pub header: HeaderInfo,

    /// Current query in the search box.
    pub search_bar: SearchBarInfo,

    /// Result count and sort mode; only present while cards are shown.
    pub toolbar: Option<ToolbarInfo>,

    /// What the result area shows.
    pub content: ContentView,

    /// Page controls; only present with cards and more than one page.
    pub pagination: Option<PaginationInfo>,

    /// Open detail overlay.
    pub detail: Option<DetailPanel>,

    /// Command hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub tagline: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command help text (e.g., "/<title>: search  q: quit").
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Line above the card grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarInfo {
    /// e.g. "25 results found".
    pub results_label: String,
    /// Human label of the active sort mode.
    pub sort_label: String,
}

/// Content of the result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    /// A search is outstanding; show this many skeleton cards.
    Loading { placeholders: usize },
    /// At least one result.
    Grid { cards: Vec<CardItem> },
    /// Nothing to show.
    Empty(EmptyState),
}

/// One result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    /// 1-based number used by the `o <n>` command.
    pub number: usize,
    pub title: String,
    pub year: String,
    /// Upper-cased media type, e.g. "MOVIE".
    pub media_type: String,
    /// Poster URL or [`PLACEHOLDER_POSTER`].
    pub poster_url: String,
}

/// Page controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: u32,
    pub total_pages: u32,
    /// `false` renders "Previous" disabled.
    pub has_previous: bool,
    /// `false` renders "Next" disabled.
    pub has_next: bool,
}

/// Labeled line in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFact {
    pub label: String,
    pub value: String,
}

/// Detail overlay for one title.
///
/// Fields the directory reported as unavailable are already absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub title: String,
    /// Year, runtime and rating joined with bullets.
    pub meta_line: String,
    pub genres: Vec<String>,
    /// IMDb rating out of 10.
    pub rating: Option<String>,
    pub plot: String,
    /// Director, cast, language and country, in that order, when known.
    pub facts: Vec<DetailFact>,
    pub box_office: Option<String>,
    pub poster_url: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No movies found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    /// The directory could not be reached, as opposed to finding nothing.
    pub is_error: bool,
}
