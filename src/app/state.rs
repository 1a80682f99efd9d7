//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single mutable view state owned by the
//! controller. Only the event handler mutates it; presentation reads it through
//! [`AppState::compute_viewmodel`].
//!
//! # State Components
//!
//! - **Query / page**: what the result area shows (or is loading)
//! - **Results**: the held page of summaries, ordered by the sort mode
//! - **Totals**: match count across all pages, from which the page count derives
//! - **Phase / loading**: where the result area is in its state machine
//! - **Selected detail**: optional overlay, independent of the result area
//!
//! # Example
//!
//! ```rust
//! use filmvilla::app::{AppState, SortMode};
//! use filmvilla::ui::Theme;
//!
//! let state = AppState::new("2025", SortMode::ByRecency, Some("batman".to_string()), Theme::default());
//! assert_eq!(state.page, 1);
//! assert_eq!(state.total_pages(), 0);
//! ```

use super::modes::{PageDelta, Phase, SortMode};
use crate::domain::{sort_summaries, MovieDetail, MovieSummary, SearchFailure, SearchPage};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, ContentView, DetailFact, DetailPanel, EmptyState, FooterInfo, HeaderInfo,
    PaginationInfo, SearchBarInfo, ToolbarInfo, UIViewModel, PLACEHOLDER_POSTER,
};
use crate::worker::DirectoryRequest;

/// Results per page, fixed by the directory's pagination contract.
pub const PAGE_SIZE: u32 = 10;

/// Number of skeleton cards shown while a search is loading.
const LOADING_PLACEHOLDERS: usize = 8;

/// Longest card title before it is cut with an ellipsis.
const CARD_TITLE_WIDTH: usize = 40;

/// Central view state container.
///
/// Mutated only by [`handle_event`](crate::app::handle_event). There is no
/// locking: the control loop processes one event at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Current search query.
    ///
    /// Set when a query is submitted; page changes reuse it.
    pub query: String,

    /// Current 1-based page. Only updated when a page actually arrives.
    pub page: u32,

    /// Comparator applied to `results`.
    pub sort_mode: SortMode,

    /// `true` from the moment a search is issued until a search completes.
    pub loading: bool,

    /// Phase of the result area.
    pub phase: Phase,

    /// Held page of results, ordered by `sort_mode`.
    pub results: Vec<MovieSummary>,

    /// Matches across all pages reported by the last successful search.
    pub total_results: u32,

    /// Detail currently open, if any.
    pub selected_detail: Option<MovieDetail>,

    /// Why the last completed search came back empty, if it failed.
    pub last_failure: Option<SearchFailure>,

    /// Term searched when paging while the query is empty. `None` makes paging
    /// an empty query a no-op.
    pub pagination_fallback: Option<String>,

    /// Whether the footer shows the full command list.
    pub show_help: bool,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Next request number to hand out.
    next_ticket: u64,
}

impl AppState {
    /// Creates the state for application start.
    ///
    /// The seed query becomes the current query at page 1; nothing is loaded until
    /// the first search is submitted.
    #[must_use]
    pub fn new(
        seed_query: impl Into<String>,
        sort_mode: SortMode,
        pagination_fallback: Option<String>,
        theme: Theme,
    ) -> Self {
        Self {
            query: seed_query.into(),
            page: 1,
            sort_mode,
            loading: false,
            phase: Phase::Idle,
            results: Vec::new(),
            total_results: 0,
            selected_detail: None,
            last_failure: None,
            pagination_fallback: pagination_fallback.filter(|term| !term.trim().is_empty()),
            show_help: false,
            theme,
            next_ticket: 1,
        }
    }

    /// Number of pages: `ceil(total_results / PAGE_SIZE)`.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_results.div_ceil(PAGE_SIZE)
    }

    fn take_ticket(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }

    /// Marks a search as outstanding and builds its request.
    ///
    /// Does not touch `query`, `page`, the held results or the selected detail.
    pub fn begin_search(&mut self, term: &str, page: u32) -> DirectoryRequest {
        let ticket = self.take_ticket();
        self.loading = true;
        self.phase = Phase::Loading;

        tracing::debug!(ticket, term = %term, page, "search issued");
        DirectoryRequest::search(ticket, term.to_string(), page)
    }

    /// Builds a detail request for `id`.
    pub fn begin_detail(&mut self, id: &str) -> DirectoryRequest {
        let ticket = self.take_ticket();
        tracing::debug!(ticket, id = %id, "detail requested");
        DirectoryRequest::detail(ticket, id.to_string())
    }

    /// Resolves a page change into the term and page to search.
    ///
    /// Returns `None` when the target page is outside `[1, total_pages]`, or when
    /// the query is empty and no fallback term is configured.
    #[must_use]
    pub fn page_target(&self, delta: PageDelta) -> Option<(String, u32)> {
        let target = delta.apply(self.page)?;
        if target < 1 || target > self.total_pages() {
            return None;
        }

        if self.query.is_empty() {
            let fallback = self.pagination_fallback.clone()?;
            return Some((fallback, target));
        }

        Some((self.query.clone(), target))
    }

    /// Replaces the held results with a freshly arrived page.
    pub fn apply_search_page(&mut self, page: u32, result: SearchPage) {
        let SearchPage { mut items, total_results } = result;
        sort_summaries(self.sort_mode, &mut items);

        self.results = items;
        self.total_results = total_results;
        self.page = page.max(1);
        self.loading = false;
        self.last_failure = None;
        self.phase = if self.results.is_empty() { Phase::Empty } else { Phase::Loaded };
    }

    /// Empties the result set after a failed search.
    pub fn apply_search_failure(&mut self, reason: SearchFailure) {
        self.results.clear();
        self.total_results = 0;
        self.loading = false;
        self.last_failure = Some(reason);
        self.phase = Phase::Empty;
    }

    /// Switches the sort mode and reorders the held results in place.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        sort_summaries(mode, &mut self.results);
    }

    /// Returns the summary shown on card `number` (1-based).
    #[must_use]
    pub fn summary_at(&self, number: usize) -> Option<&MovieSummary> {
        number.checked_sub(1).and_then(|index| self.results.get(index))
    }

    /// Computes a renderable view model from current state.
    ///
    /// Mirrors what the result area should show:
    /// - loading → skeleton cards, no toolbar, no pagination
    /// - results → toolbar, cards, pagination when there is more than one page
    /// - nothing → empty state, worded after `last_failure`
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let content = if self.loading {
            ContentView::Loading { placeholders: LOADING_PLACEHOLDERS }
        } else if self.results.is_empty() {
            ContentView::Empty(self.compute_empty_state())
        } else {
            ContentView::Grid {
                cards: self.results.iter().enumerate().map(|(i, m)| Self::compute_card(i + 1, m)).collect(),
            }
        };

        let showing_grid = matches!(content, ContentView::Grid { .. });

        let toolbar = showing_grid.then(|| ToolbarInfo {
            results_label: format!("{} results found", self.total_results),
            sort_label: self.sort_mode.label().to_string(),
        });

        let total_pages = self.total_pages();
        let pagination = (showing_grid && total_pages > 1).then(|| PaginationInfo {
            page: self.page,
            total_pages,
            has_previous: self.page > 1,
            has_next: self.page < total_pages,
        });

        UIViewModel {
            header: HeaderInfo {
                title: "Film Villa".to_string(),
                tagline: "Discover your next favorite movie".to_string(),
            },
            search_bar: SearchBarInfo { query: self.query.clone() },
            toolbar,
            content,
            pagination,
            detail: self.selected_detail.as_ref().map(Self::compute_detail_panel),
            footer: self.compute_footer(),
        }
    }

    fn compute_card(number: usize, movie: &MovieSummary) -> CardItem {
        let title = if movie.title.chars().count() > CARD_TITLE_WIDTH {
            let cut: String = movie.title.chars().take(CARD_TITLE_WIDTH - 3).collect();
            format!("{cut}...")
        } else {
            movie.title.clone()
        };

        CardItem {
            number,
            title,
            year: movie.year.clone(),
            media_type: movie.media_type.to_string().to_uppercase(),
            poster_url: poster_or_placeholder(movie.poster.url()),
        }
    }

    fn compute_detail_panel(detail: &MovieDetail) -> DetailPanel {
        let meta_line = [
            Some(detail.summary.year.as_str()).filter(|y| !y.is_empty()),
            detail.runtime.as_deref(),
            detail.rated.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" • ");

        let facts = [
            ("Director", &detail.director),
            ("Cast", &detail.actors),
            ("Language", &detail.language),
            ("Country", &detail.country),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value.as_ref().map(|v| DetailFact {
                label: label.to_string(),
                value: v.clone(),
            })
        })
        .collect();

        DetailPanel {
            title: detail.title().to_string(),
            meta_line,
            genres: detail.genres.clone(),
            rating: detail.imdb_rating.clone(),
            plot: detail.plot.clone().unwrap_or_default(),
            facts,
            box_office: detail.box_office.clone(),
            poster_url: poster_or_placeholder(detail.summary.poster.url()),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        match (&self.phase, &self.last_failure) {
            (Phase::Idle, _) => EmptyState {
                message: "Search for a movie to get started".to_string(),
                subtitle: "Type / followed by a title".to_string(),
                is_error: false,
            },
            (_, Some(SearchFailure::Transport { .. })) => EmptyState {
                message: "Could not reach the movie directory".to_string(),
                subtitle: "Check your connection and search again".to_string(),
                is_error: true,
            },
            _ => EmptyState {
                message: "No movies found".to_string(),
                subtitle: "Try searching for something else".to_string(),
                is_error: false,
            },
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.show_help {
            "/<title>: search  n/p: next/previous page  o <n>: open card  c: close  sort recency|title  ?: hide help  q: quit"
        } else if self.selected_detail.is_some() {
            "c: close details  o <n>: open another  q: quit"
        } else {
            "/<title>: search  n/p: page  o <n>: open  sort: toggle  ?: help  q: quit"
        };

        FooterInfo { keybindings: keybindings.to_string() }
    }
}

/// Substitutes the placeholder image for a missing poster.
fn poster_or_placeholder(url: Option<&str>) -> String {
    url.map_or_else(|| PLACEHOLDER_POSTER.to_string(), String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MediaType, Poster};

    fn summary(id: &str, title: &str, year: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            poster: Poster::Missing,
            media_type: MediaType::Movie,
        }
    }

    fn state() -> AppState {
        AppState::new("2025", SortMode::ByRecency, Some("batman".to_string()), Theme::default())
    }

    #[test]
    fn total_pages_rounds_up() {
        let mut state = state();
        for (total, pages) in [(0, 0), (1, 1), (10, 1), (11, 2), (23, 3), (25, 3), (30, 3)] {
            state.total_results = total;
            assert_eq!(state.total_pages(), pages, "total_results = {total}");
        }
    }

    #[test]
    fn tickets_increase_per_request() {
        let mut state = state();
        let first = state.begin_search("cat", 1);
        let second = state.begin_detail("tt1");
        assert!(second.ticket() > first.ticket());
    }

    #[test]
    fn page_target_respects_bounds_and_fallback() {
        let mut state = state();
        state.query = "batman".to_string();
        state.total_results = 25;
        state.page = 1;

        assert_eq!(state.page_target(PageDelta::Previous), None);
        assert_eq!(state.page_target(PageDelta::Next), Some(("batman".to_string(), 2)));

        state.page = 3;
        assert_eq!(state.page_target(PageDelta::Next), None);

        state.query.clear();
        assert_eq!(state.page_target(PageDelta::Previous), Some(("batman".to_string(), 2)));

        state.pagination_fallback = None;
        assert_eq!(state.page_target(PageDelta::Previous), None);
    }

    #[test]
    fn blank_fallback_counts_as_disabled() {
        let state = AppState::new("", SortMode::ByTitle, Some("  ".to_string()), Theme::default());
        assert!(state.pagination_fallback.is_none());
    }

    #[test]
    fn loaded_page_is_sorted_with_current_mode() {
        let mut state = state();
        state.sort_mode = SortMode::ByTitle;
        state.apply_search_page(
            2,
            SearchPage {
                items: vec![summary("1", "Zeta", "2001"), summary("2", "Alpha", "1999")],
                total_results: 12,
            },
        );

        assert_eq!(state.page, 2);
        assert_eq!(state.phase, Phase::Loaded);
        assert_eq!(state.results[0].title, "Alpha");
    }

    #[test]
    fn empty_successful_page_enters_empty_phase() {
        let mut state = state();
        state.apply_search_page(1, SearchPage::default());
        assert_eq!(state.phase, Phase::Empty);
        assert!(state.last_failure.is_none());
    }

    #[test]
    fn viewmodel_shows_skeleton_while_loading() {
        let mut state = state();
        let _ = state.begin_search("batman", 1);
        let vm = state.compute_viewmodel();
        assert!(matches!(vm.content, ContentView::Loading { placeholders: 8 }));
        assert!(vm.toolbar.is_none());
        assert!(vm.pagination.is_none());
    }

    #[test]
    fn viewmodel_grid_has_toolbar_and_pagination() {
        let mut state = state();
        state.apply_search_page(
            1,
            SearchPage {
                items: vec![summary("tt1", "Batman", "1989")],
                total_results: 25,
            },
        );
        let vm = state.compute_viewmodel();

        let ContentView::Grid { cards } = &vm.content else {
            panic!("expected grid, got {:?}", vm.content);
        };
        assert_eq!(cards[0].number, 1);
        assert_eq!(cards[0].poster_url, PLACEHOLDER_POSTER);
        assert_eq!(cards[0].media_type, "MOVIE");
        assert_eq!(vm.toolbar.as_ref().map(|t| t.results_label.as_str()), Some("25 results found"));

        let pagination = vm.pagination.expect("three pages");
        assert_eq!(pagination.total_pages, 3);
        assert!(!pagination.has_previous);
        assert!(pagination.has_next);
    }

    #[test]
    fn empty_state_wording_follows_failure_kind() {
        let mut state = state();
        assert_eq!(
            state.compute_empty_state().message,
            "Search for a movie to get started"
        );

        state.apply_search_failure(SearchFailure::NoResults { message: "Movie not found!".to_string() });
        assert_eq!(state.compute_empty_state().message, "No movies found");

        state.apply_search_failure(SearchFailure::Transport { message: "timeout".to_string() });
        assert_eq!(
            state.compute_empty_state().message,
            "Could not reach the movie directory"
        );
    }

    #[test]
    fn long_titles_are_cut_on_char_boundaries() {
        let title = "Ü".repeat(60);
        let card = AppState::compute_card(1, &summary("tt", &title, "2020"));
        assert_eq!(card.title.chars().count(), CARD_TITLE_WIDTH);
        assert!(card.title.ends_with("..."));
    }
}
