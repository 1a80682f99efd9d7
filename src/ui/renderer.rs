//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Frames are built as a `String` so the binary can write them in one call and
//! tests can inspect them.
//!
//! # Example
//!
//! ```rust
//! use filmvilla::app::{AppState, SortMode};
//! use filmvilla::ui::{render, Theme};
//!
//! let state = AppState::new("2025", SortMode::ByRecency, None, Theme::plain());
//! let frame = render(&state, 80)?;
//! assert!(frame.contains("Film Villa"));
//! # Ok::<(), filmvilla::FilmVillaError>(())
//! ```

use std::fmt::{self, Write};

use crate::app::AppState;
use crate::domain::error::Result;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the whole screen for `state` at `cols` columns.
///
/// # Errors
///
/// Returns [`FilmVillaError::Render`](crate::FilmVillaError::Render) if a
/// component fails to format.
#[tracing::instrument(level = "trace", skip(state))]
pub fn render(state: &AppState, cols: usize) -> Result<String> {
    let viewmodel = state.compute_viewmodel();

    let mut frame = String::new();
    render_viewmodel(&mut frame, &viewmodel, &state.theme, cols)?;
    Ok(frame)
}

/// Renders a view model with mode-specific layout.
///
/// An open detail replaces the result area; otherwise the result view is drawn.
fn render_viewmodel<W: Write>(out: &mut W, vm: &UIViewModel, theme: &Theme, cols: usize) -> fmt::Result {
    if let Some(panel) = &vm.detail {
        return components::render_detail_mode(out, vm, panel, theme, cols);
    }

    components::render_results_mode(out, vm, theme, cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SortMode;
    use crate::domain::{MediaType, MovieDetail, MovieSummary, Poster, SearchFailure, SearchPage};
    use crate::ui::viewmodel::PLACEHOLDER_POSTER;

    fn state() -> AppState {
        AppState::new("batman", SortMode::ByRecency, None, Theme::plain())
    }

    fn summary(id: &str, title: &str, year: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            poster: Poster::Missing,
            media_type: MediaType::Movie,
        }
    }

    #[test]
    fn loaded_page_shows_cards_and_pagination() {
        let mut state = state();
        state.apply_search_page(
            1,
            SearchPage {
                items: vec![summary("tt0372784", "Batman Begins", "2005"), summary("tt0096895", "Batman", "1989")],
                total_results: 25,
            },
        );

        let frame = render(&state, 80).unwrap();
        assert!(frame.contains("Film Villa"));
        assert!(frame.contains("Discover your next favorite movie"));
        assert!(frame.contains("Search: batman"));
        assert!(frame.contains("25 results found"));
        assert!(frame.contains("Sort: Latest First"));
        assert!(frame.contains("Batman Begins"));
        assert!(frame.contains("#2"));
        assert!(frame.contains("Page 1 of 3"));
        assert!(!frame.contains('\u{1b}'));
    }

    #[test]
    fn single_page_has_no_pagination() {
        let mut state = state();
        state.apply_search_page(1, SearchPage { items: vec![summary("tt1", "Batman", "1989")], total_results: 4 });

        let frame = render(&state, 80).unwrap();
        assert!(!frame.contains("Page 1 of 1"));
    }

    #[test]
    fn loading_shows_skeleton_only() {
        let mut state = state();
        let _ = state.begin_search("batman", 1);

        let frame = render(&state, 80).unwrap();
        assert!(frame.contains('░'));
        assert!(!frame.contains("results found"));
    }

    #[test]
    fn failed_search_shows_empty_state() {
        let mut state = state();
        state.apply_search_failure(SearchFailure::NoResults { message: "Movie not found!".to_string() });

        let frame = render(&state, 80).unwrap();
        assert!(frame.contains("No movies found"));
        assert!(frame.contains("Try searching for something else"));
    }

    #[test]
    fn open_detail_replaces_results() {
        let mut state = state();
        state.apply_search_page(1, SearchPage { items: vec![summary("tt1", "Batman", "1989")], total_results: 1 });
        state.selected_detail = Some(MovieDetail {
            summary: summary("tt0078346", "Superman", "1978"),
            rated: Some("PG".to_string()),
            released: None,
            runtime: Some("143 min".to_string()),
            genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
            director: Some("Richard Donner".to_string()),
            writer: None,
            actors: None,
            plot: Some("An alien orphan is sent from his dying planet to Earth.".to_string()),
            language: None,
            country: None,
            awards: None,
            box_office: Some("$134,478,449".to_string()),
            imdb_rating: None,
            imdb_votes: None,
            metascore: None,
        });

        let frame = render(&state, 80).unwrap();
        assert!(frame.contains("Superman"));
        assert!(frame.contains("1978 • 143 min • PG"));
        assert!(frame.contains("[Action] [Sci-Fi]"));
        assert!(frame.contains("Richard Donner"));
        assert!(frame.contains("$134,478,449"));
        assert!(!frame.contains('★'));
        assert!(!frame.contains("Cast"));
        assert!(!frame.contains("#1"));
        assert!(frame.contains(&PLACEHOLDER_POSTER[..20]));
    }
}
