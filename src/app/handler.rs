//! Event handling and state transition logic.
//!
//! This module implements the controller: it processes user intents and
//! directory completions, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the input reader or the directory worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Search**: `Submit`, `GotoPage`, `SetSortMode`
//! - **Detail**: `SelectItem`, `SelectIndex`, `CloseDetail`
//! - **Shell**: `Help`, `Quit`
//! - **Worker**: `DirectoryResponse` with typed completion variants
//!
//! # Concurrency
//!
//! Every search is dispatched without cancelling earlier ones. Completions are
//! applied in the order they are processed, so the last search to complete owns
//! the result area even if it was issued first.
//!
//! # Example
//!
//! ```rust
//! use filmvilla::app::{handle_event, Action, AppState, Event, SortMode};
//! use filmvilla::ui::Theme;
//!
//! let mut state = AppState::new("2025", SortMode::ByRecency, None, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Submit { query: "batman".to_string() })?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Dispatch(_)]));
//! # Ok::<(), filmvilla::FilmVillaError>(())
//! ```

use super::modes::{PageDelta, SortMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::DirectoryResponse;

/// Events triggered by user input or directory completions.
///
/// The control loop processes these one at a time, so transitions are
/// deterministic for a given event order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Searches `query` from page 1.
    ///
    /// The query is sent as typed; an empty query is still searched.
    Submit {
        query: String,
    },
    /// Moves one page back or forward within `[1, total_pages]`.
    GotoPage(PageDelta),
    /// Reorders the held results.
    SetSortMode(SortMode),
    /// Opens the detail for a title id.
    SelectItem {
        id: String,
    },
    /// Opens the detail for the card with this 1-based number.
    SelectIndex(usize),
    /// Hides the detail overlay.
    CloseDetail,
    /// Toggles the full command list.
    Help,
    /// Stops the application.
    Quit,

    /// Wraps a completion from the directory worker.
    DirectoryResponse(DirectoryResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// Whether the view must be redrawn, and the actions to execute in order. The
/// action list is empty when the event has no side effects (e.g. a page change
/// past the last page).
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for callers
/// that propagate with `?`.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Submit { query } => {
            tracing::debug!(query = %query, "query submitted");
            state.query.clone_from(query);
            let request = state.begin_search(query, 1);
            Ok((true, vec![Action::Dispatch(request)]))
        }
        Event::GotoPage(delta) => {
            let Some((term, page)) = state.page_target(*delta) else {
                tracing::debug!(
                    page = state.page,
                    total_pages = state.total_pages(),
                    delta = ?delta,
                    "page change ignored"
                );
                return Ok((false, vec![]));
            };

            let request = state.begin_search(&term, page);
            Ok((true, vec![Action::Dispatch(request)]))
        }
        Event::SetSortMode(mode) => {
            if state.sort_mode == *mode {
                return Ok((false, vec![]));
            }
            tracing::debug!(from = %state.sort_mode, to = %mode, "sort mode changed");
            state.set_sort_mode(*mode);
            Ok((true, vec![]))
        }
        Event::SelectItem { id } => {
            let request = state.begin_detail(id);
            Ok((false, vec![Action::Dispatch(request)]))
        }
        Event::SelectIndex(number) => {
            let Some(id) = state.summary_at(*number).map(|m| m.id.clone()) else {
                tracing::debug!(number, shown = state.results.len(), "no card with that number");
                return Ok((false, vec![]));
            };
            let request = state.begin_detail(&id);
            Ok((false, vec![Action::Dispatch(request)]))
        }
        Event::CloseDetail => Ok((state.selected_detail.take().is_some(), vec![])),
        Event::Help => {
            state.show_help = !state.show_help;
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::DirectoryResponse(response) => match response {
            DirectoryResponse::SearchLoaded { ticket, query, page, result } => {
                tracing::debug!(
                    ticket,
                    query = %query,
                    page,
                    items = result.items.len(),
                    total_results = result.total_results,
                    "search completed"
                );
                state.apply_search_page(*page, result.clone());
                Ok((true, vec![]))
            }
            DirectoryResponse::SearchFailed { ticket, query, reason, .. } => {
                tracing::debug!(ticket, query = %query, reason = %reason.message(), "search came back empty");
                state.apply_search_failure(reason.clone());
                Ok((true, vec![]))
            }
            DirectoryResponse::DetailLoaded { ticket, detail } => {
                tracing::debug!(ticket, id = %detail.id(), "detail opened");
                state.selected_detail = Some(detail.clone());
                Ok((true, vec![]))
            }
            DirectoryResponse::DetailFailed { ticket, id, message } => {
                tracing::warn!(ticket, id = %id, error = %message, "detail unavailable");
                Ok((false, vec![]))
            }
        },
    }
}
