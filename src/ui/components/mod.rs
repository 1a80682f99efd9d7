//! Composable UI component renderers.
//!
//! Each component writes complete, newline-terminated lines into a
//! [`std::fmt::Write`] sink. Widths are computed on the unstyled text before
//! escape sequences are added, so colored output lines up with plain output.
//!
//! # Components
//!
//! - [`header`]: Title and tagline
//! - [`search`]: Search box and the results toolbar
//! - [`grid`]: Result cards and loading skeletons
//! - [`pagination`]: Previous / page indicator / next
//! - [`detail`]: Detail panel for one title
//! - [`empty`]: Empty state message
//! - [`footer`]: Command hints
//!
//! # Layout Modes
//!
//! - [`render_results_mode`]: Header + Search + Toolbar + Content + Pagination + Footer
//! - [`render_detail_mode`]: Header + Detail + Footer

mod detail;
mod empty;
mod footer;
mod grid;
mod header;
mod pagination;
mod search;

use std::fmt::{self, Write};

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ContentView, DetailPanel, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use grid::{render_cards, render_skeleton};
use header::render_header;
use pagination::render_pagination;
use search::{render_search_bar, render_toolbar};

/// Wraps `text` in a foreground color and reset.
fn paint(theme: &Theme, color: &str, text: &str) -> String {
    let fg = Theme::fg(color);
    if fg.is_empty() {
        return text.to_string();
    }
    format!("{fg}{text}{}", theme.reset())
}

/// Writes a full-width horizontal rule.
fn render_border<W: Write>(out: &mut W, theme: &Theme, cols: usize) -> fmt::Result {
    writeln!(out, "{}", paint(theme, &theme.colors.border, &"─".repeat(cols)))
}

/// Renders the result view.
///
/// Layout structure:
/// ```text
/// [Header]
/// [Search Bar - 3 lines]
/// [Toolbar]            only with cards
/// [Border]
/// [Cards | Skeleton | Empty state]
/// [Pagination]         only with more than one page
/// [Border]
/// [Footer]
/// ```
pub fn render_results_mode<W: Write>(out: &mut W, vm: &UIViewModel, theme: &Theme, cols: usize) -> fmt::Result {
    render_header(out, &vm.header, theme, cols)?;
    render_search_bar(out, &vm.search_bar, theme, cols)?;
    if let Some(toolbar) = &vm.toolbar {
        render_toolbar(out, toolbar, theme, cols)?;
    }
    render_border(out, theme, cols)?;

    match &vm.content {
        ContentView::Loading { placeholders } => render_skeleton(out, *placeholders, theme, cols)?,
        ContentView::Grid { cards } => render_cards(out, cards, theme, cols)?,
        ContentView::Empty(empty) => render_empty_state(out, empty, theme, cols)?,
    }

    if let Some(pagination) = &vm.pagination {
        render_pagination(out, pagination, theme, cols)?;
    }

    render_border(out, theme, cols)?;
    render_footer(out, &vm.footer, theme, cols)
}

/// Renders the detail overlay in place of the result area.
pub fn render_detail_mode<W: Write>(
    out: &mut W,
    vm: &UIViewModel,
    panel: &DetailPanel,
    theme: &Theme,
    cols: usize,
) -> fmt::Result {
    render_header(out, &vm.header, theme, cols)?;
    render_border(out, theme, cols)?;
    render_detail(out, panel, theme, cols)?;
    render_border(out, theme, cols)?;
    render_footer(out, &vm.footer, theme, cols)
}
