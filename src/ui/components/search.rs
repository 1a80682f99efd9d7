//! Search box and results toolbar renderers.

use std::fmt::{self, Write};

use crate::ui::helpers::{fit, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, ToolbarInfo};

/// Horizontal margin on each side of the search box.
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders a bordered search box holding the current query.
///
/// Layout (3 lines):
/// ```text
///   ┌──────────────────────────┐
///   │ Search: batman           │
///   └──────────────────────────┘
/// ```
pub fn render_search_bar<W: Write>(out: &mut W, search: &SearchBarInfo, theme: &Theme, cols: usize) -> fmt::Result {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2).max(4);
    let inner_width = box_width - 2;
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = &theme.colors.search_bar_border;

    let text = fit(&format!(" Search: {}", search.query), inner_width);

    writeln!(out, "{margin}{}", super::paint(theme, border, &format!("┌{}┐", "─".repeat(inner_width))))?;
    writeln!(
        out,
        "{margin}{}{}{}",
        super::paint(theme, border, "│"),
        super::paint(theme, &theme.colors.text_normal, &text),
        super::paint(theme, border, "│")
    )?;
    writeln!(out, "{margin}{}", super::paint(theme, border, &format!("└{}┘", "─".repeat(inner_width))))
}

/// Renders the result count on the left and the sort mode on the right.
///
/// On terminals too narrow for both, the sort label moves to its own line.
pub fn render_toolbar<W: Write>(out: &mut W, toolbar: &ToolbarInfo, theme: &Theme, cols: usize) -> fmt::Result {
    let left = format!(" {}", toolbar.results_label);
    let right = format!("Sort: {} ", toolbar.sort_label);
    let gap = cols.saturating_sub(width(&left) + width(&right));

    let count = super::paint(theme, &theme.colors.text_dim, &left);
    let sort = super::paint(theme, &theme.colors.accent, &right);

    if gap == 0 {
        writeln!(out, "{count}")?;
        return writeln!(out, " {sort}");
    }
    writeln!(out, "{count}{}{sort}", " ".repeat(gap))
}
