//! Pagination control renderer.

use std::fmt::{self, Write};

use crate::ui::helpers::width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

const PREVIOUS: &str = "‹ Previous (p)";
const NEXT: &str = "(n) Next ›";
const SPACING: usize = 4;

/// Renders `‹ Previous   Page X of Y   Next ›`, centered.
///
/// A control that would leave `[1, total_pages]` is drawn in the disabled
/// color.
pub fn render_pagination<W: Write>(out: &mut W, pagination: &PaginationInfo, theme: &Theme, cols: usize) -> fmt::Result {
    let indicator = format!("Page {} of {}", pagination.page, pagination.total_pages);
    let total = width(PREVIOUS) + width(&indicator) + width(NEXT) + SPACING * 2;
    let left = cols.saturating_sub(total) / 2;

    let control = |label: &str, enabled: bool| {
        if enabled {
            super::paint(theme, &theme.colors.accent, label)
        } else {
            format!("{}{}", theme.dim(), super::paint(theme, &theme.colors.disabled_fg, label))
        }
    };
    let spacing = " ".repeat(SPACING);

    writeln!(out)?;
    writeln!(
        out,
        "{}{}{spacing}{}{spacing}{}",
        " ".repeat(left),
        control(PREVIOUS, pagination.has_previous),
        super::paint(theme, &theme.colors.text_normal, &indicator),
        control(NEXT, pagination.has_next)
    )
}
