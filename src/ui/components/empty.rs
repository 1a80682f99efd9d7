//! Empty state component renderer.

use std::fmt::{self, Write};

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message with blank space around it.
///
/// # Layout
///
/// ```text
/// [2 blank lines]
///         MESSAGE
///         subtitle
/// [2 blank lines]
/// ```
///
/// The message uses `error_fg` when the directory was unreachable and
/// `empty_state_fg` otherwise.
pub fn render_empty_state<W: Write>(out: &mut W, empty: &EmptyState, theme: &Theme, cols: usize) -> fmt::Result {
    let color = if empty.is_error { &theme.colors.error_fg } else { &theme.colors.empty_state_fg };

    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "{}{}", theme.bold(), super::paint(theme, color, &center(&empty.message, cols)))?;
    writeln!(
        out,
        "{}{}",
        theme.dim(),
        super::paint(theme, &theme.colors.text_dim, &center(&empty.subtitle, cols))
    )?;
    writeln!(out)?;
    writeln!(out)
}
