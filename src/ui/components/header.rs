//! Header component renderer.

use std::fmt::{self, Write};

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title in bold and the tagline beneath it.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// [left padding] tagline [right padding]
/// ```
///
/// Padding fills the full width so a header background spans the line.
pub fn render_header<W: Write>(out: &mut W, header: &HeaderInfo, theme: &Theme, cols: usize) -> fmt::Result {
    let background = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();

    writeln!(
        out,
        "{}{}{background}{}{}",
        theme.bold(),
        Theme::fg(&theme.colors.header_fg),
        center(&header.title, cols),
        theme.reset()
    )?;
    writeln!(out, "{}", super::paint(theme, &theme.colors.accent, &center(&header.tagline, cols)))
}
