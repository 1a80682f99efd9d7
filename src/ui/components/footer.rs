//! Footer component renderer.

use std::fmt::{self, Write};

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the command hints centered and dimmed.
///
/// Hints wider than the terminal are truncated so they stay on one line.
pub fn render_footer<W: Write>(out: &mut W, footer: &FooterInfo, theme: &Theme, cols: usize) -> fmt::Result {
    writeln!(
        out,
        "{}{}",
        theme.dim(),
        super::paint(theme, &theme.colors.text_dim, &center(&footer.keybindings, cols))
    )
}
