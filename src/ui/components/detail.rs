//! Detail panel renderer.
//!
//! Draws the full record of one title inside a rounded frame. Lines the
//! directory had no data for are left out rather than shown as blanks.

use std::fmt::{self, Write};

use crate::ui::helpers::{fit, width, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailPanel;

const PANEL_MAX_WIDTH: usize = 76;
const PLOT_LINES: usize = 8;
const FACT_LINES: usize = 3;
const LABEL_WIDTH: usize = 11;

struct Frame<'a> {
    theme: &'a Theme,
    inner: usize,
}

impl Frame<'_> {
    fn edge(&self, piece: &str) -> String {
        super::paint(self.theme, &self.theme.colors.card_border, piece)
    }

    fn top(&self, title: &str) -> String {
        let title = fit(title, self.inner.saturating_sub(2)).trim_end().to_string();
        let dashes = self.inner.saturating_sub(width(&title) + 1);
        format!(
            "{}{}{}{}",
            self.edge("╭─ "),
            self.theme.bold(),
            super::paint(self.theme, &self.theme.colors.header_fg, &title),
            self.edge(&format!(" {}╮", "─".repeat(dashes)))
        )
    }

    fn bottom(&self) -> String {
        self.edge(&format!("╰{}╯", "─".repeat(self.inner + 2)))
    }

    /// `text` must be at most `inner` columns wide; it is padded here.
    fn line(&self, color: &str, text: &str) -> String {
        format!(
            "{} {} {}",
            self.edge("│"),
            super::paint(self.theme, color, &fit(text, self.inner)),
            self.edge("│")
        )
    }

    fn blank(&self) -> String {
        self.line("", "")
    }
}

/// Renders the detail panel.
///
/// Layout:
/// ```text
/// ╭─ Superman ──────────────────────────────╮
/// │ 1978 • 143 min • PG                     │
/// │ [Action] [Adventure] [Sci-Fi]           │
/// │ ★ 7.4/10                                │
/// │                                         │
/// │ An alien orphan is sent from his dying  │
/// │ planet to Earth...                      │
/// │                                         │
/// │ Director   Richard Donner               │
/// │ Cast       Christopher Reeve, ...       │
/// │ Box Office $134,478,449                 │
/// │ Poster     https://...                  │
/// ╰─────────────────────────────────────────╯
/// ```
pub fn render_detail<W: Write>(out: &mut W, panel: &DetailPanel, theme: &Theme, cols: usize) -> fmt::Result {
    let frame = Frame {
        theme,
        inner: cols.min(PANEL_MAX_WIDTH).saturating_sub(4).max(10),
    };
    let colors = &theme.colors;

    writeln!(out, "{}", frame.top(&panel.title))?;
    if !panel.meta_line.is_empty() {
        writeln!(out, "{}", frame.line(&colors.text_dim, &panel.meta_line))?;
    }
    if !panel.genres.is_empty() {
        let chips = panel.genres.iter().map(|g| format!("[{g}]")).collect::<Vec<_>>().join(" ");
        for line in wrap(&chips, frame.inner, 2) {
            writeln!(out, "{}", frame.line(&colors.genre_fg, &line))?;
        }
    }
    if let Some(rating) = &panel.rating {
        writeln!(out, "{}", frame.line(&colors.rating_fg, &format!("★ {rating}/10")))?;
    }

    if !panel.plot.is_empty() {
        writeln!(out, "{}", frame.blank())?;
        for line in wrap(&panel.plot, frame.inner, PLOT_LINES) {
            writeln!(out, "{}", frame.line(&colors.text_normal, &line))?;
        }
    }

    let mut facts: Vec<(&str, &str)> = panel.facts.iter().map(|f| (f.label.as_str(), f.value.as_str())).collect();
    if let Some(box_office) = &panel.box_office {
        facts.push(("Box Office", box_office.as_str()));
    }
    facts.push(("Poster", panel.poster_url.as_str()));

    writeln!(out, "{}", frame.blank())?;
    let value_width = frame.inner.saturating_sub(LABEL_WIDTH);
    for (label, value) in facts {
        for (i, line) in wrap(value, value_width, FACT_LINES).into_iter().enumerate() {
            let label = if i == 0 { label } else { "" };
            writeln!(out, "{}", frame.line(&colors.text_normal, &format!("{label:<LABEL_WIDTH$}{line}")))?;
        }
    }

    writeln!(out, "{}", frame.bottom())
}
