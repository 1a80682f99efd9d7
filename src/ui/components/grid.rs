//! Result card grid and loading skeleton renderers.
//!
//! Cards are fixed-width boxes laid out in rows. The column count follows the
//! terminal width, from one column on narrow terminals up to four.

use std::fmt::{self, Write};

use crate::ui::helpers::{fit, width, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Outer width of one card, borders included.
const CARD_WIDTH: usize = 30;

/// Space between two cards on the same row.
const CARD_GAP: usize = 2;

const MAX_COLUMNS: usize = 4;

/// Text width inside a card: border and one space of padding on each side.
const INNER_WIDTH: usize = CARD_WIDTH - 4;

/// Title lines per card; longer titles end with an ellipsis.
const TITLE_LINES: usize = 2;

/// Number of card columns that fit in `cols`.
fn columns(cols: usize) -> usize {
    ((cols + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).clamp(1, MAX_COLUMNS)
}

fn card_top(theme: &Theme) -> String {
    super::paint(theme, &theme.colors.card_border, &format!("╭{}╮", "─".repeat(CARD_WIDTH - 2)))
}

fn card_bottom(theme: &Theme) -> String {
    super::paint(theme, &theme.colors.card_border, &format!("╰{}╯", "─".repeat(CARD_WIDTH - 2)))
}

/// Frames `body`, which must already be exactly `INNER_WIDTH` columns wide once
/// escape sequences are ignored.
fn card_line(theme: &Theme, body: &str) -> String {
    let edge = super::paint(theme, &theme.colors.card_border, "│");
    format!("{edge} {body} {edge}")
}

fn card_lines(card: &CardItem, theme: &Theme) -> Vec<String> {
    let number = format!("#{}", card.number);
    let badge_width = INNER_WIDTH.saturating_sub(width(&number) + 1);
    let badge = format!("{:>badge_width$}", fit(&card.media_type, badge_width).trim_end());

    let mut title = wrap(&card.title, INNER_WIDTH, TITLE_LINES);
    title.resize(TITLE_LINES, String::new());

    let mut lines = vec![
        card_top(theme),
        card_line(
            theme,
            &format!(
                "{} {}",
                super::paint(theme, &theme.colors.accent, &number),
                super::paint(theme, &theme.colors.badge_fg, &badge)
            ),
        ),
    ];
    for line in &title {
        lines.push(card_line(
            theme,
            &format!("{}{}", theme.bold(), super::paint(theme, &theme.colors.text_normal, &fit(line, INNER_WIDTH))),
        ));
    }
    lines.push(card_line(theme, &super::paint(theme, &theme.colors.text_dim, &fit(&card.year, INNER_WIDTH))));
    lines.push(card_line(theme, &super::paint(theme, &theme.colors.text_dim, &fit(&card.poster_url, INNER_WIDTH))));
    lines.push(card_bottom(theme));
    lines
}

fn skeleton_lines(theme: &Theme) -> Vec<String> {
    let shade = |len: usize| super::paint(theme, &theme.colors.disabled_fg, &fit(&"░".repeat(len), INNER_WIDTH));

    vec![
        card_top(theme),
        card_line(theme, &shade(4)),
        card_line(theme, &shade(INNER_WIDTH)),
        card_line(theme, &shade(INNER_WIDTH * 2 / 3)),
        card_line(theme, &shade(6)),
        card_line(theme, &shade(INNER_WIDTH)),
        card_bottom(theme),
    ]
}

/// Writes blocks of equal height side by side, `columns(cols)` per row.
fn render_rows<W: Write>(out: &mut W, blocks: &[Vec<String>], cols: usize) -> fmt::Result {
    let gap = " ".repeat(CARD_GAP);
    for row in blocks.chunks(columns(cols)) {
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let joined = row
                .iter()
                .map(|block| block.get(line).map_or("", String::as_str))
                .collect::<Vec<_>>()
                .join(&gap);
            writeln!(out, "{joined}")?;
        }
    }
    Ok(())
}

/// Renders one card per result.
///
/// Card layout:
/// ```text
/// ╭────────────────────────────╮
/// │ #1                   MOVIE │
/// │ Batman Begins              │
/// │                            │
/// │ 2005                       │
/// │ https://m.media-amazon.co… │
/// ╰────────────────────────────╯
/// ```
pub fn render_cards<W: Write>(out: &mut W, cards: &[CardItem], theme: &Theme, cols: usize) -> fmt::Result {
    let blocks: Vec<Vec<String>> = cards.iter().map(|card| card_lines(card, theme)).collect();
    render_rows(out, &blocks, cols)
}

/// Renders `count` skeleton cards with the same footprint as real cards.
pub fn render_skeleton<W: Write>(out: &mut W, count: usize, theme: &Theme, cols: usize) -> fmt::Result {
    let blocks = vec![skeleton_lines(theme); count];
    render_rows(out, &blocks, cols)
}
