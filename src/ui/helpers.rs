//! Shared rendering utilities and helpers.
//!
//! Low-level text layout used across UI components. Everything measures
//! terminal display columns (`unicode-width`), so full-width CJK titles take two
//! columns per character and strings are never split mid-character.
//!
//! # Example
//!
//! ```rust
//! use filmvilla::ui::helpers::{center, fit};
//!
//! assert_eq!(center("ab", 6), "  ab  ");
//! assert_eq!(fit("Superman Returns", 8), "Superma…");
//! ```

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal columns.
#[must_use]
pub fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Splits `text` after its longest prefix that fits in `cols` columns.
fn split_at_width(text: &str, cols: usize) -> (&str, &str) {
    let mut used = 0;
    for (index, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > cols {
            return text.split_at(index);
        }
    }
    (text, "")
}

/// Cuts `text` to at most `max` columns, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let (head, _) = split_at_width(text, max - 1);
    format!("{head}…")
}

/// Truncates then right-pads `text` to exactly `cols` columns.
#[must_use]
pub fn fit(text: &str, cols: usize) -> String {
    let cut = truncate(text, cols);
    let pad = cols.saturating_sub(width(&cut));
    format!("{cut}{}", " ".repeat(pad))
}

/// Centers `text` in `cols` columns; left padding is the smaller half.
#[must_use]
pub fn center(text: &str, cols: usize) -> String {
    let cut = truncate(text, cols);
    let len = width(&cut);
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);
    format!("{}{cut}{}", " ".repeat(left), " ".repeat(right))
}

/// Greedily word-wraps `text` into lines of at most `cols` columns.
///
/// Words longer than a line are hard-split. When `max_lines` is reached, the last
/// line is truncated with `…`.
#[must_use]
pub fn wrap(text: &str, cols: usize, max_lines: usize) -> Vec<String> {
    if cols == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: String = word.to_string();
        loop {
            let needed = if current.is_empty() { width(&word) } else { width(&current) + 1 + width(&word) };
            if needed <= cols {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&word);
                break;
            }
            if current.is_empty() {
                let (mut head, mut rest) = split_at_width(&word, cols);
                if head.is_empty() {
                    // A wide char on a one-column line still has to go somewhere.
                    let first = word.chars().next().map_or(0, char::len_utf8);
                    (head, rest) = word.split_at(first);
                }
                lines.push(head.to_string());
                word = rest.to_string();
                if word.is_empty() {
                    break;
                }
            } else {
                lines.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        let rest = lines.split_off(max_lines - 1).join(" ");
        lines.push(truncate(&format!("{rest}…"), cols));
    }
    lines
}
