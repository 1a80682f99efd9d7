//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the terminal front end,
//! supporting built-in themes and custom themes loaded from TOML files. It
//! provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `villa-night`: Dark indigo theme (default)
//! - `villa-day`: Light theme for bright terminals
//! - `plain`: No escape sequences at all, for pipes and logs
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f4f4f5"
//! header_bg = "#1e1b4b"      # optional
//! accent = "#818cf8"
//! text_normal = "#e4e4e7"
//! text_dim = "#71717a"
//! border = "#3f3f46"
//! search_bar_border = "#6366f1"
//! card_border = "#52525b"
//! badge_fg = "#a5b4fc"
//! rating_fg = "#facc15"
//! genre_fg = "#c7d2fe"
//! disabled_fg = "#52525b"
//! empty_state_fg = "#a1a1aa"
//! error_fg = "#f87171"
//! ```
//!
//! # Example
//!
//! ```rust
//! use filmvilla::ui::Theme;
//!
//! let theme = Theme::from_name("villa-night").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", theme.bold(), theme.reset());
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::{FilmVillaError, Result};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "villa-night";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// Colors are hex strings (e.g., "#818cf8"). An empty string disables styling
/// for that element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Tagline, card numbers and active pagination controls.
    pub accent: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,
    /// Search bar border color.
    pub search_bar_border: String,
    /// Card outline color.
    pub card_border: String,

    /// Media type badge color.
    pub badge_fg: String,
    /// Rating star color.
    pub rating_fg: String,
    /// Genre chip color.
    pub genre_fg: String,
    /// Disabled pagination controls.
    pub disabled_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
    /// Transport failure message color.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "villa-night" => include_str!("../../themes/villa-night.toml"),
            "villa-day" => include_str!("../../themes/villa-day.toml"),
            "plain" => return Some(Self::plain()),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FilmVillaError::Theme`] if the file cannot be read or its TOML
    /// does not describe a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| FilmVillaError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| FilmVillaError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// A theme that emits no escape sequences.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            name: "plain".to_string(),
            colors: ThemeColors::default(),
        }
    }

    /// Whether this theme styles output at all.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.colors == ThemeColors::default()
    }

    fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// Returns an empty string for an empty or malformed color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::hex_to_rgb(hex).map_or_else(String::new, |(r, g, b)| format!("\u{001b}[38;2;{r};{g};{b}m"))
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::hex_to_rgb(hex).map_or_else(String::new, |(r, g, b)| format!("\u{001b}[48;2;{r};{g};{b}m"))
    }

    /// Bold escape sequence, or nothing for the plain theme.
    #[must_use]
    pub fn bold(&self) -> &'static str {
        if self.is_plain() { "" } else { "\u{001b}[1m" }
    }

    /// Dim escape sequence, or nothing for the plain theme.
    #[must_use]
    pub fn dim(&self) -> &'static str {
        if self.is_plain() { "" } else { "\u{001b}[2m" }
    }

    /// Reset escape sequence, or nothing for the plain theme.
    #[must_use]
    pub fn reset(&self) -> &'static str {
        if self.is_plain() { "" } else { "\u{001b}[0m" }
    }
}

impl Default for Theme {
    /// Returns the `villa-night` theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["villa-night", "villa-day"] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
            assert!(!theme.is_plain());
        }
        assert_eq!(Theme::default().name, DEFAULT_THEME);
        assert!(Theme::from_name("sepia").is_none());
    }

    #[test]
    fn plain_theme_emits_nothing() {
        let theme = Theme::plain();
        assert_eq!(Theme::fg(&theme.colors.accent), "");
        assert_eq!(theme.bold(), "");
        assert_eq!(theme.reset(), "");
    }

    #[test]
    fn hex_colors_become_truecolor_sequences() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#zzzzzz"), "");
    }

    #[test]
    fn loads_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_bytes!("../../themes/villa-day.toml")).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "villa-day");
        assert!(theme.colors.header_bg.is_none());
    }

    #[test]
    fn rejects_malformed_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = 3").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(FilmVillaError::Theme(_))));
    }
}
