//! Line-oriented command parsing.
//!
//! The terminal front end reads one command per line and maps it to an
//! [`Event`]:
//!
//! | Line                     | Event                         |
//! |--------------------------|-------------------------------|
//! | `/<text>`, `s <text>`    | `Submit { query }`            |
//! | `n` / `p`                | `GotoPage(Next / Previous)`   |
//! | `o <n>`                  | `SelectIndex(n)`              |
//! | `o tt0078346`            | `SelectItem { id }`           |
//! | `c`                      | `CloseDetail`                 |
//! | `sort [recency\|title]`  | `SetSortMode` (toggle if bare)|
//! | `?`                      | `Help`                        |
//! | `q`                      | `Quit`                        |

use super::handler::Event;
use super::modes::{PageDelta, SortMode};

/// Maps one input line to an event.
///
/// `current_sort` is needed to resolve a bare `sort`, which toggles. Returns
/// `None` for blank or unrecognized lines.
///
/// # Example
///
/// ```rust
/// use filmvilla::app::{input::parse_line, Event, SortMode};
///
/// assert_eq!(
///     parse_line("/star wars", SortMode::ByRecency),
///     Some(Event::Submit { query: "star wars".to_string() })
/// );
/// assert_eq!(parse_line("sort", SortMode::ByRecency), Some(Event::SetSortMode(SortMode::ByTitle)));
/// ```
#[must_use]
pub fn parse_line(line: &str, current_sort: SortMode) -> Option<Event> {
    let line = line.trim();
    if let Some(query) = line.strip_prefix('/') {
        return Some(Event::Submit { query: query.trim().to_string() });
    }

    let (command, argument) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    match command {
        "s" | "search" => Some(Event::Submit { query: argument.to_string() }),
        "n" | "next" => Some(Event::GotoPage(PageDelta::Next)),
        "p" | "prev" | "previous" => Some(Event::GotoPage(PageDelta::Previous)),
        "o" | "open" => parse_open(argument),
        "c" | "close" => Some(Event::CloseDetail),
        "sort" if argument.is_empty() => Some(Event::SetSortMode(current_sort.toggled())),
        "sort" => argument.parse().ok().map(Event::SetSortMode),
        "?" | "h" | "help" => Some(Event::Help),
        "q" | "quit" | "exit" => Some(Event::Quit),
        _ => None,
    }
}

fn parse_open(argument: &str) -> Option<Event> {
    if let Ok(number) = argument.parse::<usize>() {
        return Some(Event::SelectIndex(number));
    }
    argument
        .starts_with("tt")
        .then(|| Event::SelectItem { id: argument.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<Event> {
        parse_line(line, SortMode::ByRecency)
    }

    #[test]
    fn search_forms() {
        let batman = Some(Event::Submit { query: "batman".to_string() });
        assert_eq!(parse("/batman"), batman);
        assert_eq!(parse("  / batman  "), batman);
        assert_eq!(parse("s batman"), batman);
        assert_eq!(parse("search batman"), batman);
        assert_eq!(parse("s   the  dark knight"), Some(Event::Submit { query: "the  dark knight".to_string() }));
        assert_eq!(parse("/"), Some(Event::Submit { query: String::new() }));
    }

    #[test]
    fn navigation_and_detail() {
        assert_eq!(parse("n"), Some(Event::GotoPage(PageDelta::Next)));
        assert_eq!(parse("p"), Some(Event::GotoPage(PageDelta::Previous)));
        assert_eq!(parse("o 3"), Some(Event::SelectIndex(3)));
        assert_eq!(parse("open tt0078346"), Some(Event::SelectItem { id: "tt0078346".to_string() }));
        assert_eq!(parse("o"), None);
        assert_eq!(parse("o three"), None);
        assert_eq!(parse("c"), Some(Event::CloseDetail));
    }

    #[test]
    fn sort_commands() {
        assert_eq!(parse("sort title"), Some(Event::SetSortMode(SortMode::ByTitle)));
        assert_eq!(parse("sort recency"), Some(Event::SetSortMode(SortMode::ByRecency)));
        assert_eq!(parse_line("sort", SortMode::ByTitle), Some(Event::SetSortMode(SortMode::ByRecency)));
        assert_eq!(parse("sort sideways"), None);
    }

    #[test]
    fn shell_commands_and_noise() {
        assert_eq!(parse("q"), Some(Event::Quit));
        assert_eq!(parse("?"), Some(Event::Help));
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("batman"), None);
    }
}
