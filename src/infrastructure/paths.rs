//! Platform paths for configuration and runtime data.
//!
//! Locations come from the `dirs` crate so they follow each platform's
//! conventions (XDG on Linux, `Library` on macOS, `AppData` on Windows).

use std::path::PathBuf;

const APP_DIR: &str = "filmvilla";

/// Returns the data directory for Film Villa (trace exports live here).
///
/// Falls back to `./.filmvilla` when the platform has no local data directory.
///
/// # Examples
///
/// ```
/// use filmvilla::infrastructure::get_data_dir;
///
/// let dir = get_data_dir();
/// let name = dir.file_name().and_then(|name| name.to_str());
/// assert!(name.is_some_and(|name| name.trim_start_matches('.') == "filmvilla"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_under(dirs::data_local_dir())
}

fn data_dir_under(base: Option<PathBuf>) -> PathBuf {
    base.map_or_else(|| PathBuf::from(format!(".{APP_DIR}")), |dir| dir.join(APP_DIR))
}

/// Returns the default configuration file path, if the platform has a config
/// directory.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use filmvilla::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/themes/dark.toml"), home.join("themes/dark.toml"));
        }
        assert_eq!(expand_tilde("themes/~dark.toml"), PathBuf::from("themes/~dark.toml"));
    }

    #[test]
    fn data_dir_is_named_after_the_app_with_or_without_a_platform_dir() {
        let name = |path: PathBuf| path.file_name().and_then(|n| n.to_str()).map(str::to_string);

        assert_eq!(data_dir_under(Some(PathBuf::from("/data"))), PathBuf::from("/data/filmvilla"));
        assert_eq!(data_dir_under(None), PathBuf::from(".filmvilla"));
        assert_eq!(name(data_dir_under(None)).as_deref(), Some(".filmvilla"));
        assert!(name(get_data_dir()).is_some_and(|n| n.trim_start_matches('.') == APP_DIR));
    }

    #[test]
    fn config_file_sits_in_app_dir() {
        if let Some(path) = config_file() {
            assert!(path.ends_with("filmvilla/config.toml"));
        }
    }
}
