//! Movie directory abstraction.
//!
//! This module defines the [`MovieDirectory`] trait the worker talks to. The HTTP
//! implementation lives in [`OmdbClient`](crate::directory::OmdbClient); tests plug
//! in scripted directories instead.
//!
//! The trait is deliberately minimal: one method per request the controller can
//! issue.

use crate::domain::error::Result;
use crate::domain::{MovieDetail, SearchPage};
use async_trait::async_trait;

/// Remote source of movie summaries and details.
///
/// Implementations must be shareable across tasks: every request runs in its own
/// task and holds an `Arc` to the directory.
///
/// # Examples
///
/// ```no_run
/// use filmvilla::directory::{MovieDirectory, OmdbClient};
/// use filmvilla::Config;
///
/// # async fn run() -> filmvilla::Result<()> {
/// let client = OmdbClient::from_config(&Config::default())?;
/// let page = client.search_titles("batman", 1).await?;
/// println!("{} matches", page.total_results);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait MovieDirectory: Send + Sync {
    /// Searches titles matching `query` and returns page `page` (1-based).
    ///
    /// # Errors
    ///
    /// Returns [`FilmVillaError::Directory`](crate::FilmVillaError::Directory) when
    /// the directory reports no match, or a transport error (`Http`, `Api`,
    /// `Json`) when the request or response could not be processed.
    async fn search_titles(&self, query: &str, page: u32) -> Result<SearchPage>;

    /// Fetches the full record of one title, including the full plot.
    ///
    /// # Errors
    ///
    /// Same classification as [`MovieDirectory::search_titles`].
    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail>;
}
