//! Terminal front end and entry point.
//!
//! This binary is the thin runtime around the library: it parses the command
//! line, loads configuration, and runs the control loop that owns `AppState`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            Control loop (main task)      │
//! │  stdin lines ──▶ Event ──▶ handle_event  │  ← sole owner of AppState
//! │                    ▲            │        │
//! │                    │         Actions     │
//! │        DirectoryResponse        │        │
//! │                    │            ▼        │
//! │  ┌──────────────────────────────────┐    │
//! │  │ DirectoryWorker: one task per    │    │  ← HTTP round trips
//! │  │ request, replies over mpsc       │    │
//! │  └──────────────────────────────────┘    │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse CLI, merge it over the config file, initialize tracing
//! 2. **Seed**: Submit the seed query (or the positional `QUERY`)
//! 3. **Loop**: Wait on stdin and worker responses, whichever comes first
//! 4. **Render**: Redraw the frame whenever the handler asks for it
//! 5. **Exit**: On `q` or end of input
//!
//! # Commands
//!
//! - `/<text>` or `s <text>`: search
//! - `n` / `p`: next / previous page
//! - `o <n>`: open card `n`
//! - `c`: close the detail view
//! - `sort [recency|title]`: change ordering
//! - `?`: toggle help
//! - `q`: quit

#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};

use filmvilla::app::parse_line;
use filmvilla::directory::OmdbClient;
use filmvilla::worker::{DirectoryResponse, DirectoryWorker};
use filmvilla::{handle_event, Action, AppState, Config, Event, Result, SortMode};

/// Clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Search an OMDb-style movie directory from the terminal.
#[derive(Debug, Parser)]
#[command(name = "filmvilla", version, about)]
struct Cli {
    /// Query to search on start. Defaults to the configured seed query.
    query: Option<String>,

    /// Configuration file. Defaults to the platform config directory.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory API key.
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Directory endpoint.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Initial ordering: recency or title.
    #[arg(long, value_name = "MODE")]
    sort: Option<SortMode>,

    /// Log filter (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,

    /// Built-in theme: villa-night, villa-day or plain.
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Custom theme TOML file.
    #[arg(long, value_name = "PATH")]
    theme_file: Option<String>,

    /// Make paging an empty query a no-op instead of searching the fallback term.
    #[arg(long)]
    no_fallback: bool,

    /// Frame width in columns.
    #[arg(long, env = "COLUMNS", default_value_t = 100)]
    width: usize,
}

impl Cli {
    /// Overlays flags that were given on top of file configuration.
    fn apply_to(&self, config: &mut Config) {
        if let Some(api_key) = &self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(sort) = self.sort {
            config.sort = sort;
        }
        if self.trace_level.is_some() {
            config.trace_level.clone_from(&self.trace_level);
        }
        if self.theme.is_some() {
            config.theme_name.clone_from(&self.theme);
        }
        if self.theme_file.is_some() {
            config.theme_file.clone_from(&self.theme_file);
        }
        if self.no_fallback {
            config.pagination_fallback.clear();
        }
    }
}

/// Executes actions and draws frames for the control loop.
struct Runtime {
    worker: DirectoryWorker,
    responses: UnboundedSender<DirectoryResponse>,
    width: usize,
}

impl Runtime {
    /// Runs one event through the handler. Returns `true` when the loop should
    /// stop.
    fn process(&self, state: &mut AppState, event: &Event) -> Result<bool> {
        let (should_render, actions) = handle_event(state, event)?;

        tracing::debug!(action_count = actions.len(), should_render, "event handled");

        let mut quit = false;
        for action in actions {
            quit |= self.execute_action(action);
        }

        if should_render && !quit {
            self.draw(state)?;
        }
        Ok(quit)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: Action) -> bool {
        match action {
            Action::Dispatch(request) => {
                self.worker.dispatch(request, self.responses.clone());
                false
            }
            Action::Quit => true,
        }
    }

    fn draw(&self, state: &AppState) -> Result<()> {
        let frame = filmvilla::ui::render(state, self.width)?;
        let clear = if state.theme.is_plain() { "" } else { CLEAR_SCREEN };

        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{clear}{frame}› ")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Reads one input line, replacing invalid UTF-8. Returns `None` at end of input.
///
/// `pending` must outlive the call: a read cancelled by `select!` leaves the
/// bytes it already consumed there, and the next call continues the same line.
async fn read_command<R>(reader: &mut R, pending: &mut Vec<u8>) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let read = reader.read_until(b'\n', pending).await?;
    if read == 0 && pending.is_empty() {
        return Ok(None);
    }

    let line = match String::from_utf8(std::mem::take(pending)) {
        Ok(line) => line,
        Err(e) => {
            let line = String::from_utf8_lossy(e.as_bytes()).into_owned();
            tracing::warn!(line = %line.trim_end(), "ignoring input that is not valid UTF-8");
            line
        }
    };
    Ok(Some(line))
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    filmvilla::observability::init_tracing(&config);
    tracing::info!(base_url = %config.base_url, sort = %config.sort, "film villa starting");

    let directory = Arc::new(OmdbClient::from_config(&config)?);
    let (responses, mut completions) = mpsc::unbounded_channel();
    let runtime = Runtime {
        worker: DirectoryWorker::new(directory),
        responses,
        width: cli.width,
    };

    let mut state = filmvilla::initialize(&config);
    let seed = cli.query.clone().unwrap_or_else(|| state.query.clone());
    if runtime.process(&mut state, &Event::Submit { query: seed })? {
        return Ok(());
    }

    let mut input = BufReader::new(tokio::io::stdin());
    let mut pending = Vec::new();
    loop {
        let event = tokio::select! {
            line = read_command(&mut input, &mut pending) => {
                let Some(line) = line? else {
                    tracing::debug!("input closed");
                    break;
                };
                match parse_line(&line, state.sort_mode) {
                    Some(event) => event,
                    None => {
                        if !line.trim().is_empty() {
                            eprintln!("unknown command {:?} (type ? for help)", line.trim());
                        }
                        continue;
                    }
                }
            }
            Some(response) = completions.recv() => Event::DirectoryResponse(response),
        };

        if runtime.process(&mut state, &event)? {
            break;
        }
    }

    tracing::info!("film villa stopped");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("filmvilla: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmvilla::app::PageDelta;

    #[tokio::test]
    async fn invalid_utf8_line_is_skipped_not_fatal() {
        let mut input: &[u8] = b"\xff\xfe\n?\nn";
        let mut pending = Vec::new();

        let garbled = read_command(&mut input, &mut pending).await.expect("read").expect("line");
        assert_eq!(parse_line(&garbled, SortMode::ByRecency), None);

        let help = read_command(&mut input, &mut pending).await.expect("read").expect("line");
        assert_eq!(parse_line(&help, SortMode::ByRecency), Some(Event::Help));

        let unterminated = read_command(&mut input, &mut pending).await.expect("read").expect("line");
        assert_eq!(
            parse_line(&unterminated, SortMode::ByRecency),
            Some(Event::GotoPage(PageDelta::Next))
        );

        assert!(read_command(&mut input, &mut pending).await.expect("read").is_none());
    }
}
