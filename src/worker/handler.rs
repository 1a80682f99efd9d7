//! Directory worker executing requests as independent tasks.
//!
//! The control loop never awaits the directory itself. Each
//! [`DirectoryRequest`] becomes one `tokio` task that performs a single HTTP round
//! trip, classifies the outcome and posts exactly one [`DirectoryResponse`] back.
//! Tasks are never cancelled and their completions arrive in whatever order the
//! network produces.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::Instrument;

use crate::directory::MovieDirectory;
use crate::domain::SearchFailure;
use crate::worker::{DirectoryRequest, DirectoryResponse};

/// Executes directory requests against a shared [`MovieDirectory`].
#[derive(Clone)]
pub struct DirectoryWorker {
    directory: Arc<dyn MovieDirectory>,
}

impl DirectoryWorker {
    #[must_use]
    pub fn new(directory: Arc<dyn MovieDirectory>) -> Self {
        Self { directory }
    }

    /// Performs one request and classifies its outcome.
    ///
    /// Never fails: directory and transport errors are folded into the failure
    /// variants of [`DirectoryResponse`].
    pub async fn handle_request(&self, request: DirectoryRequest) -> DirectoryResponse {
        match request {
            DirectoryRequest::Search { ticket, query, page, .. } => {
                match self.directory.search_titles(&query, page).await {
                    Ok(result) => {
                        tracing::debug!(ticket, items = result.items.len(), "search succeeded");
                        DirectoryResponse::SearchLoaded { ticket, query, page, result }
                    }
                    Err(e) => {
                        if e.is_directory_failure() {
                            tracing::debug!(ticket, error = %e, "search returned no results");
                        } else {
                            tracing::warn!(ticket, error = %e, "search request failed");
                        }
                        DirectoryResponse::SearchFailed {
                            ticket,
                            query,
                            page,
                            reason: SearchFailure::from(&e),
                        }
                    }
                }
            }
            DirectoryRequest::Detail { ticket, id, .. } => match self.directory.fetch_detail(&id).await {
                Ok(detail) => DirectoryResponse::DetailLoaded { ticket, detail },
                Err(e) => {
                    tracing::warn!(ticket, id = %id, error = %e, "detail request failed");
                    DirectoryResponse::DetailFailed {
                        ticket,
                        id,
                        message: e.to_string(),
                    }
                }
            },
        }
    }

    /// Spawns a task for `request` that sends its response on `responses`.
    ///
    /// The task runs inside a span parented to the trace context captured when the
    /// request was built. A closed channel means the control loop has exited; the
    /// response is then dropped.
    pub fn dispatch(&self, request: DirectoryRequest, responses: UnboundedSender<DirectoryResponse>) {
        let span = tracing::debug_span!(
            "directory_request",
            ticket = request.ticket(),
            request = ?request
        );
        attach_parent_trace_context(&span, &request);

        let worker = self.clone();
        tokio::spawn(
            async move {
                let response = worker.handle_request(request).await;
                if responses.send(response).is_err() {
                    tracing::debug!("control loop gone, dropping directory response");
                }
            }
            .instrument(span),
        );
    }
}

impl std::fmt::Debug for DirectoryWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryWorker").finish_non_exhaustive()
    }
}

/// Parents `span` to the remote span context carried by `request`, if any.
fn attach_parent_trace_context(span: &tracing::Span, request: &DirectoryRequest) {
    use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};
    use tracing_opentelemetry::OpenTelemetrySpanExt;

    let Some(trace_context) = request.trace_context() else {
        return;
    };
    let (Ok(trace_id), Ok(span_id)) = (
        TraceId::from_hex(&trace_context.trace_id),
        SpanId::from_hex(&trace_context.parent_span_id),
    ) else {
        return;
    };

    let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
    span.set_parent(opentelemetry::Context::new().with_remote_span_context(span_context));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FilmVillaError, MediaType, MovieDetail, MovieSummary, Poster, Result, SearchPage};
    use async_trait::async_trait;
    use tokio::sync::mpsc;

    struct ScriptedDirectory;

    fn superman() -> MovieSummary {
        MovieSummary {
            id: "tt0078346".to_string(),
            title: "Superman".to_string(),
            year: "1978".to_string(),
            poster: Poster::Missing,
            media_type: MediaType::Movie,
        }
    }

    #[async_trait]
    impl MovieDirectory for ScriptedDirectory {
        async fn search_titles(&self, query: &str, _page: u32) -> Result<SearchPage> {
            match query {
                "superman" => Ok(SearchPage { items: vec![superman()], total_results: 1 }),
                "offline" => Err(FilmVillaError::Api {
                    status: 503,
                    message: "Service Unavailable".to_string(),
                }),
                _ => Err(FilmVillaError::Directory("Movie not found!".to_string())),
            }
        }

        async fn fetch_detail(&self, id: &str) -> Result<MovieDetail> {
            Err(FilmVillaError::Directory(format!("Incorrect IMDb ID: {id}")))
        }
    }

    fn worker() -> DirectoryWorker {
        DirectoryWorker::new(Arc::new(ScriptedDirectory))
    }

    #[tokio::test]
    async fn classifies_search_outcomes() {
        let worker = worker();

        let loaded = worker
            .handle_request(DirectoryRequest::search(1, "superman".to_string(), 1))
            .await;
        assert!(matches!(loaded, DirectoryResponse::SearchLoaded { ref result, .. } if result.total_results == 1));

        let empty = worker
            .handle_request(DirectoryRequest::search(2, "zzzxxqq".to_string(), 1))
            .await;
        assert!(matches!(
            empty,
            DirectoryResponse::SearchFailed { reason: SearchFailure::NoResults { .. }, .. }
        ));

        let offline = worker
            .handle_request(DirectoryRequest::search(3, "offline".to_string(), 1))
            .await;
        assert!(matches!(
            offline,
            DirectoryResponse::SearchFailed { reason: SearchFailure::Transport { .. }, .. }
        ));
    }

    #[tokio::test]
    async fn dispatch_posts_exactly_one_response() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        worker().dispatch(DirectoryRequest::detail(9, "tt0000000".to_string()), tx);

        let response = rx.recv().await.expect("one response");
        assert!(matches!(response, DirectoryResponse::DetailFailed { ticket: 9, .. }));
        assert!(rx.recv().await.is_none());
    }
}
