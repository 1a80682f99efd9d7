//! Directory request and response messages.
//!
//! This module defines the protocol between the control loop and the tasks that
//! talk to the movie directory. It also carries tracing context across the task
//! boundary so a request's spans stay linked to the event that issued it.

use crate::domain::{MovieDetail, SearchFailure, SearchPage};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-task span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry when a request is
/// built, so the task executing it can parent its spans correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span has no valid OpenTelemetry context, for
    /// example when tracing was never initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// Generates builder methods for `DirectoryRequest` variants.
///
/// Each builder attaches the current trace context to the message.
macro_rules! directory_request_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl DirectoryRequest {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " request with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

directory_request_builders! {
    search(Search { ticket: u64, query: String, page: u32 }),
    detail(Detail { ticket: u64, id: String }),
}

/// Requests sent from the control loop to a directory task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectoryRequest {
    /// Title search for one page of results.
    Search {
        /// Request number, used to correlate log lines only.
        ticket: u64,
        query: String,
        /// 1-based page number.
        page: u32,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Full record lookup for one title.
    Detail {
        ticket: u64,
        id: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl DirectoryRequest {
    #[must_use]
    pub const fn ticket(&self) -> u64 {
        match self {
            Self::Search { ticket, .. } | Self::Detail { ticket, .. } => *ticket,
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::Search { trace_context, .. } | Self::Detail { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Outcomes sent from a directory task back to the control loop.
///
/// Every request produces exactly one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectoryResponse {
    /// A search page arrived.
    SearchLoaded {
        ticket: u64,
        query: String,
        /// Page that was requested.
        page: u32,
        result: SearchPage,
    },

    /// The search produced no result set.
    SearchFailed {
        ticket: u64,
        query: String,
        page: u32,
        reason: SearchFailure,
    },

    /// A detail record arrived.
    DetailLoaded {
        ticket: u64,
        detail: MovieDetail,
    },

    /// The lookup failed. The controller only logs this.
    DetailFailed {
        ticket: u64,
        id: String,
        /// Human-readable error message.
        message: String,
    },
}
