//! Background directory tasks.
//!
//! This module runs directory requests off the control loop so rendering and
//! input handling never wait on the network. Requests carry tracing context so
//! their spans stay linked to the event that issued them.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and request execution

pub mod handler;
pub mod messages;

pub use handler::DirectoryWorker;
pub use messages::{DirectoryRequest, DirectoryResponse, TraceContext};
