//! Logging and OpenTelemetry tracing with file-based export.
//!
//! # Architecture
//!
//! ```text
//!                  ┌─▶ fmt layer ──────────────▶ stderr
//! tracing macros ──┤
//!                  └─▶ tracing-opentelemetry ──▶ SDK ──▶ OtlpFileExporter ──▶ JSON lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: spans written to `<data dir>/filmvilla/filmvilla-otlp.json`
//! - **Automatic Rotation**: files rotate at 10MB with 3 numbered backups
//! - **OTLP Format**: standard OpenTelemetry Protocol JSON, one batch per line
//!
//! # Configuration
//!
//! The filter comes from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option or `--trace-level`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span encoding
//! - [`file_writer`]: Size-rotated trace file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
