//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` to two sinks: compact human-readable lines on stderr, and
//! OpenTelemetry spans exported to the trace file in the data directory.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::tracer::{self, SCOPE_NAME};
use crate::Config;

/// File name of the OTLP export inside the data directory.
pub const TRACE_FILE_NAME: &str = "filmvilla-otlp.json";

/// Resolves the filter directive: `RUST_LOG` wins, then `trace_level`, then
/// `info`.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or("info");
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Installs the global tracing subscriber.
///
/// The file export is skipped when the data directory cannot be created;
/// stderr logging is installed regardless. Calling this more than once has no
/// effect after the first call.
///
/// # Example
///
/// ```rust
/// use filmvilla::observability::init_tracing;
/// use filmvilla::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();

    let otel_layer = match std::fs::create_dir_all(&data_dir) {
        Ok(()) => {
            let resource = Resource::new(vec![
                opentelemetry::KeyValue::new("service.name", "FilmVilla"),
                opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            ]);
            let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
            Some(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)))
        }
        Err(_) => None,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .with(otel_layer)
        .try_init();
}
