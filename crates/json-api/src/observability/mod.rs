//! Structured logging, trace export and per-request instrumentation.

mod init;
mod otel;
mod request;

pub(crate) use init::Observability;
pub(crate) use request::RequestLogging;

/// Reasons the telemetry pipeline could not start.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ObservabilityError {
    #[error("could not build OTLP span exporter: {0}")]
    Exporter(#[from] opentelemetry_otlp::ExporterBuildError),

    #[error("could not install global tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}
