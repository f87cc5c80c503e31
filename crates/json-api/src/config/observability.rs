//! Logging and trace export settings

use std::time::Duration;

use clap::{Args, ValueEnum};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` holds no directives
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Log healthcheck requests at info level instead of debug
    #[arg(long, env = "LOG_HEALTHCHECKS", default_value_t = false)]
    pub log_healthchecks: bool,
}

/// Trace export and request timing settings.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Export traces over OTLP
    #[arg(long, env = "OTEL_ENABLED", default_value_t = false)]
    pub otel_enabled: bool,

    /// Continue traces from an incoming `traceparent` header
    #[arg(long, env = "OTEL_PARENT_PROPAGATION_ENABLED", default_value_t = false)]
    pub otel_parent_propagation_enabled: bool,

    /// OTLP gRPC collector endpoint
    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub otel_exporter_otlp_endpoint: String,

    /// OTLP export timeout in seconds
    #[arg(long, env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS", default_value_t = 3_u64)]
    pub otel_exporter_otlp_timeout_seconds: u64,

    /// Service name reported on exported spans
    #[arg(long, env = "OTEL_SERVICE_NAME", default_value = "storefront-json")]
    pub otel_service_name: String,

    /// Deployment environment reported on exported spans
    #[arg(long, env = "OTEL_DEPLOYMENT_ENVIRONMENT", default_value = "development")]
    pub otel_deployment_environment: String,

    /// Fraction of root traces to sample; clamped to [0.0, 1.0]
    #[arg(long, env = "OTEL_TRACE_SAMPLE_RATIO", default_value_t = 1.0_f64)]
    pub otel_trace_sample_ratio: f64,

    /// Requests slower than this many milliseconds are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}

impl ObservabilityConfig {
    #[must_use]
    pub fn exporter_timeout(&self) -> Duration {
        Duration::from_secs(self.otel_exporter_otlp_timeout_seconds)
    }

    #[must_use]
    pub fn sample_ratio(&self) -> f64 {
        self.otel_trace_sample_ratio.clamp(0.0, 1.0)
    }

    /// Parent extraction only makes sense while traces are exported.
    #[must_use]
    pub fn propagates_parent(&self) -> bool {
        self.otel_enabled && self.otel_parent_propagation_enabled
    }

    #[must_use]
    pub fn slow_request_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_request_threshold_ms)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        observability: ObservabilityConfig,
    }

    fn parse(args: &[&str]) -> Result<ObservabilityConfig, clap::Error> {
        Harness::try_parse_from(std::iter::once("harness").chain(args.iter().copied()))
            .map(|harness| harness.observability)
    }

    #[test]
    fn sample_ratio_is_clamped() -> TestResult {
        let above = parse(&["--otel-trace-sample-ratio", "1.5"])?.sample_ratio();
        let below = parse(&["--otel-trace-sample-ratio=-0.5"])?.sample_ratio();
        let within = parse(&["--otel-trace-sample-ratio", "0.25"])?.sample_ratio();

        assert!((above - 1.0).abs() < f64::EPSILON, "ratio above 1 should clamp");
        assert!(below.abs() < f64::EPSILON, "negative ratio should clamp to 0");
        assert!((within - 0.25).abs() < f64::EPSILON, "valid ratio is kept");

        Ok(())
    }

    #[test]
    fn parent_propagation_requires_export() -> TestResult {
        assert!(!parse(&["--otel-parent-propagation-enabled"])?.propagates_parent());
        assert!(
            parse(&["--otel-enabled", "--otel-parent-propagation-enabled"])?.propagates_parent()
        );

        Ok(())
    }

    #[test]
    fn durations_are_derived_from_raw_values() -> TestResult {
        let config = parse(&["--slow-request-threshold-ms", "250"])?;

        assert_eq!(config.slow_request_threshold(), Duration::from_millis(250));
        assert_eq!(config.exporter_timeout(), Duration::from_secs(3));

        Ok(())
    }
}
