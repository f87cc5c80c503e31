//! Per-request span, request id and completion logging.

mod parent_context;
mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, debug, error, info, warn};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use crate::config::ServerConfig;

const REQUEST_ID_DEPOT_KEY: &str = "request_id";
const DEFAULT_SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(1);

/// Middleware wrapping every request in an `http.request` span.
///
/// The span carries the request id (reused from `x-request-id` or minted as a
/// UUIDv7), the route, and once the handler returns, status and duration.
#[derive(Debug, Clone)]
pub(crate) struct RequestLogging {
    slow_threshold: Duration,
    propagate_parent: bool,
    log_healthchecks: bool,
}

impl Default for RequestLogging {
    fn default() -> Self {
        Self {
            slow_threshold: DEFAULT_SLOW_REQUEST_THRESHOLD,
            propagate_parent: false,
            log_healthchecks: false,
        }
    }
}

impl RequestLogging {
    pub(crate) fn from_config(config: &ServerConfig) -> Self {
        Self {
            slow_threshold: config.observability.slow_request_threshold(),
            propagate_parent: config.observability.propagates_parent(),
            log_healthchecks: config.logging.log_healthchecks,
        }
    }

    fn open_span(&self, req: &Request, request_id: &str, route: &str) -> Span {
        let method = req.method().as_str();
        let path = req.uri().path();

        let span = tracing::info_span!(
            parent: None,
            "http.request",
            otel.name = %spans::request_span_name(method, path),
            otel.kind = "server",
            request_id = %request_id,
            route = %route,
            method = %method,
            path = %path,
            remote_addr = %req.remote_addr(),
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        if self.propagate_parent
            && let Some(parent) = parent_context::extract_parent_context(req.headers())
            && let Err(source) = span.set_parent(parent)
        {
            warn!("failed to attach propagated trace parent: {source}");
        }

        span
    }

    fn log_completion(&self, route: &str, status: StatusCode, elapsed: Duration) {
        let status_code = status.as_u16();
        let duration_ms = elapsed.as_millis();

        if route == spans::HEALTHCHECK_ROUTE && !self.log_healthchecks {
            debug!(status = status_code, duration_ms, "request.completed");
        } else {
            info!(status = status_code, duration_ms, "request.completed");
        }

        if status.is_server_error() {
            error!(status = status_code, route, "server error response");
        } else if status.is_client_error() {
            warn!(status = status_code, route, "client error response");
        }

        if elapsed > self.slow_threshold {
            warn!(
                route,
                duration_ms,
                threshold_ms = self.slow_threshold.as_millis(),
                "slow request detected"
            );
        }
    }
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();

        let request_id =
            request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));
        let route = spans::route_name(req.uri().path());

        depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());
        request_ids::set_request_id_header(res, &request_id);

        let span = self.open_span(req, &request_id, &route);

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let elapsed = started.elapsed();
        let status = request_ids::response_status_or_ok(res.status_code);

        span.record("status", status.as_u16());
        span.record("duration_ms", elapsed.as_millis());

        span.in_scope(|| self.log_completion(&route, status, elapsed));
    }
}
