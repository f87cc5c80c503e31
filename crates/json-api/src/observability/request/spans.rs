//! Span naming for HTTP requests.

use uuid::Uuid;

/// Route name of the liveness endpoint, logged quietly by default.
pub(super) const HEALTHCHECK_ROUTE: &str = "healthcheck";

/// OpenTelemetry span name: `"{method} {path}"` with identifier segments collapsed.
pub(super) fn request_span_name(method: &str, path: &str) -> String {
    let segments = route_segments(path);

    if segments.is_empty() {
        return format!("{method} /");
    }

    format!("{method} /{}", segments.join("/"))
}

/// Dotted route name for log filtering, e.g. `/cart/line-items` is `cart.line_items`.
pub(super) fn route_name(path: &str) -> String {
    let segments = route_segments(path);

    if segments.is_empty() {
        return "root".to_owned();
    }

    segments
        .iter()
        .map(|segment| segment.replace('-', "_"))
        .collect::<Vec<_>>()
        .join(".")
}

fn route_segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else if segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_kept() {
        assert_eq!(request_span_name("GET", "/"), "GET /");
        assert_eq!(route_name("/"), "root");
    }

    #[test]
    fn line_item_route_is_named_for_logs() {
        assert_eq!(
            request_span_name("POST", "/cart/line-items/"),
            "POST /cart/line-items"
        );
        assert_eq!(route_name("/cart/line-items"), "cart.line_items");
    }

    #[test]
    fn healthcheck_route_matches_quiet_route() {
        assert_eq!(route_name("/healthcheck"), HEALTHCHECK_ROUTE);
    }

    #[test]
    fn identifier_segments_are_collapsed() {
        assert_eq!(
            request_span_name(
                "GET",
                "/carts/0190c6b4-52d5-7c3a-9a0e-5b8f3f4f1a2b/items/42"
            ),
            "GET /carts/{uuid}/items/{id}"
        );
    }
}
