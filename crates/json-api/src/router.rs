//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{healthcheck, line_items, observability::RequestLogging, state::State};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// API routes without middleware or documentation.
pub(crate) fn api_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("cart/line-items").post(line_items::handlers::update::handler))
}

/// Full application router: middleware, API routes, and OpenAPI docs.
pub(crate) fn app_router(state: Arc<State>, logging: RequestLogging) -> Router {
    let router = Router::new()
        .hoop(logging)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(api_router());

    let doc = OpenApi::new("Storefront API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
}
