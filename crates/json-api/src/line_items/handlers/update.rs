//! Update Line Item Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    line_items::payloads::{LineItemsResponse, UpdateLineItemRequest},
};

/// Update Line Item Handler
///
/// Applies an `increment`, `decrement` or `delete` submission to the
/// shopper's cart. Business failures are reported in `lastResult` with a
/// `200` status so the form can render them.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Line Item",
    responses(
        (status_code = StatusCode::OK, description = "Submission applied or rejected with form errors"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.line_items.update",
    skip(json, req, depot, res),
    fields(
        has_cart = tracing::field::Empty,
        line_items_count = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateLineItemRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<LineItemsResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let session = req.cart_session();
    let (previous, fields) = json.into_inner().into_parts();

    let span = tracing::Span::current();

    span.record("has_cart", session.cart_id.is_some());
    span.record("line_items_count", previous.line_items.len());

    let outcome = state
        .app
        .line_items
        .update_line_item(&session, previous, fields)
        .await;

    if outcome.cart_deleted {
        res.forget_cart();

        tracing::info!("cart deleted, cart id cookie cleared");
    }

    Ok(Json(outcome.state.into()))
}
