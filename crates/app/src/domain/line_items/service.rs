//! Line item update orchestration.
//!
//! Each submission runs to completion inside one request: the cart is
//! fetched fresh, the mutation is issued once, and on success the caller's
//! state is patched optimistically without re-reading the cart. Concurrent
//! submissions for the same cart are not serialised against each other.

use std::sync::Arc;

use tracing::{Instrument as _, debug, info_span, warn};

use crate::{
    commerce::CustomerAccessToken,
    domain::{
        carts::{
            CartsService, CartsServiceError, LineItemQuantityUpdate, RemovedLineItem,
            models::CartId, options::encode_selected_options,
        },
        line_items::{
            messages::ErrorMessages,
            state::{LineItemsState, SubmissionResult},
            submission::{Intent, Submission, SubmittedFields},
        },
    },
};

/// Per-request shopper context, replacing ambient cookie access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSession {
    pub cart_id: Option<CartId>,
    pub customer: Option<CustomerAccessToken>,
}

impl CartSession {
    #[must_use]
    pub fn new(cart_id: Option<CartId>, customer: Option<CustomerAccessToken>) -> Self {
        Self { cart_id, customer }
    }
}

/// State produced by a line item action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemOutcome {
    pub state: LineItemsState,

    /// Set when removing the last line item deleted the cart, so the caller
    /// can forget the cart id.
    pub cart_deleted: bool,
}

impl From<LineItemsState> for LineItemOutcome {
    fn from(state: LineItemsState) -> Self {
        Self {
            state,
            cart_deleted: false,
        }
    }
}

#[derive(Clone)]
pub struct LineItemsService {
    carts: Arc<dyn CartsService>,
    messages: ErrorMessages,
}

impl std::fmt::Debug for LineItemsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineItemsService")
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

impl LineItemsService {
    #[must_use]
    pub fn new(carts: Arc<dyn CartsService>, messages: ErrorMessages) -> Self {
        Self { carts, messages }
    }

    /// Apply a line item form submission to the previous state.
    ///
    /// Never fails: validation, session, lookup and remote errors all become
    /// form-level errors on the returned state, with line items untouched.
    pub async fn update_line_item(
        &self,
        session: &CartSession,
        previous: LineItemsState,
        fields: SubmittedFields,
    ) -> LineItemOutcome {
        let span = info_span!(
            "line_items.update",
            intent = fields.get("intent").map_or("", String::as_str),
            line_item = fields.get("id").map_or("", String::as_str),
        );

        self.dispatch(session, previous, fields)
            .instrument(span)
            .await
    }

    async fn dispatch(
        &self,
        session: &CartSession,
        previous: LineItemsState,
        fields: SubmittedFields,
    ) -> LineItemOutcome {
        let submission = match Submission::parse(&fields) {
            Ok(submission) => submission,
            Err(error) => {
                warn!("rejected line item submission: {error}");

                return reply_error(previous, fields, &self.messages.something_went_wrong);
            }
        };

        let Some(cart_id) = session.cart_id.clone() else {
            warn!("line item submission without a cart id");

            return reply_error(previous, fields, &self.messages.cart_not_found);
        };

        match submission.intent.clone() {
            Intent::Increment => {
                self.change_quantity(session, cart_id, previous, fields, &submission, 1)
                    .await
            }
            Intent::Decrement => {
                self.change_quantity(session, cart_id, previous, fields, &submission, -1)
                    .await
            }
            Intent::Delete => {
                self.remove(session, cart_id, previous, fields, submission)
                    .await
            }
            Intent::Unrecognized(intent) => {
                debug!(%intent, "ignoring unrecognized line item intent");

                previous.into()
            }
        }
    }

    async fn change_quantity(
        &self,
        session: &CartSession,
        cart_id: CartId,
        previous: LineItemsState,
        fields: SubmittedFields,
        submission: &Submission,
        delta: i64,
    ) -> LineItemOutcome {
        let cart = match self
            .carts
            .get_cart(cart_id.clone(), session.customer.clone())
            .await
        {
            Ok(Some(cart)) => cart,
            Ok(None) => {
                warn!(%cart_id, "cart not found");

                return reply_error(previous, fields, &self.messages.cart_not_found);
            }
            Err(error) => {
                warn!(%cart_id, "failed to fetch cart: {error}");

                return reply_error(previous, fields, &self.failure_message(&error));
            }
        };

        let Some(line_item) = cart.find_line_item(&submission.id) else {
            warn!(%cart_id, line_item = %submission.id, "line item not found");

            return reply_error(previous, fields, &self.messages.line_item_not_found);
        };

        let update = LineItemQuantityUpdate {
            line_item: line_item.entity_id.clone(),
            product_entity_id: line_item.product_entity_id,
            variant_entity_id: line_item.variant_entity_id,
            selected_options: encode_selected_options(&line_item.selected_options),
            quantity: submission.quantity.saturating_add(delta),
        };

        if let Err(error) = self
            .carts
            .update_quantity(cart_id, update, session.customer.clone())
            .await
        {
            warn!("failed to update line item quantity: {error}");

            return reply_error(previous, fields, &self.failure_message(&error));
        }

        previous
            .adjust_quantity(&submission.id, delta)
            .with_result(SubmissionResult::reset())
            .into()
    }

    async fn remove(
        &self,
        session: &CartSession,
        cart_id: CartId,
        previous: LineItemsState,
        fields: SubmittedFields,
        submission: Submission,
    ) -> LineItemOutcome {
        let removed = match self
            .carts
            .remove_item(cart_id, submission.id.clone(), session.customer.clone())
            .await
        {
            Ok(removed) => removed,
            Err(error) => {
                warn!("failed to remove line item: {error}");

                return reply_error(previous, fields, &self.failure_message(&error));
            }
        };

        LineItemOutcome {
            state: previous
                .without_line_item(&submission.id)
                .with_result(SubmissionResult::reset()),
            cart_deleted: removed == RemovedLineItem::CartDeleted,
        }
    }

    fn failure_message(&self, error: &CartsServiceError) -> String {
        match error {
            CartsServiceError::NotUpdated => self.messages.failed_to_update_quantity.clone(),
            CartsServiceError::Commerce(_) | CartsServiceError::InvalidDate { .. } => {
                error.to_string()
            }
        }
    }
}

fn reply_error(previous: LineItemsState, fields: SubmittedFields, message: &str) -> LineItemOutcome {
    previous
        .with_result(SubmissionResult::form_errors(
            fields,
            vec![message.to_string()],
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use testresult::TestResult;

    use crate::{
        commerce::CommerceError,
        domain::{
            carts::{
                MockCartsService,
                models::{LineItemId, SelectedOption},
            },
            line_items::state::LineItemView,
        },
        test::{fields, make_cart, make_line_item, make_view, session},
    };

    use super::*;

    fn service(carts: MockCartsService) -> LineItemsService {
        LineItemsService::new(Arc::new(carts), ErrorMessages::default())
    }

    fn state(items: Vec<LineItemView>) -> LineItemsState {
        LineItemsState::new(items)
    }

    fn form_errors(outcome: &LineItemOutcome) -> Vec<String> {
        outcome
            .state
            .last_result
            .as_ref()
            .map(|result| result.errors().to_vec())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn increment_updates_remote_and_local_quantity() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .with(eq(CartId::new("cart-1")), eq(None))
            .return_once(|_, _| Ok(Some(make_cart(vec![make_line_item("line-1", 2, vec![])]))));

        carts
            .expect_update_quantity()
            .once()
            .withf(|cart, update, _| {
                *cart == CartId::new("cart-1")
                    && update.line_item == LineItemId::new("line-1")
                    && update.quantity == 3
                    && update.selected_options.is_empty()
            })
            .return_once(|_, _, _| Ok(()));

        carts.expect_remove_item().never();

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                state(vec![make_view("line-1", 2), make_view("line-2", 5)]),
                fields("increment", "line-1", "2"),
            )
            .await;

        assert_eq!(
            outcome.state.line_items,
            vec![make_view("line-1", 3), make_view("line-2", 5)]
        );
        assert_eq!(outcome.state.last_result, Some(SubmissionResult::reset()));
        assert!(!outcome.cart_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn increment_resubmits_encoded_options() -> TestResult {
        let options = vec![
            SelectedOption::MultipleChoice {
                option_entity_id: 1,
                option_value_entity_id: 11,
            },
            SelectedOption::Unrecognized,
            SelectedOption::TextField {
                option_entity_id: 2,
                text: "Engraving".to_string(),
            },
        ];

        let expected = encode_selected_options(&options);
        let mut line_item = make_line_item("line-1", 1, options);
        line_item.variant_entity_id = Some(505);

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(move |_, _| Ok(Some(make_cart(vec![line_item]))));

        carts
            .expect_update_quantity()
            .once()
            .withf(move |_, update, _| {
                update.selected_options == expected
                    && update.variant_entity_id == Some(505)
                    && update.quantity == 2
            })
            .return_once(|_, _, _| Ok(()));

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                state(vec![make_view("line-1", 1)]),
                fields("increment", "line-1", "1"),
            )
            .await;

        assert_eq!(outcome.state.line_items, vec![make_view("line-1", 2)]);

        Ok(())
    }

    #[tokio::test]
    async fn decrement_below_zero_is_sent_and_remote_rejection_surfaces() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|_, _| Ok(Some(make_cart(vec![make_line_item("line-1", 0, vec![])]))));

        carts
            .expect_update_quantity()
            .once()
            .withf(|_, update, _| update.quantity == -1)
            .return_once(|_, _, _| {
                Err(CartsServiceError::Commerce(CommerceError::Graphql(vec![
                    "Quantity must be greater than 0".to_string(),
                ])))
            });

        let previous = state(vec![make_view("line-1", 0)]);

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                previous.clone(),
                fields("decrement", "line-1", "0"),
            )
            .await;

        assert_eq!(outcome.state.line_items, previous.line_items);
        assert_eq!(
            form_errors(&outcome),
            vec!["Quantity must be greater than 0".to_string()]
        );

        Ok(())
    }

    #[tokio::test]
    async fn decrement_success_lowers_local_quantity() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|_, _| {
                Ok(Some(make_cart(vec![make_line_item("line-1", 4, vec![])])))
            });

        carts
            .expect_update_quantity()
            .once()
            .withf(|_, update, _| update.quantity == 3)
            .return_once(|_, _, _| Ok(()));

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                state(vec![make_view("line-1", 4)]),
                fields("decrement", "line-1", "4"),
            )
            .await;

        assert_eq!(outcome.state.line_items, vec![make_view("line-1", 3)]);
        assert_eq!(outcome.state.last_result, Some(SubmissionResult::reset()));

        Ok(())
    }

    #[tokio::test]
    async fn missing_cart_id_is_reported_without_remote_calls() -> TestResult {
        for intent in ["increment", "decrement", "delete"] {
            let mut carts = MockCartsService::new();

            carts.expect_get_cart().never();
            carts.expect_update_quantity().never();
            carts.expect_remove_item().never();

            let previous = state(vec![make_view("line-1", 1)]);

            let outcome = service(carts)
                .update_line_item(
                    &session(None),
                    previous.clone(),
                    fields(intent, "line-1", "1"),
                )
                .await;

            assert_eq!(outcome.state.line_items, previous.line_items);
            assert_eq!(form_errors(&outcome), vec!["Cart not found.".to_string()]);
        }

        Ok(())
    }

    #[tokio::test]
    async fn invalid_submission_is_reported_generically() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().never();
        carts.expect_update_quantity().never();
        carts.expect_remove_item().never();

        let submitted = fields("increment", "line-1", "lots");

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                state(vec![make_view("line-1", 1)]),
                submitted.clone(),
            )
            .await;

        assert_eq!(
            outcome.state.last_result,
            Some(SubmissionResult::form_errors(
                submitted,
                vec!["Something went wrong. Please try again.".to_string()],
            ))
        );
        assert_eq!(outcome.state.line_items, vec![make_view("line-1", 1)]);

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_item() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .with(eq(CartId::new("cart-1")), eq(LineItemId::new("b")), eq(None))
            .return_once(|_, _, _| Ok(RemovedLineItem::Removed));

        carts.expect_get_cart().never();
        carts.expect_update_quantity().never();

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                state(vec![make_view("a", 1), make_view("b", 1), make_view("c", 1)]),
                fields("delete", "b", "1"),
            )
            .await;

        assert_eq!(
            outcome.state.line_items,
            vec![make_view("a", 1), make_view("c", 1)]
        );
        assert_eq!(outcome.state.last_result, Some(SubmissionResult::reset()));
        assert!(!outcome.cart_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn deleting_last_item_reports_cart_deleted() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .return_once(|_, _, _| Ok(RemovedLineItem::CartDeleted));

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                state(vec![make_view("a", 1)]),
                fields("delete", "a", "1"),
            )
            .await;

        assert!(outcome.state.line_items.is_empty());
        assert!(outcome.cart_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn delete_failure_keeps_items() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_remove_item().once().return_once(|_, _, _| {
            Err(CartsServiceError::Commerce(CommerceError::UnexpectedResponse(
                "graphql request failed with status 502 Bad Gateway: ".to_string(),
            )))
        });

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                state(vec![make_view("a", 1)]),
                fields("delete", "a", "1"),
            )
            .await;

        assert_eq!(outcome.state.line_items, vec![make_view("a", 1)]);
        assert_eq!(
            form_errors(&outcome),
            vec![
                "unexpected response from commerce API: graphql request failed with status 502 Bad Gateway: "
                    .to_string()
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_line_item_is_reported() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().once().return_once(|_, _| {
            Ok(Some(make_cart(vec![make_line_item("line-1", 1, vec![])])))
        });

        carts.expect_update_quantity().never();

        let previous = state(vec![make_view("line-1", 1)]);

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                previous.clone(),
                fields("increment", "line-9", "1"),
            )
            .await;

        assert_eq!(outcome.state.line_items, previous.line_items);
        assert_eq!(form_errors(&outcome), vec!["Line item not found.".to_string()]);

        Ok(())
    }

    #[tokio::test]
    async fn digital_items_are_searched() -> TestResult {
        let mut cart = make_cart(vec![make_line_item("line-1", 1, vec![])]);
        cart.digital_items.push(make_line_item("ebook", 1, vec![]));

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(move |_, _| Ok(Some(cart)));

        carts
            .expect_update_quantity()
            .once()
            .withf(|_, update, _| update.line_item == LineItemId::new("ebook"))
            .return_once(|_, _, _| Ok(()));

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                state(vec![make_view("ebook", 1)]),
                fields("increment", "ebook", "1"),
            )
            .await;

        assert_eq!(outcome.state.line_items, vec![make_view("ebook", 2)]);

        Ok(())
    }

    #[tokio::test]
    async fn missing_remote_cart_is_reported() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().once().return_once(|_, _| Ok(None));
        carts.expect_update_quantity().never();

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                state(vec![make_view("line-1", 1)]),
                fields("decrement", "line-1", "1"),
            )
            .await;

        assert_eq!(form_errors(&outcome), vec!["Cart not found.".to_string()]);

        Ok(())
    }

    #[tokio::test]
    async fn update_without_returned_cart_uses_failed_to_update_message() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().once().return_once(|_, _| {
            Ok(Some(make_cart(vec![make_line_item("line-1", 1, vec![])])))
        });

        carts
            .expect_update_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotUpdated));

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                state(vec![make_view("line-1", 1)]),
                fields("increment", "line-1", "1"),
            )
            .await;

        assert_eq!(
            form_errors(&outcome),
            vec!["Failed to update quantity.".to_string()]
        );
        assert_eq!(outcome.state.line_items, vec![make_view("line-1", 1)]);

        Ok(())
    }

    #[tokio::test]
    async fn unrecognized_intent_returns_previous_state() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().never();
        carts.expect_update_quantity().never();
        carts.expect_remove_item().never();

        let previous = state(vec![make_view("line-1", 1)])
            .with_result(SubmissionResult::reset());

        let outcome = service(carts)
            .update_line_item(
                &session(Some("cart-1")),
                previous.clone(),
                fields("archive", "line-1", "1"),
            )
            .await;

        assert_eq!(outcome.state, previous);
        assert!(!outcome.cart_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn customer_token_is_forwarded() -> TestResult {
        let token = CustomerAccessToken::new("customer-token");
        let expected = token.clone();

        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .withf(move |_, _, customer| *customer == expected)
            .return_once(|_, _, _| Ok(RemovedLineItem::Removed));

        let session = CartSession::new(Some(CartId::new("cart-1")), token);

        let outcome = service(carts)
            .update_line_item(
                &session,
                state(vec![make_view("a", 1)]),
                fields("delete", "a", "1"),
            )
            .await;

        assert!(outcome.state.line_items.is_empty());

        Ok(())
    }
}
