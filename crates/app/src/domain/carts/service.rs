//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    commerce::{CommerceClient, CustomerAccessToken},
    domain::carts::{
        errors::CartsServiceError,
        models::{Cart, CartId, LineItemId},
        options::CartSelectedOptionsInput,
        queries::{DELETE_LINE_ITEM_MUTATION, GET_CART_QUERY, UPDATE_LINE_ITEM_MUTATION},
        records::{
            CartMutationRecord, CartQueryRecord, DeleteLineItemInput, DeleteLineItemPayload,
            LineItemInput, MutationVariables, UpdateLineItemData, UpdateLineItemInput,
            UpdateLineItemPayload,
        },
    },
};

/// Quantity change for a single line item.
///
/// The full option selection is re-submitted alongside the new quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemQuantityUpdate {
    pub line_item: LineItemId,
    pub product_entity_id: i64,
    pub variant_entity_id: Option<i64>,
    pub selected_options: CartSelectedOptionsInput,
    pub quantity: i64,
}

/// Outcome of removing a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovedLineItem {
    /// The line item was removed and the cart still exists.
    Removed,

    /// The last line item was removed and the platform deleted the cart.
    CartDeleted,
}

#[derive(Debug, Clone)]
pub struct GraphqlCartsService {
    client: CommerceClient,
}

impl GraphqlCartsService {
    #[must_use]
    pub fn new(client: CommerceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CartsService for GraphqlCartsService {
    async fn get_cart(
        &self,
        cart: CartId,
        customer: Option<CustomerAccessToken>,
    ) -> Result<Option<Cart>, CartsServiceError> {
        let variables = serde_json::json!({ "cartId": cart.as_str() });

        let record: CartQueryRecord = self
            .client
            .fetch(GET_CART_QUERY, variables, customer.as_ref())
            .await?;

        record.site.cart.map(Cart::try_from).transpose()
    }

    async fn update_quantity(
        &self,
        cart: CartId,
        update: LineItemQuantityUpdate,
        customer: Option<CustomerAccessToken>,
    ) -> Result<(), CartsServiceError> {
        let variables = MutationVariables {
            input: UpdateLineItemInput {
                cart_entity_id: cart.as_str(),
                line_item_entity_id: update.line_item.as_str(),
                data: UpdateLineItemData {
                    line_item: LineItemInput {
                        quantity: update.quantity,
                        product_entity_id: update.product_entity_id,
                        variant_entity_id: update.variant_entity_id,
                        selected_options: &update.selected_options,
                    },
                },
            },
        };

        let record: CartMutationRecord<UpdateLineItemPayload> = self
            .client
            .fetch(UPDATE_LINE_ITEM_MUTATION, variables, customer.as_ref())
            .await?;

        if record
            .cart
            .update_cart_line_item
            .and_then(|payload| payload.cart)
            .is_none()
        {
            return Err(CartsServiceError::NotUpdated);
        }

        debug!(
            %cart,
            line_item = %update.line_item,
            quantity = update.quantity,
            "line item quantity updated"
        );

        Ok(())
    }

    async fn remove_item(
        &self,
        cart: CartId,
        line_item: LineItemId,
        customer: Option<CustomerAccessToken>,
    ) -> Result<RemovedLineItem, CartsServiceError> {
        let variables = MutationVariables {
            input: DeleteLineItemInput {
                cart_entity_id: cart.as_str(),
                line_item_entity_id: line_item.as_str(),
            },
        };

        let record: CartMutationRecord<DeleteLineItemPayload> = self
            .client
            .fetch(DELETE_LINE_ITEM_MUTATION, variables, customer.as_ref())
            .await?;

        let remaining = record
            .cart
            .delete_cart_line_item
            .and_then(|payload| payload.cart);

        if remaining.is_none() {
            info!(%cart, %line_item, "last line item removed, cart deleted");

            return Ok(RemovedLineItem::CartDeleted);
        }

        Ok(RemovedLineItem::Removed)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Fetch a fresh cart snapshot; `None` when the cart does not exist.
    async fn get_cart(
        &self,
        cart: CartId,
        customer: Option<CustomerAccessToken>,
    ) -> Result<Option<Cart>, CartsServiceError>;

    /// Set a line item's quantity, re-submitting its option selection.
    async fn update_quantity(
        &self,
        cart: CartId,
        update: LineItemQuantityUpdate,
        customer: Option<CustomerAccessToken>,
    ) -> Result<(), CartsServiceError>;

    /// Remove a line item from the cart.
    async fn remove_item(
        &self,
        cart: CartId,
        line_item: LineItemId,
        customer: Option<CustomerAccessToken>,
    ) -> Result<RemovedLineItem, CartsServiceError>;
}
