//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartId, CartLineItem, LineItemId},
        },
        line_items::ErrorMessages,
    },
};

use crate::state::State;

pub(crate) fn make_line_item(id: &str, quantity: u32) -> CartLineItem {
    CartLineItem {
        entity_id: LineItemId::new(id),
        product_entity_id: 101,
        variant_entity_id: Some(202),
        name: format!("Product {id}"),
        quantity,
        selected_options: Vec::new(),
    }
}

pub(crate) fn make_cart(physical_items: Vec<CartLineItem>) -> Cart {
    Cart {
        entity_id: CartId::new("cart-1"),
        currency_code: "USD".to_string(),
        physical_items,
        digital_items: Vec::new(),
    }
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    State::from_app_context(AppContext::from_carts_service(
        Arc::new(carts),
        ErrorMessages::default(),
    ))
}

pub(crate) fn line_items_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .push(route),
    )
}
