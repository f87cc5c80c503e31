//! Test Fixtures

use crate::domain::{
    carts::models::{Cart, CartId, CartLineItem, LineItemId, SelectedOption},
    line_items::{CartSession, LineItemView, SubmittedFields},
};

pub(crate) fn make_line_item(id: &str, quantity: u32, options: Vec<SelectedOption>) -> CartLineItem {
    CartLineItem {
        entity_id: LineItemId::new(id),
        product_entity_id: 77,
        variant_entity_id: None,
        name: format!("Product {id}"),
        quantity,
        selected_options: options,
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

pub(crate) fn make_view(id: &str, quantity: i64) -> LineItemView {
    LineItemView {
        id: LineItemId::new(id),
        title: format!("Product {id}"),
        subtitle: String::new(),
        image: None,
        price: "$10.00".to_string(),
        quantity,
    }
}

pub(crate) fn fields(intent: &str, id: &str, quantity: &str) -> SubmittedFields {
    [("intent", intent), ("id", id), ("quantity", quantity)]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

pub(crate) fn session(cart_id: Option<&str>) -> CartSession {
    CartSession::new(cart_id.map(CartId::new), None)
}
