//! Storefront Domain Concerns

pub mod carts;
pub mod line_items;
