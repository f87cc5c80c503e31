//! Shopper session extraction from cookies and headers.

use salvo::{
    http::cookie::Cookie,
    prelude::{Request, Response},
};

use storefront_app::{
    commerce::CustomerAccessToken,
    domain::{carts::models::CartId, line_items::CartSession},
};

/// Cookie holding the shopper's cart id.
const CART_ID_COOKIE: &str = "cartId";

/// Header carrying the signed-in shopper's customer access token.
const CUSTOMER_ACCESS_TOKEN_HEADER: &str = "x-customer-access-token";

pub(crate) trait CartSessionExt {
    /// Shopper session for the current request.
    fn cart_session(&self) -> CartSession;
}

impl CartSessionExt for Request {
    fn cart_session(&self) -> CartSession {
        let cart_id = self
            .cookie(CART_ID_COOKIE)
            .map(|cookie| cookie.value())
            .filter(|value| !value.trim().is_empty())
            .map(CartId::new);

        let customer = self
            .header::<String>(CUSTOMER_ACCESS_TOKEN_HEADER)
            .and_then(CustomerAccessToken::new);

        CartSession::new(cart_id, customer)
    }
}

pub(crate) trait CartCookieExt {
    /// Instruct the browser to drop the cart id cookie.
    fn forget_cart(&mut self);
}

impl CartCookieExt for Response {
    fn forget_cart(&mut self) {
        let mut cookie = Cookie::new(CART_ID_COOKIE, "");

        cookie.set_path("/");
        cookie.make_removal();

        self.add_cookie(cookie);
    }
}
