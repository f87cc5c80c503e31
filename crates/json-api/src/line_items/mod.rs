//! Cart line item endpoints.

pub(crate) mod handlers;
pub(crate) mod payloads;
