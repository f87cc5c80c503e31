//! Carts service errors.

use thiserror::Error;

use crate::commerce::CommerceError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error("invalid date option value {value:?}")]
    InvalidDate {
        value: String,
        #[source]
        source: jiff::Error,
    },

    #[error("line item quantity was not updated")]
    NotUpdated,
}
