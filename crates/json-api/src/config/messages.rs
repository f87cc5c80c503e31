//! Shopper-facing messages

use clap::Args;

use storefront_app::domain::line_items::ErrorMessages;

/// Error messages returned as form errors.
#[derive(Debug, Args)]
pub struct MessagesConfig {
    /// Message for malformed submissions
    #[arg(
        long,
        env = "MESSAGE_SOMETHING_WENT_WRONG",
        default_value = "Something went wrong. Please try again."
    )]
    pub something_went_wrong: String,

    /// Message for a missing cart
    #[arg(long, env = "MESSAGE_CART_NOT_FOUND", default_value = "Cart not found.")]
    pub cart_not_found: String,

    /// Message for a missing line item
    #[arg(
        long,
        env = "MESSAGE_LINE_ITEM_NOT_FOUND",
        default_value = "Line item not found."
    )]
    pub line_item_not_found: String,

    /// Message for a quantity update the platform did not apply
    #[arg(
        long,
        env = "MESSAGE_FAILED_TO_UPDATE_QUANTITY",
        default_value = "Failed to update quantity."
    )]
    pub failed_to_update_quantity: String,
}

impl From<&MessagesConfig> for ErrorMessages {
    fn from(config: &MessagesConfig) -> Self {
        Self {
            something_went_wrong: config.something_went_wrong.clone(),
            cart_not_found: config.cart_not_found.clone(),
            line_item_not_found: config.line_item_not_found.clone(),
            failed_to_update_quantity: config.failed_to_update_quantity.clone(),
        }
    }
}
