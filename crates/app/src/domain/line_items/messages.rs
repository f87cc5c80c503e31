//! User-facing error messages.

/// Messages shown to shoppers when a line item action fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessages {
    pub something_went_wrong: String,
    pub cart_not_found: String,
    pub line_item_not_found: String,
    pub failed_to_update_quantity: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            something_went_wrong: "Something went wrong. Please try again.".to_string(),
            cart_not_found: "Cart not found.".to_string(),
            line_item_not_found: "Line item not found.".to_string(),
            failed_to_update_quantity: "Failed to update quantity.".to_string(),
        }
    }
}
