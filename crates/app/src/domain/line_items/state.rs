//! Line item UI state threaded between form submissions.

use serde::{Deserialize, Serialize};

use crate::domain::{
    carts::models::{Cart, CartLineItem, LineItemId},
    line_items::submission::SubmittedFields,
};

/// Outcome of the last form submission, as rendered by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum SubmissionResult {
    #[serde(rename = "success", rename_all = "camelCase")]
    Success { reset_form: bool },

    #[serde(rename = "error", rename_all = "camelCase")]
    Error {
        form_errors: Vec<String>,
        initial_value: SubmittedFields,
    },
}

impl SubmissionResult {
    /// Successful submission; the form should be reset.
    #[must_use]
    pub fn reset() -> Self {
        Self::Success { reset_form: true }
    }

    /// Failed submission carrying form-level errors and the submitted values.
    #[must_use]
    pub fn form_errors(initial_value: SubmittedFields, form_errors: Vec<String>) -> Self {
        Self::Error {
            form_errors,
            initial_value,
        }
    }

    /// Form-level errors; empty on success.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success { .. } => &[],
            Self::Error { form_errors, .. } => form_errors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemImage {
    pub src: String,
    pub alt: String,
}

/// Line item as displayed in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemView {
    pub id: LineItemId,
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    #[serde(default)]
    pub image: Option<LineItemImage>,

    #[serde(default)]
    pub price: String,

    pub quantity: i64,
}

impl From<&CartLineItem> for LineItemView {
    fn from(item: &CartLineItem) -> Self {
        Self {
            id: item.entity_id.clone(),
            title: item.name.clone(),
            subtitle: String::new(),
            image: None,
            price: String::new(),
            quantity: i64::from(item.quantity),
        }
    }
}

/// Cart line items plus the result of the last submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemsState {
    #[serde(default)]
    pub line_items: Vec<LineItemView>,

    #[serde(default)]
    pub last_result: Option<SubmissionResult>,
}

impl LineItemsState {
    #[must_use]
    pub fn new(line_items: Vec<LineItemView>) -> Self {
        Self {
            line_items,
            last_result: None,
        }
    }

    /// State listing every line item of a cart snapshot.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        Self::new(cart.line_items().map(LineItemView::from).collect())
    }

    #[must_use]
    pub fn with_result(self, result: SubmissionResult) -> Self {
        Self {
            last_result: Some(result),
            ..self
        }
    }

    /// Shift the quantity of every entry matching `id` by `delta`.
    #[must_use]
    pub fn adjust_quantity(mut self, id: &LineItemId, delta: i64) -> Self {
        self.line_items
            .iter_mut()
            .filter(|item| item.id == *id)
            .for_each(|item| item.quantity = item.quantity.saturating_add(delta));

        self
    }

    /// Drop every entry matching `id`.
    #[must_use]
    pub fn without_line_item(mut self, id: &LineItemId) -> Self {
        self.line_items.retain(|item| item.id != *id);

        self
    }
}
