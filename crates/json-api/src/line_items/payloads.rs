//! Line item request and response bodies.

use std::collections::BTreeMap;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::{
    carts::models::LineItemId,
    line_items::{LineItemView, LineItemsState, SubmissionResult, state::LineItemImage},
};

/// Line item form submission together with the state it applies to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateLineItemRequest {
    /// Line items currently displayed
    #[serde(default)]
    pub line_items: Vec<LineItemPayload>,

    /// Result of the previous submission, if any
    #[serde(default)]
    pub last_result: Option<SubmissionResultPayload>,

    /// Raw form fields: `intent`, `id` and `quantity`
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl UpdateLineItemRequest {
    /// Split the request into the previous state and the submitted fields.
    pub(crate) fn into_parts(self) -> (LineItemsState, BTreeMap<String, String>) {
        let state = LineItemsState {
            line_items: self.line_items.into_iter().map(Into::into).collect(),
            last_result: self.last_result.map(Into::into),
        };

        (state, self.fields)
    }
}

/// Line items after the submission was applied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineItemsResponse {
    pub line_items: Vec<LineItemPayload>,
    pub last_result: Option<SubmissionResultPayload>,
}

impl From<LineItemsState> for LineItemsResponse {
    fn from(state: LineItemsState) -> Self {
        Self {
            line_items: state.line_items.into_iter().map(Into::into).collect(),
            last_result: state.last_result.map(Into::into),
        }
    }
}

/// Line item as displayed in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemPayload {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    #[serde(default)]
    pub image: Option<LineItemImagePayload>,

    #[serde(default)]
    pub price: String,

    pub quantity: i64,
}

impl From<LineItemPayload> for LineItemView {
    fn from(payload: LineItemPayload) -> Self {
        Self {
            id: LineItemId::new(payload.id),
            title: payload.title,
            subtitle: payload.subtitle,
            image: payload.image.map(|image| LineItemImage {
                src: image.src,
                alt: image.alt,
            }),
            price: payload.price,
            quantity: payload.quantity,
        }
    }
}

impl From<LineItemView> for LineItemPayload {
    fn from(view: LineItemView) -> Self {
        Self {
            id: view.id.to_string(),
            title: view.title,
            subtitle: view.subtitle,
            image: view.image.map(|image| LineItemImagePayload {
                src: image.src,
                alt: image.alt,
            }),
            price: view.price,
            quantity: view.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemImagePayload {
    pub src: String,
    pub alt: String,
}

/// Outcome of a form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub(crate) enum SubmissionResultPayload {
    Success {
        #[serde(rename = "resetForm")]
        reset_form: bool,
    },
    Error {
        #[serde(rename = "formErrors")]
        form_errors: Vec<String>,

        #[serde(rename = "initialValue", default)]
        initial_value: BTreeMap<String, String>,
    },
}

impl From<SubmissionResultPayload> for SubmissionResult {
    fn from(payload: SubmissionResultPayload) -> Self {
        match payload {
            SubmissionResultPayload::Success { reset_form } => Self::Success { reset_form },
            SubmissionResultPayload::Error {
                form_errors,
                initial_value,
            } => Self::Error {
                form_errors,
                initial_value,
            },
        }
    }
}

impl From<SubmissionResult> for SubmissionResultPayload {
    fn from(result: SubmissionResult) -> Self {
        match result {
            SubmissionResult::Success { reset_form } => Self::Success { reset_form },
            SubmissionResult::Error {
                form_errors,
                initial_value,
            } => Self::Error {
                form_errors,
                initial_value,
            },
        }
    }
}
