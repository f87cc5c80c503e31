//! Cart Records
//!
//! Wire shapes of the cart query and mutation payloads.

use jiff::{Timestamp, civil::DateTime, tz::TimeZone};
use serde::{Deserialize, Serialize};

use crate::domain::carts::{
    errors::CartsServiceError,
    models::{Cart, CartId, CartLineItem, LineItemId, SelectedOption},
    options::CartSelectedOptionsInput,
};

#[derive(Debug, Deserialize)]
pub(super) struct CartQueryRecord {
    pub site: SiteRecord,
}

#[derive(Debug, Deserialize)]
pub(super) struct SiteRecord {
    pub cart: Option<CartRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CartRecord {
    pub entity_id: String,
    pub currency_code: String,
    pub line_items: LineItemsRecord,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LineItemsRecord {
    #[serde(default)]
    pub physical_items: Vec<LineItemRecord>,

    #[serde(default)]
    pub digital_items: Vec<LineItemRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LineItemRecord {
    pub entity_id: String,
    pub product_entity_id: i64,
    pub variant_entity_id: Option<i64>,
    pub name: String,
    pub quantity: u32,

    #[serde(default)]
    pub selected_options: Vec<SelectedOptionRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "__typename")]
pub(super) enum SelectedOptionRecord {
    #[serde(rename = "CartSelectedMultipleChoiceOption", rename_all = "camelCase")]
    MultipleChoice { entity_id: i64, value_entity_id: i64 },

    #[serde(rename = "CartSelectedCheckboxOption", rename_all = "camelCase")]
    Checkbox { entity_id: i64, value_entity_id: i64 },

    #[serde(rename = "CartSelectedNumberFieldOption", rename_all = "camelCase")]
    NumberField { entity_id: i64, number: f64 },

    #[serde(rename = "CartSelectedTextFieldOption", rename_all = "camelCase")]
    TextField { entity_id: i64, text: String },

    #[serde(rename = "CartSelectedMultiLineTextFieldOption", rename_all = "camelCase")]
    MultiLineTextField { entity_id: i64, text: String },

    #[serde(rename = "CartSelectedDateFieldOption", rename_all = "camelCase")]
    DateField { entity_id: i64, date: DateRecord },

    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Deserialize)]
pub(super) struct DateRecord {
    pub utc: String,
}

impl TryFrom<CartRecord> for Cart {
    type Error = CartsServiceError;

    fn try_from(record: CartRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            entity_id: CartId::new(record.entity_id),
            currency_code: record.currency_code,
            physical_items: into_line_items(record.line_items.physical_items)?,
            digital_items: into_line_items(record.line_items.digital_items)?,
        })
    }
}

fn into_line_items(records: Vec<LineItemRecord>) -> Result<Vec<CartLineItem>, CartsServiceError> {
    records.into_iter().map(CartLineItem::try_from).collect()
}

impl TryFrom<LineItemRecord> for CartLineItem {
    type Error = CartsServiceError;

    fn try_from(record: LineItemRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            entity_id: LineItemId::new(record.entity_id),
            product_entity_id: record.product_entity_id,
            variant_entity_id: record.variant_entity_id,
            name: record.name,
            quantity: record.quantity,
            selected_options: record
                .selected_options
                .into_iter()
                .map(SelectedOption::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<SelectedOptionRecord> for SelectedOption {
    type Error = CartsServiceError;

    fn try_from(record: SelectedOptionRecord) -> Result<Self, Self::Error> {
        Ok(match record {
            SelectedOptionRecord::MultipleChoice {
                entity_id,
                value_entity_id,
            } => Self::MultipleChoice {
                option_entity_id: entity_id,
                option_value_entity_id: value_entity_id,
            },
            SelectedOptionRecord::Checkbox {
                entity_id,
                value_entity_id,
            } => Self::Checkbox {
                option_entity_id: entity_id,
                option_value_entity_id: value_entity_id,
            },
            SelectedOptionRecord::NumberField { entity_id, number } => Self::NumberField {
                option_entity_id: entity_id,
                number,
            },
            SelectedOptionRecord::TextField { entity_id, text } => Self::TextField {
                option_entity_id: entity_id,
                text,
            },
            SelectedOptionRecord::MultiLineTextField { entity_id, text } => {
                Self::MultiLineTextField {
                    option_entity_id: entity_id,
                    text,
                }
            }
            SelectedOptionRecord::DateField { entity_id, date } => Self::DateField {
                option_entity_id: entity_id,
                date: parse_utc(&date.utc).map_err(|source| CartsServiceError::InvalidDate {
                    value: date.utc.clone(),
                    source,
                })?,
            },
            SelectedOptionRecord::Unrecognized => Self::Unrecognized,
        })
    }
}

/// Parse a raw UTC date value; values without an offset are read as UTC.
fn parse_utc(raw: &str) -> Result<Timestamp, jiff::Error> {
    raw.parse::<Timestamp>().or_else(|error| {
        raw.parse::<DateTime>()
            .and_then(|datetime| datetime.to_zoned(TimeZone::UTC))
            .map(|zoned| zoned.timestamp())
            .map_err(|_ignored| error)
    })
}

#[derive(Debug, Serialize)]
pub(super) struct MutationVariables<I> {
    pub input: I,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateLineItemInput<'a> {
    pub cart_entity_id: &'a str,
    pub line_item_entity_id: &'a str,
    pub data: UpdateLineItemData<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateLineItemData<'a> {
    pub line_item: LineItemInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LineItemInput<'a> {
    pub quantity: i64,
    pub product_entity_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_entity_id: Option<i64>,

    pub selected_options: &'a CartSelectedOptionsInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DeleteLineItemInput<'a> {
    pub cart_entity_id: &'a str,
    pub line_item_entity_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct CartMutationRecord<P> {
    pub cart: P,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateLineItemPayload {
    pub update_cart_line_item: Option<MutatedCartPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DeleteLineItemPayload {
    pub delete_cart_line_item: Option<MutatedCartPayload>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MutatedCartPayload {
    pub cart: Option<MutatedCartRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MutatedCartRecord {
    #[expect(dead_code, reason = "selected so the mutation returns a non-empty cart")]
    pub entity_id: String,
}
