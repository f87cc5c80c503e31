//! Selected option encoding.
//!
//! The commerce API has no quantity-only patch for a line item: every
//! quantity change re-submits the line item's full option selection, grouped
//! by option kind.

use jiff::Timestamp;
use serde::Serialize;

use crate::domain::carts::models::SelectedOption;

const ISO_8601_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Option selections grouped by kind, as expected by the line item mutation.
///
/// Kinds with no selections are omitted rather than sent as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSelectedOptionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_choices: Option<Vec<ValueOptionInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkboxes: Option<Vec<ValueOptionInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_fields: Option<Vec<NumberFieldOptionInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_fields: Option<Vec<TextFieldOptionInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_line_text_fields: Option<Vec<TextFieldOptionInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_fields: Option<Vec<DateFieldOptionInput>>,
}

impl CartSelectedOptionsInput {
    /// Number of encoded selections across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.multiple_choices.as_ref().map_or(0, Vec::len)
            + self.checkboxes.as_ref().map_or(0, Vec::len)
            + self.number_fields.as_ref().map_or(0, Vec::len)
            + self.text_fields.as_ref().map_or(0, Vec::len)
            + self.multi_line_text_fields.as_ref().map_or(0, Vec::len)
            + self.date_fields.as_ref().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Multiple choice or checkbox selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueOptionInput {
    pub option_entity_id: i64,
    pub option_value_entity_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFieldOptionInput {
    pub option_entity_id: i64,
    pub number: f64,
}

/// Single or multi-line text selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFieldOptionInput {
    pub option_entity_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFieldOptionInput {
    pub option_entity_id: i64,
    pub date: String,
}

/// Group selected options by kind, keeping their relative order.
///
/// [`SelectedOption::Unrecognized`] selections are dropped.
#[must_use]
pub fn encode_selected_options(options: &[SelectedOption]) -> CartSelectedOptionsInput {
    options
        .iter()
        .fold(CartSelectedOptionsInput::default(), |mut input, option| {
            match option {
                SelectedOption::MultipleChoice {
                    option_entity_id,
                    option_value_entity_id,
                } => input
                    .multiple_choices
                    .get_or_insert_with(Vec::new)
                    .push(ValueOptionInput {
                        option_entity_id: *option_entity_id,
                        option_value_entity_id: *option_value_entity_id,
                    }),
                SelectedOption::Checkbox {
                    option_entity_id,
                    option_value_entity_id,
                } => input
                    .checkboxes
                    .get_or_insert_with(Vec::new)
                    .push(ValueOptionInput {
                        option_entity_id: *option_entity_id,
                        option_value_entity_id: *option_value_entity_id,
                    }),
                SelectedOption::NumberField {
                    option_entity_id,
                    number,
                } => input
                    .number_fields
                    .get_or_insert_with(Vec::new)
                    .push(NumberFieldOptionInput {
                        option_entity_id: *option_entity_id,
                        number: *number,
                    }),
                SelectedOption::TextField {
                    option_entity_id,
                    text,
                } => input
                    .text_fields
                    .get_or_insert_with(Vec::new)
                    .push(TextFieldOptionInput {
                        option_entity_id: *option_entity_id,
                        text: text.clone(),
                    }),
                SelectedOption::MultiLineTextField {
                    option_entity_id,
                    text,
                } => input
                    .multi_line_text_fields
                    .get_or_insert_with(Vec::new)
                    .push(TextFieldOptionInput {
                        option_entity_id: *option_entity_id,
                        text: text.clone(),
                    }),
                SelectedOption::DateField {
                    option_entity_id,
                    date,
                } => input
                    .date_fields
                    .get_or_insert_with(Vec::new)
                    .push(DateFieldOptionInput {
                        option_entity_id: *option_entity_id,
                        date: format_iso_date(*date),
                    }),
                SelectedOption::Unrecognized => {}
            }

            input
        })
}

/// Format a timestamp as UTC ISO-8601 with millisecond precision.
#[must_use]
pub fn format_iso_date(date: Timestamp) -> String {
    date.strftime(ISO_8601_MILLIS).to_string()
}
