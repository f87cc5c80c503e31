//! Cart Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Cart identifier issued by the commerce platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(String);

impl CartId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Line item identifier issued by the commerce platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(String);

impl LineItemId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LineItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub entity_id: CartId,
    pub currency_code: String,
    pub physical_items: Vec<CartLineItem>,
    pub digital_items: Vec<CartLineItem>,
}

impl Cart {
    /// All line items, physical first.
    pub fn line_items(&self) -> impl Iterator<Item = &CartLineItem> {
        self.physical_items.iter().chain(&self.digital_items)
    }

    /// Find a line item by id across physical and digital items.
    #[must_use]
    pub fn find_line_item(&self, id: &LineItemId) -> Option<&CartLineItem> {
        self.line_items().find(|item| item.entity_id == *id)
    }
}

/// Cart Line Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub entity_id: LineItemId,
    pub product_entity_id: i64,
    pub variant_entity_id: Option<i64>,
    pub name: String,
    pub quantity: u32,
    pub selected_options: Vec<SelectedOption>,
}

/// A shopper's chosen value for a configurable product option.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedOption {
    MultipleChoice {
        option_entity_id: i64,
        option_value_entity_id: i64,
    },
    Checkbox {
        option_entity_id: i64,
        option_value_entity_id: i64,
    },
    NumberField {
        option_entity_id: i64,
        number: f64,
    },
    TextField {
        option_entity_id: i64,
        text: String,
    },
    MultiLineTextField {
        option_entity_id: i64,
        text: String,
    },
    DateField {
        option_entity_id: i64,
        date: Timestamp,
    },
    /// An option kind this storefront does not know how to re-submit.
    Unrecognized,
}
