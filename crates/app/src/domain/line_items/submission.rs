//! Line item form submissions.

use std::{collections::BTreeMap, num::ParseIntError};

use thiserror::Error;

use crate::domain::carts::models::LineItemId;

/// Raw form fields as submitted, keyed by field name.
pub type SubmittedFields = BTreeMap<String, String>;

/// Action a line item form submission requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Increment,
    Decrement,
    Delete,
    Unrecognized(String),
}

impl From<&str> for Intent {
    fn from(value: &str) -> Self {
        match value {
            "increment" => Self::Increment,
            "decrement" => Self::Decrement,
            "delete" => Self::Delete,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("missing required field {0:?}")]
    MissingField(&'static str),

    #[error("invalid quantity {value:?}")]
    InvalidQuantity {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// A validated line item form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub intent: Intent,
    pub id: LineItemId,

    /// Quantity shown to the shopper before the action, used as the baseline.
    pub quantity: i64,
}

impl Submission {
    /// Validate raw form fields.
    ///
    /// Blank values count as missing.
    ///
    /// # Errors
    ///
    /// Returns an error when `intent`, `id` or `quantity` is missing, or when
    /// `quantity` is not an integer.
    pub fn parse(fields: &SubmittedFields) -> Result<Self, SubmissionError> {
        let intent = required(fields, "intent")?;
        let id = required(fields, "id")?;
        let quantity = required(fields, "quantity")?;

        let quantity = quantity
            .parse::<i64>()
            .map_err(|source| SubmissionError::InvalidQuantity {
                value: quantity.to_string(),
                source,
            })?;

        Ok(Self {
            intent: Intent::from(intent),
            id: LineItemId::new(id),
            quantity,
        })
    }
}

fn required<'a>(fields: &'a SubmittedFields, name: &'static str) -> Result<&'a str, SubmissionError> {
    fields
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .ok_or(SubmissionError::MissingField(name))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> SubmittedFields {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn parses_known_intents() -> TestResult {
        for (raw, intent) in [
            ("increment", Intent::Increment),
            ("decrement", Intent::Decrement),
            ("delete", Intent::Delete),
        ] {
            let submission = Submission::parse(&fields(&[
                ("intent", raw),
                ("id", "line-1"),
                ("quantity", "2"),
            ]))?;

            assert_eq!(
                submission,
                Submission {
                    intent,
                    id: LineItemId::new("line-1"),
                    quantity: 2,
                }
            );
        }

        Ok(())
    }

    #[test]
    fn unknown_intent_is_kept_as_unrecognized() -> TestResult {
        let submission = Submission::parse(&fields(&[
            ("intent", "duplicate"),
            ("id", "line-1"),
            ("quantity", "1"),
        ]))?;

        assert_eq!(
            submission.intent,
            Intent::Unrecognized("duplicate".to_string())
        );

        Ok(())
    }

    #[test]
    fn missing_id_is_rejected() {
        let result = Submission::parse(&fields(&[("intent", "increment"), ("quantity", "1")]));

        assert!(
            matches!(result, Err(SubmissionError::MissingField("id"))),
            "expected MissingField(id), got {result:?}"
        );
    }

    #[test]
    fn blank_intent_is_rejected() {
        let result = Submission::parse(&fields(&[
            ("intent", "  "),
            ("id", "line-1"),
            ("quantity", "1"),
        ]));

        assert!(
            matches!(result, Err(SubmissionError::MissingField("intent"))),
            "expected MissingField(intent), got {result:?}"
        );
    }

    #[test]
    fn non_integer_quantity_is_rejected() {
        let result = Submission::parse(&fields(&[
            ("intent", "increment"),
            ("id", "line-1"),
            ("quantity", "two"),
        ]));

        assert!(
            matches!(result, Err(SubmissionError::InvalidQuantity { .. })),
            "expected InvalidQuantity, got {result:?}"
        );
    }

    #[test]
    fn negative_quantity_is_accepted_as_baseline() -> TestResult {
        let submission = Submission::parse(&fields(&[
            ("intent", "decrement"),
            ("id", "line-1"),
            ("quantity", "-1"),
        ]))?;

        assert_eq!(submission.quantity, -1);

        Ok(())
    }
}
