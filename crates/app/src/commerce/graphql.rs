//! GraphQL request and response envelopes.

use serde::{Deserialize, Serialize};

use crate::commerce::CommerceError;

/// Request body posted to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// A single entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GraphqlError {
    pub message: String,
}

/// Response envelope returned by the GraphQL endpoint.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,

    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Collapse the envelope into its data, or the errors it reports.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Graphql`] when the `errors` array is not
    /// empty, and [`CommerceError::MissingData`] when neither data nor errors
    /// are present.
    pub fn into_result(self) -> Result<T, CommerceError> {
        if !self.errors.is_empty() {
            return Err(CommerceError::Graphql(
                self.errors.into_iter().map(|error| error.message).collect(),
            ));
        }

        self.data.ok_or(CommerceError::MissingData)
    }
}
