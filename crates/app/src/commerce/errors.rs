//! Commerce transport errors.

use thiserror::Error;

/// Errors that can occur when talking to the storefront GraphQL API.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// An HTTP transport or body decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("unexpected response from commerce API: {0}")]
    UnexpectedResponse(String),

    /// The API answered with one or more GraphQL errors.
    #[error("{}", .0.join("; "))]
    Graphql(Vec<String>),

    /// The API answered without `data` and without `errors`.
    #[error("commerce API response contained no data")]
    MissingData,
}
