//! Headless commerce GraphQL transport.

mod args;
mod client;
mod errors;
mod graphql;

pub use args::CommerceArgs;
pub use client::{CommerceClient, CommerceConfig, CustomerAccessToken, DEFAULT_API_DOMAIN};
pub use errors::CommerceError;
pub use graphql::{GraphqlError, GraphqlRequest, GraphqlResponse};
