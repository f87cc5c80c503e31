//! Storefront GraphQL HTTP client.

use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    time::Duration,
};

use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::commerce::{CommerceError, GraphqlRequest, GraphqlResponse};

/// Default domain hosting per-store GraphQL endpoints.
pub const DEFAULT_API_DOMAIN: &str = "mybigcommerce.com";

const CUSTOMER_ACCESS_TOKEN_HEADER: &str = "X-Bc-Customer-Access-Token";

const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for connecting to the storefront GraphQL API.
#[derive(Clone)]
pub struct CommerceConfig {
    /// Store hash identifying the store, e.g. `"abc123"`.
    pub store_hash: String,

    /// Channel the storefront belongs to.
    pub channel_id: String,

    /// Storefront (customer impersonation) token sent as a bearer token.
    pub storefront_token: String,

    /// Domain hosting the per-store endpoints.
    pub api_domain: String,

    /// Full endpoint URL, overriding the one derived from the store hash.
    pub endpoint: Option<String>,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl CommerceConfig {
    /// GraphQL endpoint the client posts to.
    #[must_use]
    pub fn graphql_endpoint(&self) -> String {
        if let Some(endpoint) = &self.endpoint {
            return endpoint.clone();
        }

        format!(
            "https://store-{}-{}.{}/graphql",
            self.store_hash, self.channel_id, self.api_domain
        )
    }
}

impl Debug for CommerceConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CommerceConfig")
            .field("store_hash", &self.store_hash)
            .field("channel_id", &self.channel_id)
            .field("storefront_token", &"<redacted>")
            .field("api_domain", &self.api_domain)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Token identifying a signed-in shopper, forwarded on every request.
#[derive(Clone, PartialEq, Eq)]
pub struct CustomerAccessToken(String);

impl CustomerAccessToken {
    /// Wrap a raw token value, rejecting blank input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();

        if value.trim().is_empty() {
            return None;
        }

        Some(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for CustomerAccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("CustomerAccessToken(<redacted>)")
    }
}

/// HTTP client for storefront GraphQL operations.
#[derive(Debug, Clone)]
pub struct CommerceClient {
    config: CommerceConfig,
    endpoint: String,
    http: Client,
}

impl CommerceClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: CommerceConfig) -> Result<Self, CommerceError> {
        let http = Client::builder()
            .user_agent(CLIENT_USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            endpoint: config.graphql_endpoint(),
            config,
            http,
        })
    }

    /// Endpoint requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a GraphQL document and decode its `data`.
    ///
    /// Every call goes to the network; nothing is cached and nothing is
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-2xx status, GraphQL errors in
    /// the response body, or a body without data.
    pub async fn fetch<V, T>(
        &self,
        document: &str,
        variables: V,
        customer: Option<&CustomerAccessToken>,
    ) -> Result<T, CommerceError>
    where
        V: Serialize + Send,
        T: DeserializeOwned + Send,
    {
        let body = GraphqlRequest {
            query: document,
            variables,
        };

        let mut request = self
            .http
            .post(&self.endpoint)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.config.storefront_token),
            )
            .json(&body);

        if let Some(customer) = customer {
            request = request.header(CUSTOMER_ACCESS_TOKEN_HEADER, customer.as_str());
        }

        debug!(endpoint = %self.endpoint, "sending commerce GraphQL request");

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await;

            return Err(unexpected_status(status, text));
        }

        let parsed: GraphqlResponse<T> = response.json().await?;

        parsed.into_result()
    }
}

/// Describe a non-2xx response, keeping whatever body could be read.
fn unexpected_status<E: Display>(status: StatusCode, body: Result<String, E>) -> CommerceError {
    let text = body.unwrap_or_else(|error| {
        warn!(%status, "failed to read commerce error response body: {error}");

        String::new()
    });

    CommerceError::UnexpectedResponse(format!(
        "graphql request failed with status {status}: {text}"
    ))
}
