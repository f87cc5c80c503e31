//! Command line and environment settings for the commerce API.

use std::time::Duration;

use clap::Args;

use crate::commerce::{CommerceConfig, DEFAULT_API_DOMAIN};

/// Storefront GraphQL API settings shared by every binary.
#[derive(Debug, Args)]
pub struct CommerceArgs {
    /// Store hash
    #[arg(long, env = "COMMERCE_STORE_HASH")]
    pub store_hash: String,

    /// Storefront channel id
    #[arg(long, env = "COMMERCE_CHANNEL_ID", default_value = "1")]
    pub channel_id: String,

    /// Storefront API token
    #[arg(long, env = "COMMERCE_STOREFRONT_TOKEN", hide_env_values = true)]
    pub storefront_token: String,

    /// Domain hosting the storefront GraphQL API
    #[arg(long, env = "COMMERCE_API_DOMAIN", default_value = DEFAULT_API_DOMAIN)]
    pub api_domain: String,

    /// Full GraphQL endpoint URL, overriding the derived one
    #[arg(long, env = "COMMERCE_GRAPHQL_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "COMMERCE_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub timeout_seconds: u64,
}

impl From<&CommerceArgs> for CommerceConfig {
    fn from(args: &CommerceArgs) -> Self {
        Self {
            store_hash: args.store_hash.clone(),
            channel_id: args.channel_id.clone(),
            storefront_token: args.storefront_token.clone(),
            api_domain: args.api_domain.clone(),
            endpoint: args.endpoint.clone(),
            timeout: Duration::from_secs(args.timeout_seconds),
        }
    }
}
