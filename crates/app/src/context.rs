//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    commerce::{CommerceClient, CommerceConfig, CommerceError},
    domain::{
        carts::{CartsService, GraphqlCartsService},
        line_items::{ErrorMessages, LineItemsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build commerce client")]
    Commerce(#[source] CommerceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub line_items: Arc<LineItemsService>,
}

impl AppContext {
    /// Build application context talking to the storefront GraphQL API.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn from_commerce_config(
        config: CommerceConfig,
        messages: ErrorMessages,
    ) -> Result<Self, AppInitError> {
        let client = CommerceClient::new(config).map_err(AppInitError::Commerce)?;

        Ok(Self::from_carts_service(
            Arc::new(GraphqlCartsService::new(client)),
            messages,
        ))
    }

    /// Build application context around an existing carts service.
    #[must_use]
    pub fn from_carts_service(carts: Arc<dyn CartsService>, messages: ErrorMessages) -> Self {
        Self {
            line_items: Arc::new(LineItemsService::new(carts.clone(), messages)),
            carts,
        }
    }
}
