//! Carts

pub mod errors;
pub mod models;
pub mod options;
mod queries;
mod records;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
