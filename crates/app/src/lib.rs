//! Storefront cart domain and commerce API modules.

pub mod commerce;
pub mod context;
pub mod domain;

#[cfg(test)]
mod test;
