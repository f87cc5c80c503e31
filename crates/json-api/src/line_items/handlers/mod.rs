//! Line Item Handlers

pub(crate) mod update;
