//! Test support.

mod fixtures;

pub(crate) use fixtures::*;
