//! Extension traits

mod depot;
mod session;

pub(crate) use depot::DepotExt as _;
pub(crate) use session::{CartCookieExt as _, CartSessionExt as _};
