//! Domain modules.

pub mod carts;
pub mod sessions;
