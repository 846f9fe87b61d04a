//! Cart Handlers

pub(crate) mod add;
pub(crate) mod get;
pub(crate) mod migrate;
pub(crate) mod remove;
