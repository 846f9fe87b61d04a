//! Session resolution

pub(crate) mod middleware;
