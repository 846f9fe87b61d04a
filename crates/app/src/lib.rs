//! Shared application domain and persistence modules for the SokoNova cart
//! service.

pub mod context;
pub mod domain;
pub mod store;
