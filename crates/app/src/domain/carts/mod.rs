//! Carts

pub mod errors;
pub mod keys;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::{CartStoreError, CartsServiceError};
pub use keys::{AnonKey, CartKey};
pub use models::CartLine;
pub use repository::{CartsRepository, MockCartsRepository, RedisCartsRepository};
pub use service::{CartsService, MockCartsService, RedisCartsService};
