//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    domain::{
        carts::{CartsService, RedisCartsRepository, RedisCartsService},
        sessions::{RedisSessionsService, SessionsService},
    },
    store,
};

/// Startup failure variants.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// Could not reach the cart store.
    #[error("failed to connect to the cart store")]
    Store(#[source] redis::RedisError),
}

/// Wires the store connection into the domain services.
///
/// Owns the single [`redis::aio::ConnectionManager`] for the process; every
/// component that talks to the store receives it from here rather than from
/// any module-level handle.
#[derive(Clone)]
pub struct AppContext {
    /// Cart read/write/merge operations.
    pub carts: Arc<dyn CartsService>,

    /// Session-id to user-id resolution.
    pub sessions: Arc<dyn SessionsService>,
}

impl AppContext {
    /// Build the application context from a store URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the store connection cannot be established.
    pub async fn from_redis_url(url: &str) -> Result<Self, AppInitError> {
        let conn = store::connect(url).await.map_err(AppInitError::Store)?;

        let carts_repository = Arc::new(RedisCartsRepository::new(conn.clone()));

        Ok(Self {
            carts: Arc::new(RedisCartsService::new(carts_repository)),
            sessions: Arc::new(RedisSessionsService::new(conn)),
        })
    }
}
