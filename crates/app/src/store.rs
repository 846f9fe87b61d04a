//! Cart store connection management.

use redis::{RedisError, aio::ConnectionManager};

/// Connect to the key-value store backing carts and sessions.
///
/// The returned [`ConnectionManager`] is cheap to clone and reconnects on its
/// own; it is built once at startup and injected into every component that
/// needs it.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the initial connection cannot be
/// established.
pub async fn connect(redis_url: &str) -> Result<ConnectionManager, RedisError> {
    let client = redis::Client::open(redis_url)?;

    ConnectionManager::new(client).await
}
