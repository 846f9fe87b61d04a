//! Carts Repository
//!
//! Key-value access to cart records. One record per [`CartKey`], holding a
//! JSON array of cart lines with a 30-day time-to-live that is refreshed on
//! every write. An absent key reads as an empty cart, and so does a record
//! that no longer parses — a cart read must never fail a request over a
//! corrupt value.

use async_trait::async_trait;
use mockall::automock;
use redis::aio::ConnectionManager;
use tracing::warn;

use crate::domain::carts::{errors::CartStoreError, keys::CartKey, models::CartLine};

/// Seconds a cart record lives without a write.
const CART_TTL_SECONDS: u64 = 60 * 60 * 24 * 30;

/// Persistence seam for cart records.
#[automock]
#[async_trait]
pub trait CartsRepository: Send + Sync {
    /// Read the lines stored under `key`; absent or unreadable records read
    /// as empty.
    async fn get(&self, key: &CartKey) -> Result<Vec<CartLine>, CartStoreError>;

    /// Store `lines` under `key`, resetting the record's time-to-live.
    async fn put(&self, key: &CartKey, lines: &[CartLine]) -> Result<(), CartStoreError>;

    /// Remove the record under `key` outright.
    async fn delete(&self, key: &CartKey) -> Result<(), CartStoreError>;
}

/// Redis-backed [`CartsRepository`].
#[derive(Clone)]
pub struct RedisCartsRepository {
    conn: ConnectionManager,
}

impl std::fmt::Debug for RedisCartsRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCartsRepository").finish_non_exhaustive()
    }
}

impl RedisCartsRepository {
    #[must_use]
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CartsRepository for RedisCartsRepository {
    async fn get(&self, key: &CartKey) -> Result<Vec<CartLine>, CartStoreError> {
        let mut conn = self.conn.clone();

        let raw: Option<String> = redis::cmd("GET")
            .arg(key.storage_key())
            .query_async(&mut conn)
            .await?;

        Ok(decode_lines(key, raw))
    }

    async fn put(&self, key: &CartKey, lines: &[CartLine]) -> Result<(), CartStoreError> {
        let payload = serde_json::to_string(lines)?;

        let mut conn = self.conn.clone();

        let _: () = redis::cmd("SET")
            .arg(key.storage_key())
            .arg(payload)
            .arg("EX")
            .arg(CART_TTL_SECONDS)
            .query_async(&mut conn)
            .await?;

        Ok(())
    }

    async fn delete(&self, key: &CartKey) -> Result<(), CartStoreError> {
        let mut conn = self.conn.clone();

        let _: () = redis::cmd("DEL")
            .arg(key.storage_key())
            .query_async(&mut conn)
            .await?;

        Ok(())
    }
}

/// Decode a stored cart payload, failing open to an empty cart.
fn decode_lines(key: &CartKey, raw: Option<String>) -> Vec<CartLine> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(lines) => lines,
        Err(error) => {
            warn!(
                key = %key.storage_key(),
                "discarding unreadable cart record: {error}"
            );

            Vec::new()
        }
    }
}
