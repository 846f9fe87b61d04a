//! Carts service errors.

use thiserror::Error;

/// Failure while reading or writing a cart record.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// Underlying store command failed.
    #[error("cart store error")]
    Redis(#[from] redis::RedisError),

    /// Cart record could not be encoded for storage.
    #[error("cart record encoding error")]
    Encode(#[from] serde_json::Error),
}

/// Cart service error variants.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// A product identifier was empty.
    #[error("missing product id")]
    MissingProductId,

    /// A quantity below 1 was supplied.
    #[error("invalid quantity")]
    InvalidQuantity,

    /// Underlying store failure.
    #[error("storage error")]
    Store(#[from] CartStoreError),
}
