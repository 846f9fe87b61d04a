//! Sessions service errors.

use thiserror::Error;

/// Session resolution error variants.
#[derive(Debug, Error)]
pub enum SessionsServiceError {
    /// Underlying store command failed.
    #[error("session store error")]
    Redis(#[from] redis::RedisError),
}
