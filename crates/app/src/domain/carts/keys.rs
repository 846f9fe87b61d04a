//! Cart Keys
//!
//! Every cart record is addressed by exactly one key. Guests are identified by
//! a random [`AnonKey`] carried in a cookie; signed-in shoppers by their
//! [`UserId`]. All guest records live under the single `sn:cart:anon:`
//! namespace.

use std::fmt;

use crate::domain::sessions::models::UserId;

/// Random opaque token identifying a guest browser across requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnonKey(String);

impl AnonKey {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity a cart record is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CartKey {
    /// Guest cart, namespaced by the anonymous cookie token.
    Anonymous(AnonKey),

    /// Authenticated user's cart.
    User(UserId),
}

impl CartKey {
    /// The key the record lives under in the store.
    #[must_use]
    pub fn storage_key(&self) -> String {
        match self {
            Self::Anonymous(anon) => format!("sn:cart:anon:{anon}"),
            Self::User(user) => format!("sn:cart:user:{user}"),
        }
    }
}
