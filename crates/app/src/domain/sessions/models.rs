//! Session Models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored shape of a session record, `{"userId": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The signed-in user this session belongs to.
    #[serde(rename = "userId")]
    pub user_id: String,
}
