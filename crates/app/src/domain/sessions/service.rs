//! Sessions service.

use async_trait::async_trait;
use mockall::automock;
use redis::aio::ConnectionManager;
use tracing::warn;

use crate::domain::sessions::{
    errors::SessionsServiceError,
    models::{SessionRecord, UserId},
};

/// Resolves an opaque session id to the user it belongs to.
#[automock]
#[async_trait]
pub trait SessionsService: Send + Sync {
    /// Look up the session with the given id. `None` means no such session
    /// (or a record we cannot read, which is treated the same way).
    async fn resolve(&self, session_id: &str) -> Result<Option<UserId>, SessionsServiceError>;
}

/// Redis-backed [`SessionsService`], reading `sn:session:<sid>` records.
#[derive(Clone)]
pub struct RedisSessionsService {
    conn: ConnectionManager,
}

impl std::fmt::Debug for RedisSessionsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionsService").finish_non_exhaustive()
    }
}

impl RedisSessionsService {
    #[must_use]
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl SessionsService for RedisSessionsService {
    async fn resolve(&self, session_id: &str) -> Result<Option<UserId>, SessionsServiceError> {
        let mut conn = self.conn.clone();

        let raw: Option<String> = redis::cmd("GET")
            .arg(format!("sn:session:{session_id}"))
            .query_async(&mut conn)
            .await?;

        Ok(raw.and_then(|raw| decode_session(&raw)))
    }
}

fn decode_session(raw: &str) -> Option<UserId> {
    match serde_json::from_str::<SessionRecord>(raw) {
        Ok(record) => Some(UserId::new(record.user_id)),
        Err(error) => {
            warn!("discarding unreadable session record: {error}");

            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_session_record_resolves_to_user() {
        let user = decode_session(r#"{"userId":"user_42"}"#);

        assert_eq!(user, Some(UserId::new("user_42")));
    }

    #[test]
    fn malformed_session_record_resolves_to_no_session() {
        assert_eq!(decode_session("not json"), None);
        assert_eq!(decode_session(r#"{"sid":"abc"}"#), None);
    }
}
