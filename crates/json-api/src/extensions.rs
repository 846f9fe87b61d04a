//! Extension traits for HTTP handlers.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use sokonova_app::domain::sessions::UserId;

/// Depot key the session middleware stores the resolved user under.
const USER_ID_KEY: &str = "sokonova::user_id";

/// Helpers for reading request-scoped values out of the depot.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the authenticated user for the rest of the request.
    fn insert_user_id(&mut self, user: UserId);

    /// The authenticated user, when the session middleware resolved one.
    fn user_id(&self) -> Option<&UserId>;

    /// The authenticated user, or a 401 for operations that require one.
    fn user_id_or_401(&self) -> Result<&UserId, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_id(&mut self, user: UserId) {
        self.insert(USER_ID_KEY, user);
    }

    fn user_id(&self) -> Option<&UserId> {
        self.get::<UserId>(USER_ID_KEY).ok()
    }

    fn user_id_or_401(&self) -> Result<&UserId, StatusError> {
        self.user_id()
            .ok_or_else(|| StatusError::unauthorized().brief("Sign-in required"))
    }
}
