//! Sessions
//!
//! Read-only view of the sessions an external identity service writes to the
//! store. The cart service only ever resolves a session id to a user id; it
//! never creates or destroys sessions.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::SessionsServiceError;
pub use models::UserId;
pub use service::{MockSessionsService, RedisSessionsService, SessionsService};
