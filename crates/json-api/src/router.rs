//! App Router

use salvo::Router;

use crate::{carts, sessions};

/// Cart routes, all behind the session-resolving middleware.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .hoop(sessions::middleware::handler)
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .post(carts::add::handler)
                .delete(carts::remove::handler)
                .push(Router::with_path("migrate").post(carts::migrate::handler)),
        )
}
