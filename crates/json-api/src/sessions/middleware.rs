//! Session middleware.
//!
//! Resolves the `sn_sid` cookie to a signed-in user and records it in the
//! depot. Every cart route works for guests, so an unknown, absent, or
//! unreadable session lets the request proceed unauthenticated; only the
//! handlers that require a user (migrate) turn that into a 401.

use std::sync::Arc;

use salvo::prelude::*;
use tracing::error;

use crate::{extensions::DepotExt as _, identity::SESSION_COOKIE, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let session_id = req
        .cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string());

    if let Some(session_id) = session_id {
        let state = match depot.obtain::<Arc<State>>() {
            Ok(state) => Arc::clone(state),
            Err(_error) => {
                res.render(StatusError::internal_server_error());

                return;
            }
        };

        match state.app.sessions.resolve(&session_id).await {
            Ok(Some(user)) => depot.insert_user_id(user),
            Ok(None) => {}
            Err(error) => {
                // Fail open: a session-store hiccup degrades the caller to a
                // guest instead of failing the request.
                error!("failed to resolve session: {error}");
            }
        }
    }

    ctrl.call_next(req, depot, res).await;
}
