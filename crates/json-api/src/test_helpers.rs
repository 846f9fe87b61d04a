//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use sokonova_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService,
        sessions::{MockSessionsService, UserId},
    },
};

use crate::{extensions::DepotExt as _, identity::CookieSettings, state::State};

pub(crate) fn test_user() -> UserId {
    UserId::new("user_42")
}

/// Pretend the session middleware resolved [`test_user`].
#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_id(test_user());
    ctrl.call_next(req, depot, res).await;
}

fn strict_sessions_mock() -> MockSessionsService {
    let mut sessions = MockSessionsService::new();

    sessions.expect_resolve().never();

    sessions
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_items().never();
    carts.expect_add_item().never();
    carts.expect_remove_item().never();
    carts.expect_clear().never();
    carts.expect_merge_guest_cart().never();

    carts
}

fn test_cookie_settings() -> CookieSettings {
    CookieSettings { secure: false }
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Arc::new(State::new(
        AppContext {
            carts: Arc::new(carts),
            sessions: Arc::new(strict_sessions_mock()),
        },
        test_cookie_settings(),
    ))
}

pub(crate) fn state_with_sessions(sessions: MockSessionsService) -> Arc<State> {
    Arc::new(State::new(
        AppContext {
            carts: Arc::new(strict_carts_mock()),
            sessions: Arc::new(sessions),
        },
        test_cookie_settings(),
    ))
}

/// Route served with the given carts mock, as an unauthenticated caller.
pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .push(route),
    )
}

/// Route served with the given carts mock, as a signed-in caller.
pub(crate) fn signed_in_carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .hoop(inject_user)
            .push(route),
    )
}
