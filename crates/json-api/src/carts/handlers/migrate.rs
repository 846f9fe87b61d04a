//! Migrate Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, handlers::add::CartMutationResponse},
    extensions::DepotExt as _,
    identity::resolve_anonymous_key,
    state::State,
};

/// Migrate Cart Handler
///
/// Folds the guest cart of the current browser into the signed-in user's
/// cart, exactly once at sign-in. Quantities for products present in both
/// carts are summed; the guest record is retired.
#[endpoint(
    tags("cart"),
    summary = "Merge Guest Cart into User Cart",
    responses(
        (status_code = StatusCode::OK, description = "Carts merged"),
        (status_code = StatusCode::UNAUTHORIZED, description = "No authenticated session"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartMutationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    // Authorization is checked before any store access.
    let user = depot.user_id_or_401()?.clone();

    let anon = resolve_anonymous_key(req, res, state.cookies);

    let items = state
        .app
        .carts
        .merge_guest_cart(&anon, &user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartMutationResponse::applied(items)))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::COOKIE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use sokonova_app::domain::carts::{AnonKey, CartLine, MockCartsService};

    use crate::test_helpers::{carts_service, signed_in_carts_service, test_user};

    use super::*;

    fn route() -> Router {
        Router::with_path("api/cart/migrate").post(handler)
    }

    #[tokio::test]
    async fn test_migrate_unauthenticated_returns_401_without_store_access() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_merge_guest_cart().never();
        carts.expect_get_items().never();

        let res = TestClient::post("http://example.com/api/cart/migrate")
            .add_header(COOKIE, "cart_anon_key=abc123", true)
            .send(&carts_service(carts, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_migrate_merges_guest_cart_into_user_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_merge_guest_cart()
            .once()
            .withf(|anon, user| *anon == AnonKey::new("abc123") && *user == test_user())
            .return_once(|_, _| {
                Ok(vec![CartLine::new("sku-a", 5), CartLine::new("sku-b", 1)])
            });

        let mut res = TestClient::post("http://example.com/api/cart/migrate")
            .add_header(COOKIE, "cart_anon_key=abc123", true)
            .send(&signed_in_carts_service(carts, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartMutationResponse = res.take_json().await?;

        assert!(body.ok, "merge should report ok");
        assert_eq!(body.items.len(), 2);
        assert_eq!(body.items[0].product_id, "sku-a");
        assert_eq!(body.items[0].qty, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_migrate_without_anon_cookie_still_merges_a_fresh_empty_key() -> TestResult {
        // A caller with no guest history merges an empty cart: a no-op on the
        // user cart, which keeps repeat migrations idempotent.
        let mut carts = MockCartsService::new();

        carts
            .expect_merge_guest_cart()
            .once()
            .withf(|_, user| *user == test_user())
            .return_once(|_, _| Ok(vec![CartLine::new("sku-a", 5)]));

        let res = TestClient::post("http://example.com/api/cart/migrate")
            .send(&signed_in_carts_service(carts, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
