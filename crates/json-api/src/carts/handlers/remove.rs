//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, handlers::add::CartMutationResponse},
    extensions::DepotExt as _,
    identity::resolve_cart_key,
    state::State,
};

/// Remove Cart Item Handler
///
/// Removes one product from the caller's cart (`?productId=...`) or empties
/// it outright (`?clear=1`).
#[endpoint(
    tags("cart"),
    summary = "Remove Item or Clear Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Neither productId nor clear given"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartMutationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let key = resolve_cart_key(req, depot, res, state.cookies);

    let product_id = req.query::<String>("productId");
    let clear = req
        .query::<String>("clear")
        .is_some_and(|flag| flag == "1");

    let items = if let Some(product_id) = product_id {
        state
            .app
            .carts
            .remove_item(&key, &product_id)
            .await
            .map_err(into_status_error)?
    } else if clear {
        state
            .app
            .carts
            .clear(&key)
            .await
            .map_err(into_status_error)?
    } else {
        return Err(StatusError::bad_request().brief("productId or clear=1 is required"));
    };

    Ok(Json(CartMutationResponse::applied(items)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use sokonova_app::domain::carts::{AnonKey, CartKey, CartLine, MockCartsService};

    use crate::test_helpers::carts_service;

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("api/cart").delete(handler))
    }

    #[tokio::test]
    async fn test_remove_item_by_product_id() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .withf(|key, product_id| {
                *key == CartKey::Anonymous(AnonKey::new("abc123")) && product_id == "sku-1"
            })
            .return_once(|_, _| Ok(vec![CartLine::new("sku-2", 4)]));

        carts.expect_clear().never();

        let mut res = TestClient::delete("http://example.com/api/cart?productId=sku-1")
            .add_header(salvo::http::header::COOKIE, "cart_anon_key=abc123", true)
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartMutationResponse = res.take_json().await?;

        assert!(body.ok, "mutation should report ok");
        assert_eq!(body.items.len(), 1);
        assert_eq!(body.items[0].product_id, "sku-2");

        Ok(())
    }

    #[tokio::test]
    async fn test_clear_empties_the_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_clear()
            .once()
            .return_once(|_| Ok(Vec::new()));

        carts.expect_remove_item().never();

        let mut res = TestClient::delete("http://example.com/api/cart?clear=1")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartMutationResponse = res.take_json().await?;

        assert!(body.items.is_empty(), "cleared cart must be empty");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_without_parameters_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_remove_item().never();
        carts.expect_clear().never();

        let res = TestClient::delete("http://example.com/api/cart")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
