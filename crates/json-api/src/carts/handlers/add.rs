//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    carts::{errors::into_status_error, handlers::get::CartLineResponse},
    extensions::DepotExt as _,
    identity::resolve_cart_key,
    state::State,
};

/// Add Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddItemRequest {
    /// The product to add
    #[serde(rename = "productId")]
    pub product_id: String,

    /// How many to add; defaults to 1
    pub qty: Option<u32>,
}

/// Cart Mutation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartMutationResponse {
    /// Whether the mutation was applied
    pub ok: bool,

    /// The cart after the mutation
    pub items: Vec<CartLineResponse>,
}

impl CartMutationResponse {
    pub(crate) fn applied(items: Vec<sokonova_app::domain::carts::CartLine>) -> Self {
        Self {
            ok: true,
            items: items.into_iter().map(CartLineResponse::from).collect(),
        }
    }
}

/// Add Cart Item Handler
///
/// Adds a product to the caller's cart, summing quantities when the product
/// is already present.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing productId or invalid qty"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddItemRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartMutationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let key = resolve_cart_key(req, depot, res, state.cookies);

    let AddItemRequest { product_id, qty } = json.into_inner();

    let items = state
        .app
        .carts
        .add_item(&key, &product_id, qty.unwrap_or(1))
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartMutationResponse::applied(items)))
}
