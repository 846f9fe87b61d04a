//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use sokonova_app::domain::carts::CartLine;

use crate::{
    carts::errors::into_status_error, extensions::DepotExt as _, identity::resolve_cart_key,
    state::State,
};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The lines currently in the cart
    pub items: Vec<CartLineResponse>,
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The product this line holds
    #[serde(rename = "productId")]
    pub product_id: String,

    /// How many of the product are in the cart
    pub qty: u32,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            product_id: line.product_id,
            qty: line.qty,
        }
    }
}

/// Get Cart Handler
///
/// Returns the caller's current cart, minting an anonymous identity cookie
/// for a first-time guest.
#[endpoint(tags("cart"), summary = "Get Cart")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let key = resolve_cart_key(req, depot, res, state.cookies);

    let items = state
        .app
        .carts
        .get_items(&key)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse {
        items: items.into_iter().map(CartLineResponse::from).collect(),
    }))
}
