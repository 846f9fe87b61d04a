//! Errors

use salvo::http::StatusError;
use tracing::error;

use sokonova_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::MissingProductId => {
            StatusError::bad_request().brief("productId is required")
        }
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("qty must be at least 1")
        }
        CartsServiceError::Store(source) => {
            error!("cart store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
