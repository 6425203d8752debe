//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cart::CartError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Cart operation error.
    Cart(CartError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Cart(err) => cart_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn cart_error_to_response(err: CartError) -> (StatusCode, String) {
    match &err {
        CartError::NotInCart { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        CartError::OutOfStock { .. } => (StatusCode::CONFLICT, err.to_string()),
        CartError::StockService(_) | CartError::CatalogService(_) => {
            (StatusCode::BAD_GATEWAY, err.to_string())
        }
        CartError::Store(_) | CartError::Serialization(_) => {
            tracing::error!(error = %err, "cart persistence failure");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        ApiError::Cart(err)
    }
}
