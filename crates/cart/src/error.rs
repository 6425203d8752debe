//! Cart error types.

use thiserror::Error;

use crate::value_objects::ProductId;

/// Errors that can occur during cart operations.
///
/// A failing operation leaves both the published cart and the stored blob
/// unchanged; these errors describe why the operation was rejected.
#[derive(Debug, Error)]
pub enum CartError {
    /// The operation targeted a product with no entry in the cart.
    #[error("Product {product_id} is not in the cart")]
    NotInCart { product_id: ProductId },

    /// The requested quantity cannot be satisfied by the available stock.
    #[error("Requested quantity for product {product_id} is out of stock")]
    OutOfStock { product_id: ProductId },

    /// The stock service call failed.
    #[error("Stock service error: {0}")]
    StockService(String),

    /// The catalog service call failed.
    #[error("Catalog service error: {0}")]
    CatalogService(String),

    /// The cart store rejected a read or write.
    #[error("Cart store error: {0}")]
    Store(#[from] cart_store::CartStoreError),

    /// Serializing the cart for persistence failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
