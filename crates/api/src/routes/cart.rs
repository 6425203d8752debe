//! Cart read and mutation endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use cart::{
    Cart, CartEngine, CartOp, CatalogService, NotificationSink, ProductId, Severity, StockService,
    UpdateProductAmount, failure_message,
};
use cart_store::CartStore;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S, K, C>
where
    S: CartStore,
    K: StockService,
    C: CatalogService,
{
    pub engine: CartEngine<S, K, C>,
    pub notifications: Arc<dyn NotificationSink>,
}

// -- Request types --

#[derive(Deserialize)]
pub struct UpdateAmountRequest {
    pub amount: i64,
}

// -- Response types --

#[derive(Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub total_cents: i64,
    pub total_quantity: u32,
}

#[derive(Serialize)]
pub struct CartItemResponse {
    pub product_id: u64,
    pub name: String,
    pub amount: u32,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
    pub image_url: String,
}

impl CartResponse {
    fn from_cart(cart: &Cart) -> Self {
        let items = cart
            .entries()
            .iter()
            .map(|entry| CartItemResponse {
                product_id: entry.product_id.as_u64(),
                name: entry.name.clone(),
                amount: entry.amount,
                unit_price_cents: entry.price.cents(),
                subtotal_cents: entry.total_price().cents(),
                image_url: entry.image_url.clone(),
            })
            .collect();

        Self {
            items,
            total_cents: cart.total().cents(),
            total_quantity: cart.total_quantity(),
        }
    }
}

// -- Handlers --

/// GET /cart — current cart snapshot.
#[tracing::instrument(skip(state))]
pub async fn get<S, K, C>(State(state): State<Arc<AppState<S, K, C>>>) -> Json<CartResponse>
where
    S: CartStore + 'static,
    K: StockService + 'static,
    C: CatalogService + 'static,
{
    let cart = state.engine.cart().await;
    Json(CartResponse::from_cart(&cart))
}

/// POST /cart/products/:id — add one unit of a product.
#[tracing::instrument(skip(state))]
pub async fn add<S, K, C>(
    State(state): State<Arc<AppState<S, K, C>>>,
    Path(id): Path<u64>,
) -> Result<Json<CartResponse>, ApiError>
where
    S: CartStore + 'static,
    K: StockService + 'static,
    C: CatalogService + 'static,
{
    let product_id = ProductId::new(id);

    match state.engine.add_product(product_id).await {
        Ok(cart) => Ok(Json(CartResponse::from_cart(&cart))),
        Err(err) => {
            state
                .notifications
                .notify(Severity::Error, failure_message(CartOp::Add, &err));
            Err(err.into())
        }
    }
}

/// PUT /cart/products/:id — set the absolute quantity of a cart entry.
#[tracing::instrument(skip(state, req))]
pub async fn update_amount<S, K, C>(
    State(state): State<Arc<AppState<S, K, C>>>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateAmountRequest>,
) -> Result<Json<CartResponse>, ApiError>
where
    S: CartStore + 'static,
    K: StockService + 'static,
    C: CatalogService + 'static,
{
    let cmd = UpdateProductAmount {
        product_id: ProductId::new(id),
        amount: req.amount,
    };

    match state.engine.update_product_amount(cmd).await {
        Ok(cart) => Ok(Json(CartResponse::from_cart(&cart))),
        Err(err) => {
            state
                .notifications
                .notify(Severity::Error, failure_message(CartOp::UpdateAmount, &err));
            Err(err.into())
        }
    }
}

/// DELETE /cart/products/:id — remove a cart entry entirely.
#[tracing::instrument(skip(state))]
pub async fn remove<S, K, C>(
    State(state): State<Arc<AppState<S, K, C>>>,
    Path(id): Path<u64>,
) -> Result<Json<CartResponse>, ApiError>
where
    S: CartStore + 'static,
    K: StockService + 'static,
    C: CatalogService + 'static,
{
    let product_id = ProductId::new(id);

    match state.engine.remove_product(product_id).await {
        Ok(cart) => Ok(Json(CartResponse::from_cart(&cart))),
        Err(err) => {
            state
                .notifications
                .notify(Severity::Error, failure_message(CartOp::Remove, &err));
            Err(err.into())
        }
    }
}
