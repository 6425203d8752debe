//! HTTP API surface for the cart state engine.
//!
//! Thin consumer glue: routes call into the cart engine, translate typed
//! failures into notifications and HTTP statuses, and carry no cart rules of
//! their own. Structured logging (tracing) and Prometheus metrics included.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use cart::{
    CartEngine, CatalogService, InMemoryCatalogService, InMemoryStockService,
    RecordingNotificationSink, StockService,
};
use cart_store::{CartStore, InMemoryCartStore};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::cart::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, K, C>(
    state: Arc<AppState<S, K, C>>,
    metrics_handle: PrometheusHandle,
) -> Router
where
    S: CartStore + 'static,
    K: StockService + 'static,
    C: CatalogService + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/cart", get(routes::cart::get::<S, K, C>))
        .route("/cart/products/{id}", post(routes::cart::add::<S, K, C>))
        .route(
            "/cart/products/{id}",
            put(routes::cart::update_amount::<S, K, C>),
        )
        .route(
            "/cart/products/{id}",
            delete(routes::cart::remove::<S, K, C>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state backed by in-memory collaborators.
///
/// Used by tests; the binary wires the SQLite store and HTTP services
/// instead. Returns the collaborator handles so callers can seed stock and
/// catalog data and inspect notifications.
pub async fn create_default_state() -> (
    Arc<AppState<InMemoryCartStore, InMemoryStockService, InMemoryCatalogService>>,
    InMemoryStockService,
    InMemoryCatalogService,
    RecordingNotificationSink,
) {
    let store = InMemoryCartStore::new();
    let stock = InMemoryStockService::new();
    let catalog = InMemoryCatalogService::new();
    let notifications = RecordingNotificationSink::new();

    let engine = CartEngine::load(store, stock.clone(), catalog.clone()).await;

    let state = Arc::new(AppState {
        engine,
        notifications: Arc::new(notifications.clone()),
    });

    (state, stock, catalog, notifications)
}
