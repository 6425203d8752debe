//! Cart state engine for an e-commerce storefront.
//!
//! This crate provides:
//! - The cart list and its value types
//! - The [`CartEngine`], which owns the authoritative state and exposes
//!   stock-validated add/remove/update operations with write-through
//!   persistence
//! - Service traits for the stock, catalog, and notification collaborators,
//!   each with in-memory and production implementations

pub mod cart;
pub mod engine;
pub mod error;
pub mod notification;
pub mod services;
pub mod value_objects;

pub use cart::Cart;
pub use engine::{CART_STORAGE_KEY, CartEngine, UpdateProductAmount};
pub use error::CartError;
pub use notification::{
    ADD_FAILED, CartOp, OUT_OF_STOCK, REMOVE_FAILED, UPDATE_FAILED, failure_message,
};
pub use services::{
    CatalogService, HttpCatalogService, HttpStockService, InMemoryCatalogService,
    InMemoryStockService, NotificationSink, RecordingNotificationSink, Severity, StockService,
    TracingNotificationSink,
};
pub use value_objects::{CartEntry, Money, Product, ProductId, StockInfo};
