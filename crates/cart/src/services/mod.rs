//! External service traits with in-memory and HTTP implementations.

pub mod catalog;
pub mod notify;
pub mod stock;

pub use catalog::{CatalogService, HttpCatalogService, InMemoryCatalogService};
pub use notify::{
    NotificationSink, RecordingNotificationSink, Severity, TracingNotificationSink,
};
pub use stock::{HttpStockService, InMemoryStockService, StockService};
