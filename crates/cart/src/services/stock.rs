//! Stock availability service trait and implementations.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::CartError;
use crate::value_objects::{ProductId, StockInfo};

/// Trait for querying currently available stock.
#[async_trait]
pub trait StockService: Send + Sync {
    /// Returns the stock currently available for `product_id`.
    ///
    /// The result is a per-call snapshot and must not be cached across
    /// operations.
    async fn available(&self, product_id: ProductId) -> Result<StockInfo, CartError>;
}

#[derive(Debug, Default)]
struct InMemoryStockState {
    levels: HashMap<ProductId, u32>,
    fail: bool,
}

/// In-memory stock service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStockService {
    state: Arc<RwLock<InMemoryStockState>>,
}

impl InMemoryStockService {
    /// Creates a new in-memory stock service with no stock records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the available stock for a product.
    pub fn set_stock(&self, product_id: ProductId, amount: u32) {
        self.state.write().unwrap().levels.insert(product_id, amount);
    }

    /// Configures the service to fail all queries.
    pub fn set_fail(&self, fail: bool) {
        self.state.write().unwrap().fail = fail;
    }
}

#[async_trait]
impl StockService for InMemoryStockService {
    async fn available(&self, product_id: ProductId) -> Result<StockInfo, CartError> {
        let state = self.state.read().unwrap();

        if state.fail {
            return Err(CartError::StockService("Service unavailable".to_string()));
        }

        let amount = state
            .levels
            .get(&product_id)
            .copied()
            .ok_or_else(|| {
                CartError::StockService(format!("No stock record for product {product_id}"))
            })?;

        Ok(StockInfo { product_id, amount })
    }
}

/// Response payload from `GET /stock/{id}`.
#[derive(Debug, Deserialize)]
struct StockResponse {
    amount: u32,
}

/// HTTP client for the stock query service.
#[derive(Clone)]
pub struct HttpStockService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStockService {
    /// Creates a client against the given API base URL.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl StockService for HttpStockService {
    async fn available(&self, product_id: ProductId) -> Result<StockInfo, CartError> {
        let url = format!("{}/stock/{}", self.base_url, product_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CartError::StockService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CartError::StockService(format!(
                "HTTP {}: {body}",
                status.as_u16()
            )));
        }

        let stock: StockResponse = response
            .json()
            .await
            .map_err(|e| CartError::StockService(e.to_string()))?;

        Ok(StockInfo {
            product_id,
            amount: stock.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_stock_level() {
        let service = InMemoryStockService::new();
        service.set_stock(ProductId::new(1), 5);

        let info = service.available(ProductId::new(1)).await.unwrap();
        assert_eq!(info.product_id, ProductId::new(1));
        assert_eq!(info.amount, 5);
    }

    #[tokio::test]
    async fn unknown_product_is_an_error() {
        let service = InMemoryStockService::new();
        let result = service.available(ProductId::new(99)).await;
        assert!(matches!(result, Err(CartError::StockService(_))));
    }

    #[tokio::test]
    async fn set_stock_overwrites_previous_level() {
        let service = InMemoryStockService::new();
        service.set_stock(ProductId::new(1), 5);
        service.set_stock(ProductId::new(1), 2);

        let info = service.available(ProductId::new(1)).await.unwrap();
        assert_eq!(info.amount, 2);
    }

    #[tokio::test]
    async fn fail_toggle_rejects_queries() {
        let service = InMemoryStockService::new();
        service.set_stock(ProductId::new(1), 5);
        service.set_fail(true);

        let result = service.available(ProductId::new(1)).await;
        assert!(matches!(result, Err(CartError::StockService(_))));

        service.set_fail(false);
        assert!(service.available(ProductId::new(1)).await.is_ok());
    }

    #[test]
    fn stock_response_deserializes_wire_payload() {
        let stock: StockResponse = serde_json::from_str(r#"{ "amount": 3 }"#).unwrap();
        assert_eq!(stock.amount, 3);
    }
}
