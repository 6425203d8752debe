//! Product catalog service trait and implementations.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::CartError;
use crate::value_objects::{Money, Product, ProductId};

/// Trait for fetching product metadata.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Returns the metadata for `product_id`.
    async fn product(&self, product_id: ProductId) -> Result<Product, CartError>;
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    products: HashMap<ProductId, Product>,
    fail: bool,
}

/// In-memory catalog service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogService {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

impl InMemoryCatalogService {
    /// Creates a new in-memory catalog with no products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product in the catalog.
    pub fn insert(&self, product: Product) {
        self.state.write().unwrap().products.insert(product.id, product);
    }

    /// Configures the service to fail all queries.
    pub fn set_fail(&self, fail: bool) {
        self.state.write().unwrap().fail = fail;
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalogService {
    async fn product(&self, product_id: ProductId) -> Result<Product, CartError> {
        let state = self.state.read().unwrap();

        if state.fail {
            return Err(CartError::CatalogService("Service unavailable".to_string()));
        }

        state.products.get(&product_id).cloned().ok_or_else(|| {
            CartError::CatalogService(format!("No product record for {product_id}"))
        })
    }
}

/// Response payload from `GET /products/{id}`.
#[derive(Debug, Deserialize)]
struct ProductResponse {
    id: u64,
    name: String,
    /// Price in currency units (e.g. `139.9`); converted to cents.
    price: f64,
    #[serde(rename = "imageUrl")]
    image_url: String,
}

impl From<ProductResponse> for Product {
    fn from(resp: ProductResponse) -> Self {
        Product {
            id: ProductId::new(resp.id),
            name: resp.name,
            price: Money::from_cents((resp.price * 100.0).round() as i64),
            image_url: resp.image_url,
        }
    }
}

/// HTTP client for the product catalog service.
#[derive(Clone)]
pub struct HttpCatalogService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogService {
    /// Creates a client against the given API base URL.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn product(&self, product_id: ProductId) -> Result<Product, CartError> {
        let url = format!("{}/products/{}", self.base_url, product_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CartError::CatalogService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CartError::CatalogService(format!(
                "HTTP {}: {body}",
                status.as_u16()
            )));
        }

        let product: ProductResponse = response
            .json()
            .await
            .map_err(|e| CartError::CatalogService(e.to_string()))?;

        Ok(product.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sneaker() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Tênis de Caminhada Leve Confortável".to_string(),
            price: Money::from_cents(17990),
            image_url: "https://images.example/sneakers/1.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_registered_product() {
        let service = InMemoryCatalogService::new();
        service.insert(sneaker());

        let product = service.product(ProductId::new(1)).await.unwrap();
        assert_eq!(product, sneaker());
    }

    #[tokio::test]
    async fn unknown_product_is_an_error() {
        let service = InMemoryCatalogService::new();
        let result = service.product(ProductId::new(99)).await;
        assert!(matches!(result, Err(CartError::CatalogService(_))));
    }

    #[tokio::test]
    async fn fail_toggle_rejects_queries() {
        let service = InMemoryCatalogService::new();
        service.insert(sneaker());
        service.set_fail(true);

        let result = service.product(ProductId::new(1)).await;
        assert!(matches!(result, Err(CartError::CatalogService(_))));
    }

    #[test]
    fn wire_price_converts_to_cents() {
        let resp: ProductResponse = serde_json::from_str(
            r#"{ "id": 2, "name": "Tênis VR Caminhada", "price": 139.9, "imageUrl": "https://images.example/2.jpg" }"#,
        )
        .unwrap();

        let product: Product = resp.into();
        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.price.cents(), 13990);
    }

    #[test]
    fn wire_price_rounds_to_nearest_cent() {
        let resp = ProductResponse {
            id: 3,
            name: "Sapato".to_string(),
            price: 10.999,
            image_url: String::new(),
        };
        let product: Product = resp.into();
        assert_eq!(product.price.cents(), 1100);
    }
}
