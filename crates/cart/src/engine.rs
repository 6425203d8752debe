//! The cart state engine.

use std::future::Future;

use cart_store::CartStore;
use tokio::sync::RwLock;

use crate::cart::Cart;
use crate::error::{CartError, Result};
use crate::notification::CartOp;
use crate::services::catalog::CatalogService;
use crate::services::stock::StockService;
use crate::value_objects::{CartEntry, ProductId};

/// Storage key under which the serialized cart is persisted.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Command to set the absolute quantity of an existing cart entry.
#[derive(Debug, Clone, Copy)]
pub struct UpdateProductAmount {
    /// The product whose entry is updated.
    pub product_id: ProductId,

    /// Requested quantity. Non-positive values make the operation a no-op.
    pub amount: i64,
}

/// The cart state engine.
///
/// Owns the authoritative cart list, validates mutations against the stock
/// service, and writes every successful mutation through to the store before
/// publishing it. A failing operation leaves both the published cart and the
/// stored blob untouched.
///
/// Mutating operations hold the state write lock across their service calls,
/// so overlapping mutations are serialized rather than racing on a shared
/// starting snapshot.
pub struct CartEngine<S, K, C>
where
    S: CartStore,
    K: StockService,
    C: CatalogService,
{
    store: S,
    stock: K,
    catalog: C,
    state: RwLock<Cart>,
}

impl<S, K, C> CartEngine<S, K, C>
where
    S: CartStore,
    K: StockService,
    C: CatalogService,
{
    /// Creates an engine by restoring the persisted cart from the store.
    ///
    /// An absent key yields an empty cart. An unreadable store or a
    /// malformed blob also yields an empty cart, with a warning; the next
    /// successful operation overwrites the bad value.
    pub async fn load(store: S, stock: K, catalog: C) -> Self {
        let cart = match store.get(CART_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(cart) => cart,
                Err(error) => {
                    tracing::warn!(%error, "stored cart is malformed, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(error) => {
                tracing::warn!(%error, "cart store unreadable, starting empty");
                Cart::new()
            }
        };

        Self {
            store,
            stock,
            catalog,
            state: RwLock::new(cart),
        }
    }

    /// Returns a snapshot of the current cart.
    pub async fn cart(&self) -> Cart {
        self.state.read().await.clone()
    }

    /// Adds one unit of `product_id`, or increments its existing entry.
    ///
    /// Incrementing is rejected with [`CartError::OutOfStock`] when the
    /// entry already holds at least the available stock.
    #[tracing::instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart> {
        self.run(CartOp::Add, async {
            let mut state = self.state.write().await;

            let stock = self.stock.available(product_id).await?;
            let product = self.catalog.product(product_id).await?;

            let new_cart = match state.get(product_id) {
                Some(entry) => {
                    if entry.amount >= stock.amount {
                        return Err(CartError::OutOfStock { product_id });
                    }
                    state.with_incremented(product_id)
                }
                None => state.with_appended(CartEntry::new(product, 1)),
            };

            self.commit(&mut state, new_cart).await
        })
        .await
    }

    /// Removes the entry for `product_id` entirely, regardless of amount.
    ///
    /// Performs no network calls; the only failure mode is
    /// [`CartError::NotInCart`].
    #[tracing::instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Cart> {
        self.run(CartOp::Remove, async {
            let mut state = self.state.write().await;

            if !state.contains(product_id) {
                return Err(CartError::NotInCart { product_id });
            }

            let new_cart = state.without(product_id);
            self.commit(&mut state, new_cart).await
        })
        .await
    }

    /// Sets the absolute quantity for an existing entry.
    ///
    /// Non-positive amounts are a silent no-op: the UI layer never submits
    /// them, and the engine does not treat them as an error.
    #[tracing::instrument(skip(self))]
    pub async fn update_product_amount(&self, cmd: UpdateProductAmount) -> Result<Cart> {
        if cmd.amount <= 0 {
            return Ok(self.cart().await);
        }
        // Quantities beyond u32 can never pass the stock gate.
        let amount = u32::try_from(cmd.amount).unwrap_or(u32::MAX);

        self.run(CartOp::UpdateAmount, async {
            let mut state = self.state.write().await;

            if !state.contains(cmd.product_id) {
                return Err(CartError::NotInCart {
                    product_id: cmd.product_id,
                });
            }

            let stock = self.stock.available(cmd.product_id).await?;
            if stock.amount < amount {
                return Err(CartError::OutOfStock {
                    product_id: cmd.product_id,
                });
            }

            let new_cart = state.with_amount(cmd.product_id, amount);
            self.commit(&mut state, new_cart).await
        })
        .await
    }

    /// Persists `new_cart`, then publishes it.
    ///
    /// The store write happens first: if it fails, the published state is
    /// left untouched and the stored blob still holds the previous cart.
    async fn commit(&self, state: &mut Cart, new_cart: Cart) -> Result<Cart> {
        let payload = serde_json::to_string(&new_cart)?;
        self.store.put(CART_STORAGE_KEY, &payload).await?;
        *state = new_cart.clone();
        Ok(new_cart)
    }

    async fn run<F>(&self, op: CartOp, operation: F) -> Result<Cart>
    where
        F: Future<Output = Result<Cart>>,
    {
        metrics::counter!("cart_operations_total", "op" => op.as_str()).increment(1);

        let result = operation.await;
        if let Err(error) = &result {
            metrics::counter!("cart_operation_failures_total", "op" => op.as_str()).increment(1);
            tracing::warn!(%op, %error, "cart operation failed");
        }
        result
    }
}
