use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{CartStoreError, Result, store::CartStore};

#[derive(Debug, Default)]
struct InMemoryState {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory cart store implementation for testing.
///
/// Provides the same interface as the SQLite implementation, plus toggles
/// for simulating an unreadable or write-rejecting store.
#[derive(Clone, Default)]
pub struct InMemoryCartStore {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryCartStore {
    /// Creates a new empty in-memory cart store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    /// Returns true if no keys are stored.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }

    /// Configures the store to fail all subsequent reads.
    pub async fn set_fail_reads(&self, fail: bool) {
        self.state.write().await.fail_reads = fail;
    }

    /// Configures the store to reject all subsequent writes.
    pub async fn set_fail_writes(&self, fail: bool) {
        self.state.write().await.fail_writes = fail;
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let state = self.state.read().await;
        if state.fail_reads {
            return Err(CartStoreError::Unavailable("read rejected".to_string()));
        }
        Ok(state.entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.write().await;
        if state.fail_writes {
            return Err(CartStoreError::Unavailable("write rejected".to_string()));
        }
        state.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut state = self.state.write().await;
        if state.fail_writes {
            return Err(CartStoreError::Unavailable("write rejected".to_string()));
        }
        state.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_key_returns_none() {
        let store = InMemoryCartStore::new();
        assert_eq!(store.get("cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_then_get() {
        let store = InMemoryCartStore::new();
        store.put("cart", "[]").await.unwrap();
        assert_eq!(store.get("cart").await.unwrap(), Some("[]".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn put_replaces_previous_value() {
        let store = InMemoryCartStore::new();
        store.put("cart", "old").await.unwrap();
        store.put("cart", "new").await.unwrap();
        assert_eq!(store.get("cart").await.unwrap(), Some("new".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove_deletes_key() {
        let store = InMemoryCartStore::new();
        store.put("cart", "[]").await.unwrap();
        store.remove("cart").await.unwrap();
        assert_eq!(store.get("cart").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn remove_missing_key_is_ok() {
        let store = InMemoryCartStore::new();
        assert!(store.remove("cart").await.is_ok());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryCartStore::new();
        let other = store.clone();
        store.put("cart", "[]").await.unwrap();
        assert_eq!(other.get("cart").await.unwrap(), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn fail_reads_rejects_get() {
        let store = InMemoryCartStore::new();
        store.put("cart", "[]").await.unwrap();
        store.set_fail_reads(true).await;

        let result = store.get("cart").await;
        assert!(matches!(result, Err(CartStoreError::Unavailable(_))));

        store.set_fail_reads(false).await;
        assert_eq!(store.get("cart").await.unwrap(), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn fail_writes_rejects_put_and_preserves_value() {
        let store = InMemoryCartStore::new();
        store.put("cart", "old").await.unwrap();
        store.set_fail_writes(true).await;

        let result = store.put("cart", "new").await;
        assert!(matches!(result, Err(CartStoreError::Unavailable(_))));
        assert_eq!(store.get("cart").await.unwrap(), Some("old".to_string()));
    }
}
