use async_trait::async_trait;

use crate::Result;

/// Core trait for cart storage implementations.
///
/// Modeled after browser-local storage: whole values are read and written
/// under string keys, with no partial or incremental updates. All
/// implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Returns the value stored under `key`, or None if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value wholesale.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes the value stored under `key`, if any.
    async fn remove(&self, key: &str) -> Result<()>;
}
