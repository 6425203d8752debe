use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::{Result, store::CartStore};

/// SQLite-backed cart store implementation.
///
/// A single `cart_storage` table holds one row per key, overwritten
/// wholesale on every write.
#[derive(Clone)]
pub struct SqliteCartStore {
    pool: SqlitePool,
}

impl SqliteCartStore {
    /// Creates a store over an existing connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database at `url` and runs migrations.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(url).await?;
        let store = Self::new(pool);
        store.run_migrations().await?;
        Ok(store)
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CartStore for SqliteCartStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM cart_storage WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO cart_storage (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM cart_storage WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> SqliteCartStore {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        let store = SqliteCartStore::new(pool);
        store.run_migrations().await.expect("migrations failed");
        store
    }

    #[tokio::test]
    async fn get_missing_key_returns_none() {
        let store = test_store().await;
        assert_eq!(store.get("cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_then_get() {
        let store = test_store().await;
        store.put("cart", r#"[{"product_id":1}]"#).await.unwrap();
        assert_eq!(
            store.get("cart").await.unwrap(),
            Some(r#"[{"product_id":1}]"#.to_string())
        );
    }

    #[tokio::test]
    async fn put_upserts_existing_key() {
        let store = test_store().await;
        store.put("cart", "old").await.unwrap();
        store.put("cart", "new").await.unwrap();
        assert_eq!(store.get("cart").await.unwrap(), Some("new".to_string()));

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart_storage")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn remove_deletes_row() {
        let store = test_store().await;
        store.put("cart", "[]").await.unwrap();
        store.remove("cart").await.unwrap();
        assert_eq!(store.get("cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let store = test_store().await;
        store.put("cart", "a").await.unwrap();
        store.put("wishlist", "b").await.unwrap();
        store.remove("cart").await.unwrap();
        assert_eq!(store.get("wishlist").await.unwrap(), Some("b".to_string()));
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let store = test_store().await;
        store.run_migrations().await.unwrap();
    }
}
