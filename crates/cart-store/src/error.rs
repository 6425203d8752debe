use thiserror::Error;

/// Errors that can occur when interacting with the cart store.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The store is unavailable (quota exceeded, storage disabled, outage).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for cart store operations.
pub type Result<T> = std::result::Result<T, CartStoreError>;
