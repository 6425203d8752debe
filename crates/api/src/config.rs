//! Application configuration loaded from environment variables.

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `CATALOG_API_URL` — base URL of the stock/catalog API
///   (default: `"http://localhost:3333"`)
/// - `CART_DATABASE_URL` — SQLite URL for the cart store
///   (default: `"sqlite://cart.db?mode=rwc"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub catalog_api_url: String,
    pub cart_database_url: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            catalog_api_url: std::env::var("CATALOG_API_URL")
                .unwrap_or_else(|_| "http://localhost:3333".to_string()),
            cart_database_url: std::env::var("CART_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://cart.db?mode=rwc".to_string()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            catalog_api_url: "http://localhost:3333".to_string(),
            cart_database_url: "sqlite://cart.db?mode=rwc".to_string(),
        }
    }
}
