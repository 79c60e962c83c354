use std::time::Duration;

use movies_db::MongoConfig;

/// Which [`MovieStore`](movies_db::MovieStore) implementation backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB via [`MongoMovieRepo`](movies_db::repositories::MongoMovieRepo).
    Mongo,
    /// Process-local [`InMemoryMovieRepo`](movies_db::repositories::InMemoryMovieRepo).
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Some(Self::Mongo),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `15`).
    pub request_timeout_secs: u64,
    /// Deadline for a single store call in seconds (default: `10`).
    pub store_timeout_secs: u64,
    /// Store implementation (default: MongoDB).
    pub store_backend: StoreBackend,
    /// MongoDB connection settings.
    pub mongo: MongoConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `127.0.0.1`                 |
    /// | `PORT`                 | `8000`                      |
    /// | `REQUEST_TIMEOUT_SECS` | `15`                        |
    /// | `STORE_TIMEOUT_SECS`   | `10`                        |
    /// | `MOVIES_STORE`         | `mongo`                     |
    /// | `MONGODB_URI`          | `mongodb://localhost:27017` |
    /// | `MONGODB_DATABASE`     | `appDB`                     |
    /// | `MONGODB_COLLECTION`   | `movies`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let store_timeout_secs: u64 = std::env::var("STORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("STORE_TIMEOUT_SECS must be a valid u64");

        let store_backend = std::env::var("MOVIES_STORE")
            .map(|v| StoreBackend::parse(&v).expect("MOVIES_STORE must be 'mongo' or 'memory'"))
            .unwrap_or(StoreBackend::Mongo);

        Self {
            host,
            port,
            request_timeout_secs,
            store_timeout_secs,
            store_backend,
            mongo: MongoConfig::from_env(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }
}
