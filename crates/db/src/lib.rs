use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::{with_deadline, MovieStore};

/// Connection settings for the movies collection.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string (default: `mongodb://localhost:27017`).
    pub uri: String,
    /// Database name (default: `appDB`).
    pub database: String,
    /// Collection name (default: `movies`).
    pub collection: String,
}

impl MongoConfig {
    /// Load settings from `MONGODB_URI`, `MONGODB_DATABASE` and
    /// `MONGODB_COLLECTION`, falling back to the local defaults.
    pub fn from_env() -> Self {
        Self {
            uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".into()),
            database: std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "appDB".into()),
            collection: std::env::var("MONGODB_COLLECTION").unwrap_or_else(|_| "movies".into()),
        }
    }
}

/// Create a client from a connection string.
///
/// The driver manages its own connection pool; the returned client is cheap
/// to clone and safe to share across tasks.
pub async fn connect(uri: &str) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some("movies".into());
    Client::with_options(options)
}

/// Round-trip a `ping` command to confirm the server is reachable.
pub async fn health_check(database: &Database) -> Result<(), mongodb::error::Error> {
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
