//! The store seam between request handlers and the document database.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use movies_core::types::MovieId;

use crate::error::StoreError;
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Operations on the movies collection.
///
/// Every identifier is parsed before it reaches a store, so implementations
/// only ever see well-formed ids. Implementations are shared across request
/// tasks behind an `Arc<dyn MovieStore>`.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Fetch the single record with this id.
    async fn find_by_id(&self, id: MovieId) -> Result<Movie, StoreError>;

    /// Persist a new record and return the id the store assigned.
    async fn insert(&self, input: &CreateMovie) -> Result<MovieId, StoreError>;

    /// Overwrite only the fields present in `update`.
    ///
    /// An empty update touches nothing but still reports `NotFound` for an
    /// absent record.
    async fn update_by_id(&self, id: MovieId, update: &UpdateMovie) -> Result<(), StoreError>;

    /// Remove the single record with this id.
    async fn delete_by_id(&self, id: MovieId) -> Result<(), StoreError>;

    /// All records whose name matches exactly.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Movie>, StoreError>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Run a store call, failing with [`StoreError::Timeout`] once `limit` elapses.
///
/// Dropping the inner future on expiry cancels the in-flight call.
pub async fn with_deadline<T, F>(limit: Duration, op: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(limit, op)
        .await
        .unwrap_or(Err(StoreError::Timeout { limit }))
}
