use std::time::Duration;

use movies_core::types::MovieId;

/// Failure of a store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no movie with id {id}")]
    NotFound { id: MovieId },

    /// A box-office amount does not fit the store's signed 64-bit integers.
    #[error("{field} value {value} exceeds the storable range")]
    OutOfRange { field: &'static str, value: u64 },

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("store call exceeded its {limit:?} deadline")]
    Timeout { limit: Duration },

    /// A stored document could not be mapped back to a [`Movie`](crate::models::movie::Movie).
    #[error("corrupt record: {0}")]
    CorruptRecord(String),
}
