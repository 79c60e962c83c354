use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movies_core::error::CoreError;
use movies_core::types::MovieId;
use movies_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for store
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `movies_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store failure other than a missing record.
    #[error(transparent)]
    Store(StoreError),

    /// A request body that could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => AppError::Core(CoreError::NotFound {
                entity: "Movie",
                id,
            }),
            other => AppError::Store(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => not_found(entity, id),
                CoreError::InvalidId { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_ID", core.to_string())
                }
            },

            // --- Store errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn not_found(entity: &str, id: &MovieId) -> (StatusCode, &'static str, String) {
    (
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        format!("{entity} with id {id} not found"),
    )
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// - `NotFound` maps to 404, same body as [`CoreError::NotFound`]. The
///   `From<StoreError>` conversion routes it through `CoreError`; this arm
///   covers an `AppError::Store` built directly.
/// - `OutOfRange` maps to 400 (the client sent an unstorable amount).
/// - `Timeout` maps to 504.
/// - Everything else maps to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::NotFound { id } => not_found("Movie", id),
        StoreError::OutOfRange { .. } => (StatusCode::BAD_REQUEST, "BAD_REQUEST", err.to_string()),
        StoreError::Timeout { limit } => {
            tracing::warn!(?limit, "Store call timed out");
            (
                StatusCode::GATEWAY_TIMEOUT,
                "STORE_TIMEOUT",
                "The data store did not respond in time".to_string(),
            )
        }
        StoreError::Database(_) | StoreError::CorruptRecord(_) => {
            tracing::error!(error = %err, "Store error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
