//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use std::time::Duration;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use movies_api::error::AppError;
use movies_core::error::CoreError;
use movies_core::types::MovieId;
use movies_db::StoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn sample_id() -> MovieId {
    MovieId::parse("5f1d7f8e9a1b2c3d4e5f6a7b").unwrap()
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id: sample_id(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Movie with id 5f1d7f8e9a1b2c3d4e5f6a7b not found");
}

#[tokio::test]
async fn store_not_found_converts_to_core_not_found() {
    let err = AppError::from(StoreError::NotFound { id: sample_id() });
    assert_matches!(&err, AppError::Core(CoreError::NotFound { entity: "Movie", .. }));

    let (status, _) = error_to_response(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn direct_store_not_found_matches_core_not_found_body() {
    let (core_status, core_json) = error_to_response(AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id: sample_id(),
    }))
    .await;
    let (store_status, store_json) =
        error_to_response(AppError::Store(StoreError::NotFound { id: sample_id() })).await;

    assert_eq!(store_status, core_status);
    assert_eq!(store_json, core_json);
}

#[tokio::test]
async fn invalid_id_returns_400_with_distinct_code() {
    let err = AppError::from(MovieId::parse("abc").unwrap_err());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_ID");
    assert!(json["error"].as_str().unwrap().contains("'abc'"));
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn out_of_range_amount_returns_400() {
    let err = AppError::from(StoreError::OutOfRange {
        field: "budget",
        value: u64::MAX,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn store_timeout_returns_504() {
    let err = AppError::from(StoreError::Timeout {
        limit: Duration::from_secs(10),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["code"], "STORE_TIMEOUT");
}

#[tokio::test]
async fn corrupt_record_returns_500_and_sanitizes_message() {
    let err = AppError::from(StoreError::CorruptRecord("document has no _id".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
