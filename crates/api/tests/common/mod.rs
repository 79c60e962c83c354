#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use movies_api::config::{ServerConfig, StoreBackend};
use movies_api::router::build_app_router;
use movies_api::state::AppState;
use movies_db::repositories::InMemoryMovieRepo;
use movies_db::{MongoConfig, MovieStore};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 15,
        store_timeout_secs: 10,
        store_backend: StoreBackend::Memory,
        mongo: MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "appDB".to_string(),
            collection: "movies".to_string(),
        },
    }
}

/// Build the full application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with_store(Arc::new(InMemoryMovieRepo::new()), test_config())
}

/// Build the full application router over the given store and config.
///
/// Uses the same [`build_app_router`] as the binary, so tests exercise the
/// production middleware stack.
pub fn build_test_app_with_store(store: Arc<dyn MovieStore>, config: ServerConfig) -> Router {
    build_app_router(AppState::new(store, config))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::PUT, uri, body.to_string()).await
}

/// Send an arbitrary string body labelled as JSON.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
