//! Handlers for the `/v1/movies` resource.
//!
//! Each handler parses its input up front (path id, JSON body) and never
//! reaches the store with a malformed id or an undecodable payload.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use movies_core::types::MovieId;
use movies_db::models::movie::{CreateMovie, InsertResult, Movie, UpdateMovie};
use movies_db::with_deadline;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /v1/movies/{id}
///
/// Fetch a single movie.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Movie>> {
    let id = MovieId::parse(&raw_id)?;
    let movie = with_deadline(state.store_timeout(), state.store.find_by_id(id)).await?;

    Ok(Json(movie))
}

/// POST /v1/movies
///
/// Create a movie; the store assigns its id.
pub async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<CreateMovie>, JsonRejection>,
) -> AppResult<Json<InsertResult>> {
    let Json(input) = body?;
    let id = with_deadline(state.store_timeout(), state.store.insert(&input)).await?;

    tracing::info!(movie_id = %id, name = %input.name, "Movie created");

    Ok(Json(InsertResult { inserted_id: id }))
}

/// PUT /v1/movies/{id}
///
/// Overwrite only the fields present in the body.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateMovie>, JsonRejection>,
) -> AppResult<StatusCode> {
    let id = MovieId::parse(&raw_id)?;
    let Json(update) = body?;
    with_deadline(state.store_timeout(), state.store.update_by_id(id, &update)).await?;

    tracing::info!(movie_id = %id, "Movie updated");

    Ok(StatusCode::OK)
}

/// DELETE /v1/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = MovieId::parse(&raw_id)?;
    with_deadline(state.store_timeout(), state.store.delete_by_id(id)).await?;

    tracing::info!(movie_id = %id, "Movie deleted");

    Ok(StatusCode::OK)
}
