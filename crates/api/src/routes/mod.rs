pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// ```text
/// /movies                 create (POST)
/// /movies/{id}            get, update (PUT), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", post(handlers::movies::create_movie))
        .route(
            "/movies/{id}",
            get(handlers::movies::get_movie)
                .put(handlers::movies::update_movie)
                .delete(handlers::movies::delete_movie),
        )
}
