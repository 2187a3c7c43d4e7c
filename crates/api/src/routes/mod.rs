pub mod copy;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /copies                  create (POST)
/// /copies/published        published listing (GET)
/// /copies/{id}             get (GET)
/// /copies/{id}/likes       add one like (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/copies", copy::router())
}
