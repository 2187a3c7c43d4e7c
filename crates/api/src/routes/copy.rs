use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::copy;
use crate::state::AppState;

/// Routes mounted at `/copies`.
///
/// ```text
/// POST   /                 -> create
/// GET    /published        -> list_published
/// GET    /{id}             -> get_by_id
/// PUT    /{id}/likes       -> like
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(copy::create))
        .route("/published", get(copy::list_published))
        .route("/{id}", get(copy::get_by_id))
        .route("/{id}/likes", put(copy::like))
}
