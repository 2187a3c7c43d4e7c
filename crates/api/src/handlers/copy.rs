//! Handlers for the `/copies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use salescopy_core::copy::CreateCopyRequest;
use salescopy_core::types::DbId;
use salescopy_db::models::copy::Copy;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// POST /api/v1/copies
///
/// Generates a title and description for the submitted product, then stores
/// the result. Responds 201 with the stored copy.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCopyRequest>,
) -> AppResult<(StatusCode, Json<Copy>)> {
    let copy = state.copies.create_copy(input).await?;
    Ok((StatusCode::CREATED, Json(copy)))
}

/// GET /api/v1/copies/published
pub async fn list_published(State(state): State<AppState>) -> AppResult<Json<Vec<Copy>>> {
    let copies = state.copies.get_published_copies().await?;
    Ok(Json(copies))
}

/// GET /api/v1/copies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Copy>> {
    let copy = state.copies.get_copy(id).await?;
    Ok(Json(copy))
}

/// PUT /api/v1/copies/{id}/likes
///
/// Adds one like. No request body.
pub async fn like(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Copy>> {
    let copy = state.copies.update_likes(id).await?;
    Ok(Json(copy))
}
