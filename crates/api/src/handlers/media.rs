//! Handlers for organization media.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use maktab_core::error::CoreError;
use maktab_core::types::DbId;
use maktab_db::models::media::{CreateMedia, Media, UpdateMedia};
use maktab_db::repositories::MediaRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::school::require_school;
use crate::state::AppState;

/// GET /api/v1/schools/{id}/media
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Media>>> {
    require_school(&state.pool, id).await?;
    let media = MediaRepo::list_by_organization(&state.pool, id).await?;
    Ok(Json(media))
}

/// POST /api/v1/schools/{id}/media
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateMedia>,
) -> AppResult<(StatusCode, Json<Media>)> {
    if input.url.trim().is_empty() {
        return Err(AppError::BadRequest("url is required".into()));
    }
    require_school(&state.pool, id).await?;
    let media = MediaRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(media)))
}

/// PATCH /api/v1/schools/{id}/media/{media_id}
pub async fn update(
    State(state): State<AppState>,
    Path((_, media_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMedia>,
) -> AppResult<Json<Media>> {
    let media = MediaRepo::update(&state.pool, media_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id: media_id,
        }))?;
    Ok(Json(media))
}

/// POST /api/v1/schools/{id}/media/{media_id}/cover
pub async fn set_cover(
    State(state): State<AppState>,
    Path((id, media_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let changed = MediaRepo::set_cover(&state.pool, id, media_id).await?;
    if changed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id: media_id,
        }))
    }
}

/// DELETE /api/v1/schools/{id}/media/{media_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((_, media_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = MediaRepo::delete(&state.pool, media_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id: media_id,
        }))
    }
}
