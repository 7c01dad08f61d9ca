//! Handlers for school reviews.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use maktab_core::error::CoreError;
use maktab_core::types::DbId;
use maktab_db::models::review::{CreateReview, RatingSummary, Review};
use maktab_db::repositories::ReviewRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::school::require_school;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewPayload {
    #[validate(length(min = 1, message = "author name is required"))]
    pub author_name: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    pub comment: Option<String>,
}

/// GET /api/v1/schools/{id}/reviews
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    require_school(&state.pool, id).await?;
    let reviews = ReviewRepo::list_by_organization(&state.pool, id).await?;
    Ok(Json(reviews))
}

/// POST /api/v1/schools/{id}/reviews
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<CreateReviewPayload>,
) -> AppResult<(StatusCode, Json<Review>)> {
    payload.validate()?;
    require_school(&state.pool, id).await?;
    let review = ReviewRepo::create(
        &state.pool,
        id,
        &CreateReview {
            author_name: payload.author_name,
            rating: payload.rating,
            comment: payload.comment,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(review)))
}

#[derive(Debug, Deserialize, Validate)]
pub struct RespondPayload {
    #[validate(length(min = 1, message = "response must not be empty"))]
    pub response: String,
}

/// POST /api/v1/schools/{id}/reviews/{review_id}/response
pub async fn respond(
    State(state): State<AppState>,
    Path((id, review_id)): Path<(DbId, DbId)>,
    Json(payload): Json<RespondPayload>,
) -> AppResult<Json<Review>> {
    payload.validate()?;
    let review = ReviewRepo::set_response(&state.pool, id, review_id, &payload.response)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))?;
    Ok(Json(review))
}

/// DELETE /api/v1/schools/{id}/reviews/{review_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((id, review_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ReviewRepo::delete(&state.pool, id, review_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))
    }
}

/// GET /api/v1/schools/{id}/rating
pub async fn rating(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RatingSummary>> {
    require_school(&state.pool, id).await?;
    let summary = ReviewRepo::rating_summary(&state.pool, id).await?;
    Ok(Json(summary))
}
