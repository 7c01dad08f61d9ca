//! Handlers for organization staff.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use maktab_core::error::CoreError;
use maktab_core::types::DbId;
use maktab_db::models::staff::{CreateStaff, Staff, UpdateStaff};
use maktab_db::repositories::StaffRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::school::require_school;
use crate::state::AppState;

/// GET /api/v1/schools/{id}/staff
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Staff>>> {
    require_school(&state.pool, id).await?;
    let staff = StaffRepo::list_by_organization(&state.pool, id).await?;
    Ok(Json(staff))
}

/// POST /api/v1/schools/{id}/staff
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateStaff>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    if input.full_name.trim().is_empty() {
        return Err(AppError::BadRequest("full_name is required".into()));
    }
    require_school(&state.pool, id).await?;
    let staff = StaffRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(staff)))
}

/// PUT /api/v1/schools/{id}/staff/{staff_id}
pub async fn update(
    State(state): State<AppState>,
    Path((_, staff_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateStaff>,
) -> AppResult<Json<Staff>> {
    let staff = StaffRepo::update(&state.pool, staff_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Staff member",
            id: staff_id,
        }))?;
    Ok(Json(staff))
}

/// DELETE /api/v1/schools/{id}/staff/{staff_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((_, staff_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = StaffRepo::delete(&state.pool, staff_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Staff member",
            id: staff_id,
        }))
    }
}
