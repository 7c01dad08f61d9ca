//! Handlers for region and district reference data.

use axum::extract::{Path, State};
use axum::Json;
use maktab_core::types::DbId;
use maktab_db::models::region::{District, Region};
use maktab_db::repositories::RegionRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/regions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Region>>> {
    let regions = RegionRepo::list(&state.pool).await?;
    Ok(Json(regions))
}

/// GET /api/v1/regions/{id}/districts
pub async fn districts(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<District>>> {
    let districts = RegionRepo::districts_by_region(&state.pool, id).await?;
    Ok(Json(districts))
}
