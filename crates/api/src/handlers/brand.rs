//! Handlers for the `/brands` resource.
//!
//! A brand is a parent grouping of schools. Creating a school under a
//! brand copies the brand's contact and location fields into the
//! school's empty fields once, at creation time.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use maktab_core::error::CoreError;
use maktab_core::merge::merge_if_empty;
use maktab_core::types::DbId;
use maktab_db::models::organization::{CreateOrganization, Organization, KIND_BRAND, KIND_SCHOOL};
use maktab_db::repositories::OrganizationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::school::{normalize_contacts, resolve_slug};
use crate::state::AppState;

/// Brand fields a new school inherits when its own are empty.
const INHERITED_FIELDS: &[&str] = &[
    "phone",
    "additional_phones",
    "email",
    "website",
    "instagram",
    "telegram",
    "facebook",
    "region_id",
    "district_id",
    "address",
    "landmark",
    "description",
];

/// GET /api/v1/brands
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Organization>>> {
    let brands = OrganizationRepo::list_brands(&state.pool).await?;
    Ok(Json(brands))
}

/// POST /api/v1/brands
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrganization>,
) -> AppResult<(StatusCode, Json<Organization>)> {
    let input = normalize_contacts(input);
    let slug = resolve_slug(&state.pool, &input).await?;
    let brand = OrganizationRepo::create(&state.pool, KIND_BRAND, &slug, &input).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

/// GET /api/v1/brands/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Organization>> {
    let brand = require_brand(&state, id).await?;
    Ok(Json(brand))
}

/// GET /api/v1/brands/{id}/schools
pub async fn list_schools(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Organization>>> {
    require_brand(&state, id).await?;
    let schools = OrganizationRepo::list_by_brand(&state.pool, id).await?;
    Ok(Json(schools))
}

/// POST /api/v1/brands/{id}/schools
///
/// Accepts the same payload as school creation; empty fields are filled
/// from the brand before the school is created.
pub async fn create_school(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<Organization>)> {
    let brand = require_brand(&state, id).await?;
    let brand_value = serde_json::to_value(&brand)
        .map_err(|e| AppError::InternalError(format!("brand serialization failed: {e}")))?;

    let merged = merge_if_empty(&body, &brand_value, INHERITED_FIELDS);
    let mut input: CreateOrganization = serde_json::from_value(merged)
        .map_err(|e| AppError::BadRequest(format!("malformed school payload: {e}")))?;
    input.brand_id = Some(brand.id);

    let input = normalize_contacts(input);
    let slug = resolve_slug(&state.pool, &input).await?;
    let school = OrganizationRepo::create(&state.pool, KIND_SCHOOL, &slug, &input).await?;
    Ok((StatusCode::CREATED, Json(school)))
}

async fn require_brand(state: &AppState, id: DbId) -> AppResult<Organization> {
    let org = OrganizationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Brand",
            id,
        }))?;
    if org.kind != KIND_BRAND {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Brand",
            id,
        }));
    }
    Ok(org)
}
