//! Handlers for the `/schools` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use maktab_core::error::CoreError;
use maktab_core::normalize::{
    generate_slug, generate_unique_slug, normalize_phone, normalize_social_handle,
    normalize_website,
};
use maktab_core::types::DbId;
use maktab_db::models::listing::SchoolListingRow;
use maktab_db::models::organization::{CreateOrganization, Organization, KIND_SCHOOL, STATUSES};
use maktab_db::models::school_details::{SchoolDetails, UpsertSchoolDetails};
use maktab_db::repositories::{ListingRepo, OrganizationRepo, SchoolDetailsRepo};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::query::ListingQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/schools
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> AppResult<Json<DataResponse<Vec<SchoolListingRow>>>> {
    let filter = query.into_filter();
    let rows = ListingRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/schools
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrganization>,
) -> AppResult<(StatusCode, Json<Organization>)> {
    let input = normalize_contacts(input);
    let slug = resolve_slug(&state.pool, &input).await?;
    let school = OrganizationRepo::create(&state.pool, KIND_SCHOOL, &slug, &input).await?;
    Ok((StatusCode::CREATED, Json(school)))
}

/// GET /api/v1/schools/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Organization>> {
    let school = OrganizationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "School",
            id,
        }))?;
    Ok(Json(school))
}

/// GET /api/v1/schools/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Organization>> {
    let school = OrganizationRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundSlug {
                entity: "School",
                slug: slug.clone(),
            })
        })?;
    Ok(Json(school))
}

#[derive(Debug, Deserialize)]
pub struct SetStatusPayload {
    pub status: String,
}

/// PUT /api/v1/schools/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<SetStatusPayload>,
) -> AppResult<Json<Organization>> {
    if !STATUSES.contains(&payload.status.as_str()) {
        return Err(AppError::BadRequest(format!(
            "status must be one of: {}",
            STATUSES.join(", ")
        )));
    }
    let school = OrganizationRepo::set_status(&state.pool, id, &payload.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "School",
            id,
        }))?;
    Ok(Json(school))
}

/// DELETE /api/v1/schools/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = OrganizationRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "School",
            id,
        }))
    }
}

/// POST /api/v1/schools/{id}/restore
pub async fn restore(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let restored = OrganizationRepo::restore(&state.pool, id).await?;
    if restored {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "School",
            id,
        }))
    }
}

/// GET /api/v1/schools/{id}/details
pub async fn get_details(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SchoolDetails>> {
    let details = SchoolDetailsRepo::find(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "School details",
            id,
        }))?;
    Ok(Json(details))
}

/// PUT /api/v1/schools/{id}/details
pub async fn upsert_details(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertSchoolDetails>,
) -> AppResult<Json<SchoolDetails>> {
    require_school(&state.pool, id).await?;
    let details = SchoolDetailsRepo::upsert(&state.pool, id, &input).await?;
    Ok(Json(details))
}

/// Ensure a live school with the given ID exists.
pub(crate) async fn require_school(pool: &PgPool, id: DbId) -> AppResult<Organization> {
    OrganizationRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "School",
            id,
        }))
}

/// Run the contact-field normalizers over a creation payload.
pub(crate) fn normalize_contacts(mut input: CreateOrganization) -> CreateOrganization {
    input.phone = input.phone.as_deref().and_then(normalize_phone);
    for extra in &mut input.additional_phones {
        if let Some(normalized) = normalize_phone(&extra.phone) {
            extra.phone = normalized;
        }
    }
    input.website = input.website.as_deref().and_then(normalize_website);
    input.instagram = input.instagram.as_deref().and_then(normalize_social_handle);
    input.telegram = input.telegram.as_deref().and_then(normalize_social_handle);
    input.facebook = input.facebook.as_deref().and_then(normalize_social_handle);
    input
}

/// Derive a unique slug for a new organization: the explicit slug when
/// given, else the name, with numeric suffixes on collision.
pub(crate) async fn resolve_slug(
    pool: &PgPool,
    input: &CreateOrganization,
) -> AppResult<String> {
    let base = generate_slug(input.slug.as_deref().unwrap_or(&input.name_uz));
    if base.is_empty() {
        return Err(AppError::BadRequest(
            "name must contain at least one alphanumeric character".into(),
        ));
    }
    let existing = OrganizationRepo::slugs_with_base(pool, &base).await?;
    Ok(generate_unique_slug(&base, &existing))
}
