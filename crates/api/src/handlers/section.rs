//! Section save and progress handlers.
//!
//! The section PATCH is the workhorse of the profile editor: the client
//! submits the full section form, the server normalizes it, validates it
//! (rejecting with field errors and persisting nothing on failure),
//! writes it to the owning tables and records the recomputed
//! completeness score.

use axum::extract::{Path, State};
use axum::Json;
use maktab_core::normalize::{normalize_phone, normalize_social_handle, normalize_website};
use maktab_core::progress::section_progress;
use maktab_core::sections::{BasicSection, SectionForm, SectionId};
use maktab_core::types::{DbId, Timestamp};
use maktab_core::validation::validate_section;
use maktab_db::models::section_progress::SectionProgress;
use maktab_db::repositories::{
    MediaRepo, OrganizationRepo, SchoolDetailsRepo, SectionProgressRepo, StaffRepo,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::school::require_school;
use crate::state::AppState;

/// Response of a successful section save.
#[derive(Debug, Serialize)]
pub struct SectionSaveResponse {
    pub section: SectionId,
    pub progress: u8,
    pub saved_at: Timestamp,
}

/// PATCH /api/v1/schools/{id}/sections/{section}
pub async fn save_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(DbId, String)>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<SectionSaveResponse>> {
    let section: SectionId = section.parse().map_err(AppError::BadRequest)?;
    require_school(&state.pool, id).await?;

    let form = SectionForm::from_value(section, body)
        .map_err(|e| AppError::BadRequest(format!("malformed {section} form: {e}")))?;
    let form = normalize_form(form);

    let result = validate_section(&form);
    if !result.valid {
        return Err(AppError::Validation(result.errors));
    }

    persist(&state, id, &form).await?;

    let progress = section_progress(&form);
    let record = SectionProgressRepo::upsert(&state.pool, id, section.as_str(), progress as i32)
        .await?;
    Ok(Json(SectionSaveResponse {
        section,
        progress,
        saved_at: record.saved_at,
    }))
}

/// GET /api/v1/schools/{id}/sections
pub async fn list_progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<SectionProgress>>> {
    require_school(&state.pool, id).await?;
    let rows = SectionProgressRepo::list_for_organization(&state.pool, id).await?;
    Ok(Json(rows))
}

async fn persist(state: &AppState, id: DbId, form: &SectionForm) -> AppResult<()> {
    match form {
        SectionForm::Basic(basic) => {
            OrganizationRepo::update_basic(&state.pool, id, basic).await?;
            SchoolDetailsRepo::set_school_type(&state.pool, id, basic.school_type.as_deref())
                .await?;
        }
        SectionForm::Education(edu) => {
            SchoolDetailsRepo::update_education(&state.pool, id, edu).await?;
        }
        SectionForm::Teachers(teachers) => {
            StaffRepo::replace_for_organization(&state.pool, id, &teachers.teachers).await?;
        }
        SectionForm::Results(results) => {
            SchoolDetailsRepo::update_results(&state.pool, id, results).await?;
        }
        SectionForm::Media(media) => {
            MediaRepo::replace_for_organization(&state.pool, id, media).await?;
        }
    }
    Ok(())
}

/// Apply the field normalizers before validation so the stored state is
/// canonical and the validators judge the canonical value.
fn normalize_form(form: SectionForm) -> SectionForm {
    match form {
        SectionForm::Basic(basic) => SectionForm::Basic(normalize_basic(basic)),
        other => other,
    }
}

fn normalize_basic(mut basic: BasicSection) -> BasicSection {
    basic.phone = basic.phone.as_deref().and_then(normalize_phone);
    for extra in &mut basic.additional_phones {
        if let Some(normalized) = normalize_phone(&extra.phone) {
            extra.phone = normalized;
        }
    }
    basic.website = basic.website.as_deref().and_then(normalize_website);
    basic.instagram = basic.instagram.as_deref().and_then(normalize_social_handle);
    basic.telegram = basic.telegram.as_deref().and_then(normalize_social_handle);
    basic.facebook = basic.facebook.as_deref().and_then(normalize_social_handle);
    basic
}
