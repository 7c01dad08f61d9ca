//! School details model: one-to-one extension of a school organization.

use maktab_core::pricing::PricingTier;
use maktab_core::sections::ExamResult;
use maktab_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `school_details` table.
///
/// `grade_from`/`grade_to` and `price_min`/`price_max` are projections
/// of `accepted_grades` and `pricing_tiers`, recomputed on every write.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SchoolDetails {
    pub organization_id: DbId,
    pub school_type: Option<String>,
    pub accepted_grades: Vec<i32>,
    pub grade_from: Option<i32>,
    pub grade_to: Option<i32>,
    pub primary_languages: Vec<String>,
    pub additional_languages: Vec<String>,
    pub curriculum: Vec<String>,
    pub specializations: Vec<String>,
    pub pricing_tiers: Json<Vec<PricingTier>>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub has_meals: bool,
    pub has_transport: bool,
    pub has_dormitory: bool,
    pub exam_results: Json<Vec<ExamResult>>,
    pub olympiad_achievements: Vec<String>,
    pub university_admissions: Vec<String>,
    pub updated_at: Timestamp,
}

/// DTO for the combined organization + details upsert endpoint.
///
/// Flat price fields are only honored when `pricing_tiers` is empty;
/// otherwise the projection wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpsertSchoolDetails {
    pub school_type: Option<String>,
    pub accepted_grades: Vec<i32>,
    pub primary_languages: Vec<String>,
    pub additional_languages: Vec<String>,
    pub curriculum: Vec<String>,
    pub specializations: Vec<String>,
    pub pricing_tiers: Vec<PricingTier>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub has_meals: Option<bool>,
    pub has_transport: Option<bool>,
    pub has_dormitory: Option<bool>,
}
