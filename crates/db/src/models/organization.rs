//! Organization entity model and DTOs.
//!
//! An organization is either a school profile or a brand (a parent
//! grouping of schools); the `kind` column distinguishes them.

use maktab_core::sections::AdditionalPhone;
use maktab_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Organization kinds.
pub const KIND_SCHOOL: &str = "school";
pub const KIND_BRAND: &str = "brand";

/// Valid publication statuses.
pub const STATUSES: &[&str] = &["draft", "pending", "published", "rejected", "suspended"];

/// A row from the `organizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organization {
    pub id: DbId,
    pub kind: String,
    pub slug: String,
    pub name_uz: String,
    pub name_ru: Option<String>,
    pub phone: Option<String>,
    pub additional_phones: Json<Vec<AdditionalPhone>>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub telegram: Option<String>,
    pub facebook: Option<String>,
    pub region_id: Option<DbId>,
    pub district_id: Option<DbId>,
    pub address: Option<String>,
    pub landmark: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub status: String,
    pub is_verified: bool,
    pub brand_id: Option<DbId>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new organization.
///
/// `slug` is optional: when omitted the save path derives it from
/// `name_uz` and resolves collisions with numeric suffixes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateOrganization {
    pub name_uz: String,
    pub name_ru: Option<String>,
    pub slug: Option<String>,
    pub phone: Option<String>,
    pub additional_phones: Vec<AdditionalPhone>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub telegram: Option<String>,
    pub facebook: Option<String>,
    pub region_id: Option<DbId>,
    pub district_id: Option<DbId>,
    pub address: Option<String>,
    pub landmark: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub brand_id: Option<DbId>,
}
