//! Listing row shape for the school directory endpoint.

use maktab_core::pricing::PricingTier;
use maktab_core::types::DbId;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// One school in the directory listing: organization fields joined with
/// details and review aggregates. `rating` is the average review rating
/// (0 when unreviewed); `review_count` the number of reviews.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SchoolListingRow {
    pub id: DbId,
    pub slug: String,
    pub name_uz: String,
    pub name_ru: Option<String>,
    pub region_id: Option<DbId>,
    pub district_id: Option<DbId>,
    pub address: Option<String>,
    pub school_type: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub pricing_tiers: Json<Vec<PricingTier>>,
    pub curriculum: Vec<String>,
    pub primary_languages: Vec<String>,
    pub additional_languages: Vec<String>,
    pub has_meals: bool,
    pub has_transport: bool,
    pub has_dormitory: bool,
    pub rating: f64,
    pub review_count: i64,
}
