//! Review entity model and DTOs.

use maktab_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub organization_id: DbId,
    pub author_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub school_response: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a review. Rating bounds are validated by the API
/// layer and enforced again by the table CHECK constraint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub author_name: String,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Aggregate rating for one organization.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RatingSummary {
    pub rating: f64,
    pub review_count: i64,
}
