//! Staff entity model and DTOs.

use maktab_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `staff` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Staff {
    pub id: DbId,
    pub organization_id: DbId,
    pub full_name: String,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub sort_order: i32,
}

/// DTO for creating a staff member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStaff {
    pub full_name: String,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a staff member. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStaff {
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub sort_order: Option<i32>,
}
