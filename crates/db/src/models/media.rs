//! Media entity model and DTOs.

use maktab_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub organization_id: DbId,
    pub url: String,
    pub category: String,
    pub is_cover: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for registering a media item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMedia {
    pub url: String,
    /// Defaults to `'photo'` if omitted.
    pub category: Option<String>,
    #[serde(default)]
    pub is_cover: bool,
    pub sort_order: Option<i32>,
}

/// DTO for updating a media item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMedia {
    pub category: Option<String>,
    pub is_cover: Option<bool>,
    pub sort_order: Option<i32>,
}
