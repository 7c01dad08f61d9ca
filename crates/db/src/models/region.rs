//! Region and district reference data.

use maktab_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `regions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Region {
    pub id: DbId,
    pub name_uz: String,
    pub name_ru: Option<String>,
}

/// A row from the `districts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct District {
    pub id: DbId,
    pub region_id: DbId,
    pub name_uz: String,
    pub name_ru: Option<String>,
}
