//! Per-section completeness records.

use maktab_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `section_progress` table. One row per organization
/// and section, upserted on every successful section save.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SectionProgress {
    pub id: DbId,
    pub organization_id: DbId,
    pub section: String,
    pub progress: i32,
    pub saved_at: Timestamp,
}
