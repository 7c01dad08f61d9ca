//! Repository for the `section_progress` table.

use maktab_core::types::DbId;
use sqlx::PgPool;

use crate::models::section_progress::SectionProgress;

const COLUMNS: &str = "id, organization_id, section, progress, saved_at";

/// Provides upsert and listing of per-section completeness records.
pub struct SectionProgressRepo;

impl SectionProgressRepo {
    /// Record the score computed on a successful section save. One row
    /// per organization and section; `saved_at` always moves forward.
    pub async fn upsert(
        pool: &PgPool,
        organization_id: DbId,
        section: &str,
        progress: i32,
    ) -> Result<SectionProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO section_progress (organization_id, section, progress, saved_at)
             VALUES ($1, $2, $3, NOW())
             ON CONFLICT ON CONSTRAINT uq_section_progress_org_section DO UPDATE SET
                progress = EXCLUDED.progress,
                saved_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SectionProgress>(&query)
            .bind(organization_id)
            .bind(section)
            .bind(progress)
            .fetch_one(pool)
            .await
    }

    /// All progress rows for one organization.
    pub async fn list_for_organization(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<Vec<SectionProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM section_progress
             WHERE organization_id = $1
             ORDER BY section ASC"
        );
        sqlx::query_as::<_, SectionProgress>(&query)
            .bind(organization_id)
            .fetch_all(pool)
            .await
    }
}
