//! Repository for region and district reference data.

use maktab_core::types::DbId;
use sqlx::PgPool;

use crate::models::region::{District, Region};

/// Provides lookups over reference data.
pub struct RegionRepo;

impl RegionRepo {
    /// List all regions, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Region>, sqlx::Error> {
        sqlx::query_as::<_, Region>("SELECT id, name_uz, name_ru FROM regions ORDER BY name_uz ASC")
            .fetch_all(pool)
            .await
    }

    /// List the districts of a region, ordered by name.
    pub async fn districts_by_region(
        pool: &PgPool,
        region_id: DbId,
    ) -> Result<Vec<District>, sqlx::Error> {
        sqlx::query_as::<_, District>(
            "SELECT id, region_id, name_uz, name_ru FROM districts
             WHERE region_id = $1 ORDER BY name_uz ASC",
        )
        .bind(region_id)
        .fetch_all(pool)
        .await
    }

    /// Fuzzy district lookup by name within a region, used when
    /// resolving a geocoded address. A miss is a soft failure: the
    /// caller degrades to manual address entry.
    pub async fn find_district_fuzzy(
        pool: &PgPool,
        region_id: DbId,
        name: &str,
    ) -> Result<Option<District>, sqlx::Error> {
        sqlx::query_as::<_, District>(
            "SELECT id, region_id, name_uz, name_ru FROM districts
             WHERE region_id = $1 AND (name_uz ILIKE '%' || $2 || '%'
                OR name_ru ILIKE '%' || $2 || '%')
             ORDER BY id ASC
             LIMIT 1",
        )
        .bind(region_id)
        .bind(name)
        .fetch_optional(pool)
        .await
    }
}
