//! Repository for the `organizations` table (schools and brands).

use maktab_core::sections::BasicSection;
use maktab_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::organization::{CreateOrganization, Organization};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, kind, slug, name_uz, name_ru, phone, additional_phones, \
    email, website, instagram, telegram, facebook, region_id, district_id, \
    address, landmark, latitude, longitude, description, status, is_verified, \
    brand_id, deleted_at, created_at, updated_at";

/// Provides CRUD operations for organizations.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Insert a new organization of the given kind, returning the row.
    ///
    /// `slug` must already be normalized and unique; the duplicate-slug
    /// constraint error is surfaced to the caller untouched.
    pub async fn create(
        pool: &PgPool,
        kind: &str,
        slug: &str,
        input: &CreateOrganization,
    ) -> Result<Organization, sqlx::Error> {
        let query = format!(
            "INSERT INTO organizations
                (kind, slug, name_uz, name_ru, phone, additional_phones, email,
                 website, instagram, telegram, facebook, region_id, district_id,
                 address, landmark, latitude, longitude, description, brand_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                     $14, $15, $16, $17, $18, $19)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(kind)
            .bind(slug)
            .bind(&input.name_uz)
            .bind(&input.name_ru)
            .bind(&input.phone)
            .bind(Json(&input.additional_phones))
            .bind(&input.email)
            .bind(&input.website)
            .bind(&input.instagram)
            .bind(&input.telegram)
            .bind(&input.facebook)
            .bind(input.region_id)
            .bind(input.district_id)
            .bind(&input.address)
            .bind(&input.landmark)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.description)
            .bind(input.brand_id)
            .fetch_one(pool)
            .await
    }

    /// Find an organization by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organization>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM organizations WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an organization by its slug. Excludes soft-deleted rows.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM organizations WHERE slug = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Organization>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// All slugs equal to `base` or starting with `base-`, used to
    /// resolve slug collisions with numeric suffixes.
    pub async fn slugs_with_base(pool: &PgPool, base: &str) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT slug FROM organizations WHERE slug = $1 OR slug LIKE $1 || '-%'")
                .bind(base)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(slug,)| slug).collect())
    }

    /// Replace the basic-section fields of an organization with the
    /// submitted form state. Absent form fields clear their columns;
    /// the form is the full section state, not a partial patch.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update_basic(
        pool: &PgPool,
        id: DbId,
        basic: &BasicSection,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!(
            "UPDATE organizations SET
                name_uz = COALESCE($2, name_uz),
                name_ru = $3,
                phone = $4,
                additional_phones = $5,
                email = $6,
                website = $7,
                instagram = $8,
                telegram = $9,
                facebook = $10,
                region_id = $11,
                district_id = $12,
                address = $13,
                landmark = $14,
                latitude = $15,
                longitude = $16,
                description = $17
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .bind(&basic.name_uz)
            .bind(&basic.name_ru)
            .bind(&basic.phone)
            .bind(Json(&basic.additional_phones))
            .bind(&basic.email)
            .bind(&basic.website)
            .bind(&basic.instagram)
            .bind(&basic.telegram)
            .bind(&basic.facebook)
            .bind(basic.region_id)
            .bind(basic.district_id)
            .bind(&basic.address)
            .bind(&basic.landmark)
            .bind(basic.latitude)
            .bind(basic.longitude)
            .bind(&basic.description)
            .fetch_optional(pool)
            .await
    }

    /// Change an organization's publication status.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!(
            "UPDATE organizations SET status = $2
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// List all brands, ordered by name.
    pub async fn list_brands(pool: &PgPool) -> Result<Vec<Organization>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM organizations
             WHERE kind = 'brand' AND deleted_at IS NULL
             ORDER BY name_uz ASC"
        );
        sqlx::query_as::<_, Organization>(&query).fetch_all(pool).await
    }

    /// List the schools belonging to a brand.
    pub async fn list_by_brand(
        pool: &PgPool,
        brand_id: DbId,
    ) -> Result<Vec<Organization>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM organizations
             WHERE brand_id = $1 AND deleted_at IS NULL
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(brand_id)
            .fetch_all(pool)
            .await
    }

    /// Soft-delete an organization. Returns `true` if a row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE organizations SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted organization. Returns `true` on success.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE organizations SET deleted_at = NULL WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
