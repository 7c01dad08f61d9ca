//! Repository for the `media` table.

use maktab_core::sections::MediaSection;
use maktab_core::types::DbId;
use sqlx::PgPool;

use crate::models::media::{CreateMedia, Media, UpdateMedia};

const COLUMNS: &str = "id, organization_id, url, category, is_cover, sort_order, created_at";

/// Provides CRUD operations for organization media.
pub struct MediaRepo;

impl MediaRepo {
    /// Register a media item. Category defaults to `'photo'`.
    pub async fn create(
        pool: &PgPool,
        organization_id: DbId,
        input: &CreateMedia,
    ) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (organization_id, url, category, is_cover, sort_order)
             VALUES ($1, $2, COALESCE($3, 'photo'), $4, COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(organization_id)
            .bind(&input.url)
            .bind(&input.category)
            .bind(input.is_cover)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List an organization's media, covers first.
    pub async fn list_by_organization(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media
             WHERE organization_id = $1
             ORDER BY is_cover DESC, sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(organization_id)
            .fetch_all(pool)
            .await
    }

    /// Update a media item's metadata. Only non-`None` fields apply.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedia,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "UPDATE media SET
                category = COALESCE($2, category),
                is_cover = COALESCE($3, is_cover),
                sort_order = COALESCE($4, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .bind(&input.category)
            .bind(input.is_cover)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Make one photo the cover, clearing the flag on all others of the
    /// same organization. Returns `false` when the item does not exist.
    pub async fn set_cover(pool: &PgPool, organization_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("UPDATE media SET is_cover = FALSE WHERE organization_id = $1")
            .bind(organization_id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query(
            "UPDATE media SET is_cover = TRUE WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(organization_id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace an organization's media from the media-section form: the
    /// form is the full section state. Runs in one transaction.
    pub async fn replace_for_organization(
        pool: &PgPool,
        organization_id: DbId,
        media: &MediaSection,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM media WHERE organization_id = $1")
            .bind(organization_id)
            .execute(&mut *tx)
            .await?;

        let photos = media.photos.iter().map(|p| (p, "photo"));
        let videos = media.videos.iter().map(|v| (v, "video"));
        for (order, (item, default_category)) in photos.chain(videos).enumerate() {
            sqlx::query(
                "INSERT INTO media (organization_id, url, category, is_cover, sort_order)
                 VALUES ($1, $2, COALESCE($3, $4), $5, $6)",
            )
            .bind(organization_id)
            .bind(&item.url)
            .bind(&item.category)
            .bind(default_category)
            .bind(item.is_cover)
            .bind(order as i32)
            .execute(&mut *tx)
            .await?;
        }

        if let Some(logo_url) = media.logo_url.as_deref() {
            if !logo_url.trim().is_empty() {
                sqlx::query(
                    "INSERT INTO media (organization_id, url, category) VALUES ($1, $2, 'logo')",
                )
                .bind(organization_id)
                .bind(logo_url)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await
    }

    /// Delete a media item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
