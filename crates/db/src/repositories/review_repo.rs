//! Repository for the `reviews` table.

use maktab_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, RatingSummary, Review};

const COLUMNS: &str =
    "id, organization_id, author_name, rating, comment, school_response, created_at";

/// Provides CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review. Rating bounds are re-checked by the table
    /// CHECK constraint.
    pub async fn create(
        pool: &PgPool,
        organization_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (organization_id, author_name, rating, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(organization_id)
            .bind(&input.author_name)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// List an organization's reviews, newest first.
    pub async fn list_by_organization(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE organization_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(organization_id)
            .fetch_all(pool)
            .await
    }

    /// Attach the school's response to a review.
    pub async fn set_response(
        pool: &PgPool,
        organization_id: DbId,
        id: DbId,
        response: &str,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET school_response = $3
             WHERE id = $1 AND organization_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(organization_id)
            .bind(response)
            .fetch_optional(pool)
            .await
    }

    /// Average rating and review count for one organization.
    pub async fn rating_summary(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<RatingSummary, sqlx::Error> {
        sqlx::query_as::<_, RatingSummary>(
            "SELECT COALESCE(AVG(rating), 0)::DOUBLE PRECISION AS rating,
                    COUNT(id) AS review_count
             FROM reviews WHERE organization_id = $1",
        )
        .bind(organization_id)
        .fetch_one(pool)
        .await
    }

    /// Delete a review belonging to the given organization. Returns
    /// `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        organization_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1 AND organization_id = $2")
            .bind(id)
            .bind(organization_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
