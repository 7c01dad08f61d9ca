//! Repository for the `staff` table.

use maktab_core::sections::StaffEntry;
use maktab_core::types::DbId;
use sqlx::PgPool;

use crate::models::staff::{CreateStaff, Staff, UpdateStaff};

const COLUMNS: &str = "id, organization_id, full_name, position, bio, photo_url, sort_order";

/// Provides CRUD operations for organization staff.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a staff member.
    pub async fn create(
        pool: &PgPool,
        organization_id: DbId,
        input: &CreateStaff,
    ) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff (organization_id, full_name, position, bio, photo_url, sort_order)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(organization_id)
            .bind(&input.full_name)
            .bind(&input.position)
            .bind(&input.bio)
            .bind(&input.photo_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List an organization's staff in display order.
    pub async fn list_by_organization(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<Vec<Staff>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staff
             WHERE organization_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(organization_id)
            .fetch_all(pool)
            .await
    }

    /// Update a staff member. Only non-`None` fields apply.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaff,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET
                full_name = COALESCE($2, full_name),
                position = COALESCE($3, position),
                bio = COALESCE($4, bio),
                photo_url = COALESCE($5, photo_url),
                sort_order = COALESCE($6, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.position)
            .bind(&input.bio)
            .bind(&input.photo_url)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Replace an organization's roster from the teachers-section form:
    /// the form is the full section state. Runs in one transaction.
    pub async fn replace_for_organization(
        pool: &PgPool,
        organization_id: DbId,
        entries: &[StaffEntry],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM staff WHERE organization_id = $1")
            .bind(organization_id)
            .execute(&mut *tx)
            .await?;
        for (order, entry) in entries.iter().enumerate() {
            sqlx::query(
                "INSERT INTO staff (organization_id, full_name, position, bio, photo_url, sort_order)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(organization_id)
            .bind(&entry.full_name)
            .bind(&entry.position)
            .bind(&entry.bio)
            .bind(&entry.photo_url)
            .bind(order as i32)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await
    }

    /// Delete a staff member. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
