//! Repository for the `school_details` table.
//!
//! Every write recomputes the flat `grade_from`/`grade_to` and
//! `price_min`/`price_max` projections from the authoritative
//! `accepted_grades` and `pricing_tiers` inputs. The flat price fields
//! are only taken from the caller when there are no tiers.

use maktab_core::pricing::{derive_grade_range, derive_price_range};
use maktab_core::sections::{EducationSection, ResultsSection};
use maktab_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::school_details::{SchoolDetails, UpsertSchoolDetails};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "organization_id, school_type, accepted_grades, grade_from, grade_to, \
    primary_languages, additional_languages, curriculum, specializations, pricing_tiers, \
    price_min, price_max, has_meals, has_transport, has_dormitory, exam_results, \
    olympiad_achievements, university_admissions, updated_at";

/// Provides operations on the one-to-one school extension record.
pub struct SchoolDetailsRepo;

impl SchoolDetailsRepo {
    /// Find the details row for an organization.
    pub async fn find(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<Option<SchoolDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM school_details WHERE organization_id = $1");
        sqlx::query_as::<_, SchoolDetails>(&query)
            .bind(organization_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the details record from the combined upsert
    /// endpoint payload.
    pub async fn upsert(
        pool: &PgPool,
        organization_id: DbId,
        input: &UpsertSchoolDetails,
    ) -> Result<SchoolDetails, sqlx::Error> {
        let (grade_from, grade_to) = split(derive_grade_range(&input.accepted_grades));
        let (price_min, price_max) = match derive_price_range(&input.pricing_tiers) {
            Some((min, max)) => (Some(min), Some(max)),
            None => (input.price_min, input.price_max),
        };

        let query = format!(
            "INSERT INTO school_details
                (organization_id, school_type, accepted_grades, grade_from, grade_to,
                 primary_languages, additional_languages, curriculum, specializations,
                 pricing_tiers, price_min, price_max, has_meals, has_transport, has_dormitory)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     COALESCE($13, FALSE), COALESCE($14, FALSE), COALESCE($15, FALSE))
             ON CONFLICT (organization_id) DO UPDATE SET
                school_type = EXCLUDED.school_type,
                accepted_grades = EXCLUDED.accepted_grades,
                grade_from = EXCLUDED.grade_from,
                grade_to = EXCLUDED.grade_to,
                primary_languages = EXCLUDED.primary_languages,
                additional_languages = EXCLUDED.additional_languages,
                curriculum = EXCLUDED.curriculum,
                specializations = EXCLUDED.specializations,
                pricing_tiers = EXCLUDED.pricing_tiers,
                price_min = EXCLUDED.price_min,
                price_max = EXCLUDED.price_max,
                has_meals = COALESCE($13, school_details.has_meals),
                has_transport = COALESCE($14, school_details.has_transport),
                has_dormitory = COALESCE($15, school_details.has_dormitory)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SchoolDetails>(&query)
            .bind(organization_id)
            .bind(&input.school_type)
            .bind(&input.accepted_grades)
            .bind(grade_from)
            .bind(grade_to)
            .bind(&input.primary_languages)
            .bind(&input.additional_languages)
            .bind(&input.curriculum)
            .bind(&input.specializations)
            .bind(Json(&input.pricing_tiers))
            .bind(price_min)
            .bind(price_max)
            .bind(input.has_meals)
            .bind(input.has_transport)
            .bind(input.has_dormitory)
            .fetch_one(pool)
            .await
    }

    /// Replace the education-section fields with the submitted form
    /// state, recomputing the grade and price projections.
    pub async fn update_education(
        pool: &PgPool,
        organization_id: DbId,
        edu: &EducationSection,
    ) -> Result<SchoolDetails, sqlx::Error> {
        let (grade_from, grade_to) = split(derive_grade_range(&edu.accepted_grades));
        let (price_min, price_max) = match derive_price_range(&edu.pricing_tiers) {
            Some((min, max)) => (Some(min), Some(max)),
            None => (edu.price_min, edu.price_max),
        };

        let query = format!(
            "INSERT INTO school_details
                (organization_id, accepted_grades, grade_from, grade_to,
                 primary_languages, additional_languages, curriculum, specializations,
                 pricing_tiers, price_min, price_max)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             ON CONFLICT (organization_id) DO UPDATE SET
                accepted_grades = EXCLUDED.accepted_grades,
                grade_from = EXCLUDED.grade_from,
                grade_to = EXCLUDED.grade_to,
                primary_languages = EXCLUDED.primary_languages,
                additional_languages = EXCLUDED.additional_languages,
                curriculum = EXCLUDED.curriculum,
                specializations = EXCLUDED.specializations,
                pricing_tiers = EXCLUDED.pricing_tiers,
                price_min = EXCLUDED.price_min,
                price_max = EXCLUDED.price_max
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SchoolDetails>(&query)
            .bind(organization_id)
            .bind(&edu.accepted_grades)
            .bind(grade_from)
            .bind(grade_to)
            .bind(&edu.primary_languages)
            .bind(&edu.additional_languages)
            .bind(&edu.curriculum)
            .bind(&edu.specializations)
            .bind(Json(&edu.pricing_tiers))
            .bind(price_min)
            .bind(price_max)
            .fetch_one(pool)
            .await
    }

    /// Store the school type submitted with the basic-info form. The
    /// column lives here rather than on the organization row because it
    /// only applies to schools.
    pub async fn set_school_type(
        pool: &PgPool,
        organization_id: DbId,
        school_type: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO school_details (organization_id, school_type)
             VALUES ($1, $2)
             ON CONFLICT (organization_id) DO UPDATE SET school_type = EXCLUDED.school_type",
        )
        .bind(organization_id)
        .bind(school_type)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Replace the results-section fields with the submitted form state.
    pub async fn update_results(
        pool: &PgPool,
        organization_id: DbId,
        results: &ResultsSection,
    ) -> Result<SchoolDetails, sqlx::Error> {
        let query = format!(
            "INSERT INTO school_details
                (organization_id, exam_results, olympiad_achievements, university_admissions)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (organization_id) DO UPDATE SET
                exam_results = EXCLUDED.exam_results,
                olympiad_achievements = EXCLUDED.olympiad_achievements,
                university_admissions = EXCLUDED.university_admissions
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SchoolDetails>(&query)
            .bind(organization_id)
            .bind(Json(&results.exam_results))
            .bind(&results.olympiad_achievements)
            .bind(&results.university_admissions)
            .fetch_one(pool)
            .await
    }
}

fn split<T>(range: Option<(T, T)>) -> (Option<T>, Option<T>) {
    match range {
        Some((from, to)) => (Some(from), Some(to)),
        None => (None, None),
    }
}
