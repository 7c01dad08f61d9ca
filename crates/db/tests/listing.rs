//! Integration tests for the listing pipeline against a real database.
//!
//! The in-memory filter and sort stages have their own unit tests; these
//! cover the SQL push-down: published-only visibility, region and
//! district predicates, the rating threshold and native ordering.

use maktab_core::listing::{ListingFilter, SortOption};
use maktab_db::models::organization::{CreateOrganization, KIND_SCHOOL};
use maktab_db::models::review::CreateReview;
use maktab_db::models::school_details::UpsertSchoolDetails;
use maktab_db::repositories::{ListingRepo, OrganizationRepo, ReviewRepo, SchoolDetailsRepo};
use sqlx::PgPool;

struct Seed {
    slug: &'static str,
    region_id: i64,
    district_id: i64,
    published: bool,
    ratings: &'static [i32],
}

async fn seed_school(pool: &PgPool, seed: &Seed) -> i64 {
    let org = OrganizationRepo::create(
        pool,
        KIND_SCHOOL,
        seed.slug,
        &CreateOrganization {
            name_uz: seed.slug.to_string(),
            region_id: Some(seed.region_id),
            district_id: Some(seed.district_id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    SchoolDetailsRepo::upsert(pool, org.id, &UpsertSchoolDetails::default())
        .await
        .unwrap();
    if seed.published {
        OrganizationRepo::set_status(pool, org.id, "published")
            .await
            .unwrap();
    }
    for &rating in seed.ratings {
        ReviewRepo::create(
            pool,
            org.id,
            &CreateReview {
                author_name: "Parent".to_string(),
                rating,
                comment: None,
            },
        )
        .await
        .unwrap();
    }
    org.id
}

// ---------------------------------------------------------------------------
// Test: only published schools are listed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_only_published_schools_appear(pool: PgPool) {
    let published = seed_school(
        &pool,
        &Seed { slug: "pub", region_id: 1, district_id: 2, published: true, ratings: &[] },
    )
    .await;
    let draft = seed_school(
        &pool,
        &Seed { slug: "draft", region_id: 1, district_id: 2, published: false, ratings: &[] },
    )
    .await;

    let rows = ListingRepo::list(&pool, &ListingFilter::default()).await.unwrap();
    assert!(rows.iter().any(|r| r.id == published));
    assert!(
        !rows.iter().any(|r| r.id == draft),
        "draft schools should not be listed"
    );
}

// ---------------------------------------------------------------------------
// Test: region and district predicates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_region_and_district_filters(pool: PgPool) {
    let chilonzor = seed_school(
        &pool,
        &Seed { slug: "chilonzor", region_id: 1, district_id: 2, published: true, ratings: &[] },
    )
    .await;
    let yunusobod = seed_school(
        &pool,
        &Seed { slug: "yunusobod", region_id: 1, district_id: 11, published: true, ratings: &[] },
    )
    .await;

    let filter = ListingFilter {
        region: Some(1),
        districts: vec![2],
        ..Default::default()
    };
    let rows = ListingRepo::list(&pool, &filter).await.unwrap();
    assert!(rows.iter().any(|r| r.id == chilonzor));
    assert!(!rows.iter().any(|r| r.id == yunusobod));

    // Multiple districts widen the match.
    let filter = ListingFilter {
        region: Some(1),
        districts: vec![2, 11],
        ..Default::default()
    };
    let rows = ListingRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(rows.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: rating threshold and default ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_rating_threshold_and_default_sort(pool: PgPool) {
    let strong = seed_school(
        &pool,
        &Seed { slug: "strong", region_id: 1, district_id: 2, published: true, ratings: &[5, 5, 4] },
    )
    .await;
    let weak = seed_school(
        &pool,
        &Seed { slug: "weak", region_id: 1, district_id: 2, published: true, ratings: &[2, 3] },
    )
    .await;

    let filter = ListingFilter {
        rating_min: Some(4.0),
        ..Default::default()
    };
    let rows = ListingRepo::list(&pool, &filter).await.unwrap();
    assert!(rows.iter().any(|r| r.id == strong));
    assert!(!rows.iter().any(|r| r.id == weak));

    // Default sort is rating descending.
    let rows = ListingRepo::list(&pool, &ListingFilter::default()).await.unwrap();
    assert_eq!(rows[0].id, strong);
    assert_eq!(rows[1].id, weak);
    assert_eq!(rows[0].review_count, 3);
}

// ---------------------------------------------------------------------------
// Test: review-count sort is pushed down
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_reviews_sort(pool: PgPool) {
    let busy = seed_school(
        &pool,
        &Seed { slug: "busy", region_id: 1, district_id: 2, published: true, ratings: &[3, 3, 3, 3] },
    )
    .await;
    let quiet = seed_school(
        &pool,
        &Seed { slug: "quiet", region_id: 1, district_id: 2, published: true, ratings: &[5] },
    )
    .await;

    let filter = ListingFilter {
        sort: Some(SortOption::ReviewsDesc),
        ..Default::default()
    };
    let rows = ListingRepo::list(&pool, &filter).await.unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![busy, quiet]);
}
