//! Listing query composition for the school directory.
//!
//! Two explicit stages, each unit-testable on its own:
//!
//! 1. **Push-down** ([`ListingRepo::fetch_candidates`]): predicates
//!    SQL can express directly (region and district equality, the
//!    minimum-rating threshold, published-only) go into the query,
//!    along with native ordering by rating or review count and the
//!    hard row cap.
//! 2. **In-memory** ([`post_filter`] / [`post_sort`]): predicates that
//!    depend on values derived from nested data, such as the price
//!    range computed from the pricing-tier list, curriculum and
//!    language overlap, and amenity flags. The price and popularity
//!    sorts also run here, over the fetched rows.

use maktab_core::listing::{clamp_limit, popularity_score, ListingFilter, SortOption};
use maktab_core::pricing::derive_price_range;
use sqlx::PgPool;

use crate::models::listing::SchoolListingRow;

/// Provides the filtered, ordered school listing.
pub struct ListingRepo;

impl ListingRepo {
    /// Run the full pipeline: push-down fetch, then in-memory filter
    /// and sort. The result never exceeds the listing cap.
    pub async fn list(
        pool: &PgPool,
        filter: &ListingFilter,
    ) -> Result<Vec<SchoolListingRow>, sqlx::Error> {
        let rows = Self::fetch_candidates(pool, filter).await?;
        let mut rows = post_filter(rows, filter);
        post_sort(&mut rows, filter.sort.unwrap_or_default());
        rows.truncate(clamp_limit(filter.limit) as usize);
        Ok(rows)
    }

    /// Stage 1: fetch candidate rows with the push-down predicates.
    ///
    /// For sorts the store cannot perform natively the fetch falls back
    /// to rating ordering so the result set is stable before the
    /// in-memory sort.
    pub async fn fetch_candidates(
        pool: &PgPool,
        filter: &ListingFilter,
    ) -> Result<Vec<SchoolListingRow>, sqlx::Error> {
        let sort = filter.sort.unwrap_or_default();
        let order_by = sort.order_by_sql().unwrap_or("rating DESC");

        let districts: Option<Vec<i64>> = if filter.districts.is_empty() {
            None
        } else {
            Some(filter.districts.clone())
        };

        let query = format!(
            "SELECT o.id, o.slug, o.name_uz, o.name_ru, o.region_id, o.district_id, o.address,
                    d.school_type, d.price_min, d.price_max, d.pricing_tiers,
                    d.curriculum, d.primary_languages, d.additional_languages,
                    d.has_meals, d.has_transport, d.has_dormitory,
                    COALESCE(AVG(r.rating), 0)::DOUBLE PRECISION AS rating,
                    COUNT(r.id) AS review_count
             FROM organizations o
             JOIN school_details d ON d.organization_id = o.id
             LEFT JOIN reviews r ON r.organization_id = o.id
             WHERE o.kind = 'school'
               AND o.status = 'published'
               AND o.deleted_at IS NULL
               AND ($1::BIGINT IS NULL OR o.region_id = $1)
               AND ($2::BIGINT[] IS NULL OR o.district_id = ANY($2))
             GROUP BY o.id, d.organization_id
             HAVING ($3::DOUBLE PRECISION IS NULL OR COALESCE(AVG(r.rating), 0) >= $3)
             ORDER BY {order_by}, o.id ASC
             LIMIT $4"
        );
        sqlx::query_as::<_, SchoolListingRow>(&query)
            .bind(filter.region)
            .bind(districts)
            .bind(filter.rating_min)
            .bind(clamp_limit(filter.limit))
            .fetch_all(pool)
            .await
    }
}

/// The price a school is listed under: the minimum tier price when
/// tiers exist, else the stored flat minimum.
pub fn effective_price(row: &SchoolListingRow) -> Option<i64> {
    derive_price_range(&row.pricing_tiers)
        .map(|(min, _)| min)
        .or(row.price_min)
}

/// Stage 2a: in-memory predicates over the fetched rows.
pub fn post_filter(rows: Vec<SchoolListingRow>, filter: &ListingFilter) -> Vec<SchoolListingRow> {
    rows.into_iter()
        .filter(|row| matches_price(row, filter))
        .filter(|row| matches_overlap(&row.curriculum, &filter.curriculum))
        .filter(|row| matches_languages(row, &filter.languages))
        .filter(|row| matches_flag(row.has_meals, filter.has_meals))
        .filter(|row| matches_flag(row.has_transport, filter.has_transport))
        .filter(|row| matches_flag(row.has_dormitory, filter.has_dormitory))
        .collect()
}

/// Stage 2b: in-memory ordering for sorts the store cannot perform.
/// Push-down sorts are already applied by the fetch and left untouched.
pub fn post_sort(rows: &mut [SchoolListingRow], sort: SortOption) {
    match sort {
        SortOption::PriceAsc => {
            // Unpriced schools sort last.
            rows.sort_by_key(|r| effective_price(r).unwrap_or(i64::MAX));
        }
        SortOption::PriceDesc => {
            rows.sort_by_key(|r| std::cmp::Reverse(effective_price(r).unwrap_or(i64::MIN)));
        }
        SortOption::Popularity => {
            rows.sort_by(|a, b| {
                let pa = popularity_score(a.rating, a.review_count);
                let pb = popularity_score(b.rating, b.review_count);
                pb.partial_cmp(&pa).unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortOption::RatingDesc | SortOption::RatingAsc | SortOption::ReviewsDesc => {}
    }
}

fn matches_price(row: &SchoolListingRow, filter: &ListingFilter) -> bool {
    if filter.price_min.is_none() && filter.price_max.is_none() {
        return true;
    }
    // A price filter only matches schools with a known price.
    let Some(price) = effective_price(row) else {
        return false;
    };
    filter.price_min.is_none_or(|min| price >= min)
        && filter.price_max.is_none_or(|max| price <= max)
}

/// Any-of overlap: an empty wanted list matches everything.
fn matches_overlap(have: &[String], wanted: &[String]) -> bool {
    wanted.is_empty() || wanted.iter().any(|w| have.contains(w))
}

fn matches_languages(row: &SchoolListingRow, wanted: &[String]) -> bool {
    wanted.is_empty()
        || wanted
            .iter()
            .any(|w| row.primary_languages.contains(w) || row.additional_languages.contains(w))
}

fn matches_flag(have: bool, wanted: Option<bool>) -> bool {
    wanted.is_none_or(|w| have == w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maktab_core::pricing::PricingTier;
    use sqlx::types::Json;

    fn row(id: i64, price_min: Option<i64>, tiers: Vec<PricingTier>) -> SchoolListingRow {
        SchoolListingRow {
            id,
            slug: format!("school-{id}"),
            name_uz: format!("School {id}"),
            name_ru: None,
            region_id: Some(1),
            district_id: None,
            address: None,
            school_type: Some("private".into()),
            price_min,
            price_max: price_min,
            pricing_tiers: Json(tiers),
            curriculum: vec!["national".into()],
            primary_languages: vec!["uzbek".into()],
            additional_languages: vec![],
            has_meals: false,
            has_transport: false,
            has_dormitory: false,
            rating: 4.0,
            review_count: 10,
        }
    }

    #[test]
    fn tier_price_overrides_flat_minimum() {
        let with_tiers = row(
            1,
            Some(9_000_000),
            vec![PricingTier {
                grades: vec![1],
                price: 2_000_000,
            }],
        );
        assert_eq!(effective_price(&with_tiers), Some(2_000_000));

        let flat_only = row(2, Some(3_000_000), vec![]);
        assert_eq!(effective_price(&flat_only), Some(3_000_000));
    }

    #[test]
    fn price_filter_excludes_unpriced_schools() {
        let rows = vec![row(1, Some(2_000_000), vec![]), row(2, None, vec![])];
        let filter = ListingFilter {
            price_max: Some(3_000_000),
            ..Default::default()
        };
        let filtered = post_filter(rows, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn removing_a_filter_only_adds_results() {
        let rows = vec![
            row(1, Some(2_000_000), vec![]),
            row(2, Some(5_000_000), vec![]),
            row(3, None, vec![]),
        ];
        let narrow = ListingFilter {
            price_max: Some(3_000_000),
            ..Default::default()
        };
        let wide = ListingFilter::default();

        let narrow_ids: Vec<i64> = post_filter(rows.clone(), &narrow).iter().map(|r| r.id).collect();
        let wide_ids: Vec<i64> = post_filter(rows, &wide).iter().map(|r| r.id).collect();
        assert!(narrow_ids.iter().all(|id| wide_ids.contains(id)));
        assert!(wide_ids.len() >= narrow_ids.len());
    }

    #[test]
    fn curriculum_and_language_filters_use_any_of_overlap() {
        let mut cambridge = row(1, None, vec![]);
        cambridge.curriculum = vec!["cambridge".into(), "national".into()];
        cambridge.additional_languages = vec!["english".into()];
        let national = row(2, None, vec![]);

        let filter = ListingFilter {
            curriculum: vec!["cambridge".into()],
            languages: vec!["english".into()],
            ..Default::default()
        };
        let filtered = post_filter(vec![cambridge, national], &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn popularity_sort_uses_composite_score() {
        // High rating, few reviews vs. lower rating, many reviews.
        let mut quiet = row(1, None, vec![]);
        quiet.rating = 5.0;
        quiet.review_count = 1;
        let mut busy = row(2, None, vec![]);
        busy.rating = 4.0;
        busy.review_count = 50;

        let mut rows = vec![quiet, busy];
        post_sort(&mut rows, SortOption::Popularity);
        // 0.7*4 + 0.3*50 = 17.8 beats 0.7*5 + 0.3*1 = 3.8.
        assert_eq!(rows[0].id, 2);
    }

    #[test]
    fn price_sort_puts_unpriced_rows_last() {
        let mut rows = vec![
            row(1, None, vec![]),
            row(2, Some(4_000_000), vec![]),
            row(3, Some(1_500_000), vec![]),
        ];
        post_sort(&mut rows, SortOption::PriceAsc);
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
