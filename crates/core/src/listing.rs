//! Listing filter and sort primitives.
//!
//! This module lives in `core` (zero internal deps) so the repository
//! layer and any future tooling share one definition of the filter
//! shape, sort options, and the popularity formula. The repository
//! pushes what Postgres can express into SQL and evaluates the rest over
//! the fetched rows; see `maktab-db`'s listing repository for the split.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Hard cap on rows fetched per listing call. There is no cursor-based
/// pagination in this path.
pub const MAX_LISTING_RESULTS: i64 = 100;

/// Weight of the average rating in the popularity score.
pub const POPULARITY_RATING_WEIGHT: f64 = 0.7;

/// Weight of the review count in the popularity score.
pub const POPULARITY_REVIEWS_WEIGHT: f64 = 0.3;

/// Composite popularity score: `0.7 * rating + 0.3 * review_count`.
pub fn popularity_score(rating: f64, review_count: i64) -> f64 {
    POPULARITY_RATING_WEIGHT * rating + POPULARITY_REVIEWS_WEIGHT * review_count as f64
}

/// Clamp a requested limit to `1..=MAX_LISTING_RESULTS`.
pub fn clamp_limit(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(MAX_LISTING_RESULTS)
        .clamp(1, MAX_LISTING_RESULTS)
}

/// Sort options accepted by the listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    RatingDesc,
    RatingAsc,
    PriceAsc,
    PriceDesc,
    ReviewsDesc,
    Popularity,
}

impl SortOption {
    /// Whether the hosted query layer can order natively. Price sorts
    /// depend on the tier-derived price and popularity is a composite,
    /// so both happen in memory after fetching.
    pub fn pushed_down(&self) -> bool {
        matches!(
            self,
            SortOption::RatingDesc | SortOption::RatingAsc | SortOption::ReviewsDesc
        )
    }

    /// ORDER BY clause for push-down sorts; `None` for in-memory sorts
    /// (the repo falls back to rating ordering for a stable fetch).
    pub fn order_by_sql(&self) -> Option<&'static str> {
        match self {
            SortOption::RatingDesc => Some("rating DESC"),
            SortOption::RatingAsc => Some("rating ASC"),
            SortOption::ReviewsDesc => Some("review_count DESC"),
            _ => None,
        }
    }
}

/// Optional listing predicates. An empty filter lists published
/// schools ordered by rating, up to the cap.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingFilter {
    pub region: Option<DbId>,
    pub districts: Vec<DbId>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub curriculum: Vec<String>,
    pub languages: Vec<String>,
    pub rating_min: Option<f64>,
    pub has_meals: Option<bool>,
    pub has_transport: Option<bool>,
    pub has_dormitory: Option<bool>,
    pub sort: Option<SortOption>,
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popularity_matches_formula() {
        let score = popularity_score(4.5, 20);
        assert!((score - (0.7 * 4.5 + 0.3 * 20.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn limit_is_clamped_to_cap() {
        assert_eq!(clamp_limit(None), MAX_LISTING_RESULTS);
        assert_eq!(clamp_limit(Some(10)), 10);
        assert_eq!(clamp_limit(Some(10_000)), MAX_LISTING_RESULTS);
        assert_eq!(clamp_limit(Some(0)), 1);
    }

    #[test]
    fn only_native_sorts_are_pushed_down() {
        assert!(SortOption::RatingDesc.pushed_down());
        assert!(SortOption::ReviewsDesc.pushed_down());
        assert!(!SortOption::PriceAsc.pushed_down());
        assert!(!SortOption::Popularity.pushed_down());
        assert!(SortOption::PriceDesc.order_by_sql().is_none());
    }

    #[test]
    fn sort_option_parses_from_query_strings() {
        let sort: SortOption = serde_json::from_str("\"price_asc\"").unwrap();
        assert_eq!(sort, SortOption::PriceAsc);
    }
}
