//! Shared query parameter types for API handlers.
//!
//! The listing endpoint accepts multi-value predicates as comma-separated
//! query values (`?districts=2,11&curriculum=cambridge,national`) because
//! the query-string deserializer has no repeated-key list support. The
//! conversion into the core filter shape happens here.

use maktab_core::listing::{ListingFilter, SortOption};
use maktab_core::types::DbId;
use serde::Deserialize;

/// Raw query parameters of `GET /schools`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListingQuery {
    pub region: Option<DbId>,
    /// Comma-separated district IDs.
    pub districts: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    /// Comma-separated curriculum names.
    pub curriculum: Option<String>,
    /// Comma-separated instruction languages.
    pub languages: Option<String>,
    pub rating_min: Option<f64>,
    pub has_meals: Option<bool>,
    pub has_transport: Option<bool>,
    pub has_dormitory: Option<bool>,
    pub sort: Option<SortOption>,
    pub limit: Option<i64>,
}

impl ListingQuery {
    /// Convert the raw query into the core filter. Malformed district
    /// IDs are dropped rather than failing the whole request.
    pub fn into_filter(self) -> ListingFilter {
        ListingFilter {
            region: self.region,
            districts: split_ids(self.districts.as_deref()),
            price_min: self.price_min,
            price_max: self.price_max,
            curriculum: split_values(self.curriculum.as_deref()),
            languages: split_values(self.languages.as_deref()),
            rating_min: self.rating_min,
            has_meals: self.has_meals,
            has_transport: self.has_transport,
            has_dormitory: self.has_dormitory,
            sort: self.sort,
            limit: self.limit,
        }
    }
}

fn split_values(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn split_ids(raw: Option<&str>) -> Vec<DbId> {
    raw.map(|s| {
        s.split(',')
            .filter_map(|v| v.trim().parse().ok())
            .collect()
    })
    .unwrap_or_default()
}
