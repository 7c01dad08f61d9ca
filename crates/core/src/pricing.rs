//! Pricing tiers and derived range projections.
//!
//! `accepted_grades` and `pricing_tiers` are the authoritative inputs.
//! The flat `grade_from`/`grade_to` and `price_min`/`price_max` columns
//! kept for backward compatibility are projections recomputed on every
//! write by the save paths, never accepted as direct input when the
//! authoritative lists are present.

use serde::{Deserialize, Serialize};

/// A priced bucket of grades, e.g. grades 1-4 at one monthly fee and
/// grades 5-11 at another. Replaces a single flat price range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Grades covered by this tier. Grade 0 is the preparatory grade.
    pub grades: Vec<i32>,
    /// Monthly fee in UZS.
    pub price: i64,
}

/// Derive the flat `(price_min, price_max)` projection from pricing
/// tiers. Returns `None` for an empty tier list.
pub fn derive_price_range(tiers: &[PricingTier]) -> Option<(i64, i64)> {
    let min = tiers.iter().map(|t| t.price).min()?;
    let max = tiers.iter().map(|t| t.price).max()?;
    Some((min, max))
}

/// Derive the flat `(grade_from, grade_to)` projection from the accepted
/// grades list. Returns `None` for an empty list.
pub fn derive_grade_range(grades: &[i32]) -> Option<(i32, i32)> {
    let from = grades.iter().copied().min()?;
    let to = grades.iter().copied().max()?;
    Some((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(grades: &[i32], price: i64) -> PricingTier {
        PricingTier {
            grades: grades.to_vec(),
            price,
        }
    }

    #[test]
    fn price_range_is_min_max_of_tiers() {
        let tiers = vec![tier(&[1, 2, 3, 4], 2_500_000), tier(&[5, 6, 7], 3_200_000)];
        assert_eq!(derive_price_range(&tiers), Some((2_500_000, 3_200_000)));
    }

    #[test]
    fn empty_tiers_yield_no_range() {
        assert_eq!(derive_price_range(&[]), None);
    }

    #[test]
    fn grade_range_includes_preparatory_zero() {
        assert_eq!(derive_grade_range(&[0, 1, 2, 3]), Some((0, 3)));
        assert_eq!(derive_grade_range(&[]), None);
    }
}
