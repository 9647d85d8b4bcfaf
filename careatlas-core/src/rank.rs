//! Ranking comparators for search candidates.
//!
//! Both comparators are pure and induce a total order, so they are stable
//! under `sort_by`. Equal distances fall back to name order, which keeps
//! state-wide results (where no distance is on record) deterministic and
//! readable.

use std::cmp::Ordering;

use crate::listing::{PlaceListing, ProviderListing};

/// Order provider listings paid-tier-first, then by ascending distance.
///
/// Enterprise and Pro carry equal priority; only the paid/free split
/// matters. Unknown distances sort last within their tier class, and equal
/// distances order by name.
///
/// # Examples
/// ```
/// use careatlas_core::{Distance, PlanTier, ProviderListing, tier_then_distance};
///
/// # fn main() -> Result<(), careatlas_core::DistanceError> {
/// let mut listings = vec![
///     ProviderListing::new("a", "Free Near", "Edison", PlanTier::Free)
///         .with_distance(Distance::miles(1.0)?),
///     ProviderListing::new("b", "Paid Far", "Edison", PlanTier::Pro)
///         .with_distance(Distance::miles(40.0)?),
/// ];
/// listings.sort_by(tier_then_distance);
/// assert_eq!(listings.first().map(|l| l.name.as_str()), Some("Paid Far"));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn tier_then_distance(a: &ProviderListing, b: &ProviderListing) -> Ordering {
    match (a.tier.is_paid(), b.tier.is_paid()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .distance
            .cmp(&b.distance)
            .then_with(|| a.name.cmp(&b.name)),
    }
}

/// Order place listings by ascending distance, then by name.
///
/// Supplementary listings have no tier concept. Unknown distances sort
/// last.
#[must_use]
pub fn by_distance(a: &PlaceListing, b: &PlaceListing) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Distance;
    use crate::tier::PlanTier;
    use rstest::rstest;

    fn provider(name: &str, tier: PlanTier, miles: Option<f64>) -> ProviderListing {
        let distance = miles.map_or_else(Distance::unknown, |m| {
            Distance::miles(m).expect("test distances are valid")
        });
        ProviderListing::new(name, name, "Edison", tier).with_distance(distance)
    }

    fn place(name: &str, miles: Option<f64>) -> PlaceListing {
        let distance = miles.map_or_else(Distance::unknown, |m| {
            Distance::miles(m).expect("test distances are valid")
        });
        PlaceListing::new(name, name, "Edison").with_distance(distance)
    }

    #[rstest]
    fn paid_sorts_before_free_irrespective_of_distance() {
        let paid = provider("paid", PlanTier::Pro, Some(50.0));
        let free = provider("free", PlanTier::Free, Some(1.0));
        assert_eq!(tier_then_distance(&paid, &free), Ordering::Less);
        assert_eq!(tier_then_distance(&free, &paid), Ordering::Greater);
    }

    #[rstest]
    fn enterprise_and_pro_rank_equally() {
        let enterprise = provider("ent", PlanTier::Enterprise, Some(50.0));
        let pro = provider("pro", PlanTier::Pro, Some(5.0));
        // Equal tier class: distance decides, so the nearer Pro wins.
        assert_eq!(tier_then_distance(&pro, &enterprise), Ordering::Less);
    }

    #[rstest]
    fn unknown_distance_sorts_last_within_tier_class() {
        let located = provider("located", PlanTier::Pro, Some(100.0));
        let unlocated = provider("unlocated", PlanTier::Pro, None);
        assert_eq!(tier_then_distance(&located, &unlocated), Ordering::Less);
    }

    #[rstest]
    #[case(Some(5.0), Some(25.0), Ordering::Less)]
    #[case(Some(25.0), Some(5.0), Ordering::Greater)]
    #[case(Some(5.0), None, Ordering::Less)]
    fn places_order_by_distance_first(
        #[case] a_miles: Option<f64>,
        #[case] b_miles: Option<f64>,
        #[case] expected: Ordering,
    ) {
        assert_eq!(by_distance(&place("a", a_miles), &place("b", b_miles)), expected);
    }

    #[rstest]
    #[case(Some(5.0))]
    #[case(None)]
    fn equal_distances_fall_back_to_name(#[case] miles: Option<f64>) {
        let alpha = place("Alpha ABA", miles);
        let zeta = place("Zeta Therapy", miles);
        assert_eq!(by_distance(&alpha, &zeta), Ordering::Less);
        assert_eq!(by_distance(&zeta, &alpha), Ordering::Greater);
    }

    #[rstest]
    fn unlocated_providers_order_by_name_within_tier_class() {
        let alpha = provider("Alpha ABA", PlanTier::Free, None);
        let zeta = provider("Zeta Therapy", PlanTier::Free, None);
        assert_eq!(tier_then_distance(&zeta, &alpha), Ordering::Greater);
        assert_eq!(tier_then_distance(&alpha, &zeta), Ordering::Less);
    }
}
