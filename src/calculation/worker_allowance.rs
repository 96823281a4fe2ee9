//! Worker allowance policy.
//!
//! Each category caps how many workers a client may request for a given
//! quantity, and a platform-wide cap of six workers applies on top. A
//! separate unit-specific eligibility threshold controls whether the
//! extra-worker option is offered at all.

use crate::models::{CAR_WASHING, CARPENTRY, ELECTRICAL_WORKS, LAUNDRY, PLUMBING, QuantityUnit};

/// The platform-wide cap on workers per request, regardless of category.
pub const WORKER_CAP: u32 = 6;

/// The quantity a request must exceed before extra workers are offered.
///
/// Weight- and area-priced work needs more volume before a second pair of
/// hands is worth billing for.
pub fn extra_worker_threshold(unit: QuantityUnit) -> u32 {
    match unit {
        QuantityUnit::Kg => 10,
        QuantityUnit::Piece => 8,
        QuantityUnit::SqM => 5,
        _ => 3,
    }
}

/// Computes the category-specific worker ceiling for a quantity.
///
/// The quantity referenced here is the raw input quantity, not the billable
/// (minimum-raised) quantity. Branch order within each category is load
/// bearing and must not be rearranged; for Electrical Works the `<= 1` check
/// runs before the band checks, which resolves the only ambiguous boundary.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::max_workers;
/// use pricing_engine::models::QuantityUnit;
///
/// assert_eq!(max_workers("Car Washing", QuantityUnit::Unit, 1), 1);
/// assert_eq!(max_workers("Car Washing", QuantityUnit::Unit, 2), 5);
/// assert_eq!(max_workers("Carpentry", QuantityUnit::SqM, 5), 3);
/// ```
pub fn max_workers(service_type: &str, unit: QuantityUnit, quantity: u32) -> u32 {
    match service_type {
        CAR_WASHING => {
            if quantity >= 2 {
                5
            } else {
                1
            }
        }
        PLUMBING => {
            if quantity > 3 {
                5
            } else {
                1
            }
        }
        ELECTRICAL_WORKS => {
            if quantity <= 1 {
                1
            } else if quantity > 5 {
                5
            } else {
                3
            }
        }
        CARPENTRY => match unit {
            QuantityUnit::SqM => {
                if quantity < 5 {
                    1
                } else if quantity == 5 {
                    3
                } else {
                    6
                }
            }
            _ => {
                if quantity <= 1 {
                    1
                } else if quantity == 5 {
                    3
                } else if quantity > 5 {
                    6
                } else {
                    3
                }
            }
        },
        LAUNDRY => match unit {
            QuantityUnit::Kg => {
                if quantity <= 8 {
                    1
                } else if (10..=15).contains(&quantity) {
                    3
                } else if quantity > 15 {
                    5
                } else {
                    1
                }
            }
            QuantityUnit::Piece => {
                if quantity <= 5 {
                    1
                } else if (6..=10).contains(&quantity) {
                    3
                } else if quantity > 10 {
                    5
                } else {
                    1
                }
            }
            _ => {
                if quantity > 1 {
                    5
                } else {
                    1
                }
            }
        },
        _ => {
            if quantity > 1 {
                5
            } else {
                1
            }
        }
    }
}

/// The effective ceiling offered to the client: the category ceiling under
/// the platform-wide cap.
pub fn worker_ceiling(service_type: &str, unit: QuantityUnit, quantity: u32) -> u32 {
    WORKER_CAP.min(max_workers(service_type, unit, quantity))
}

/// Whether the extra-worker option is offered for this request.
///
/// Requires both the unit eligibility threshold and a category ceiling above
/// one worker.
pub fn allow_extra_workers(service_type: &str, unit: QuantityUnit, quantity: u32) -> bool {
    quantity > extra_worker_threshold(unit) && max_workers(service_type, unit, quantity) > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    /// WA-001: Car Washing ceiling
    #[test]
    fn test_car_washing_ceiling() {
        assert_eq!(max_workers(CAR_WASHING, QuantityUnit::Unit, 1), 1);
        assert_eq!(max_workers(CAR_WASHING, QuantityUnit::Unit, 2), 5);
        assert_eq!(max_workers(CAR_WASHING, QuantityUnit::Unit, 10), 5);
    }

    /// WA-002: Plumbing ceiling
    #[test]
    fn test_plumbing_ceiling() {
        assert_eq!(max_workers(PLUMBING, QuantityUnit::Unit, 3), 1);
        assert_eq!(max_workers(PLUMBING, QuantityUnit::Unit, 4), 5);
    }

    /// WA-003: Electrical Works bands, low boundary checked first
    #[test]
    fn test_electrical_works_bands() {
        assert_eq!(max_workers(ELECTRICAL_WORKS, QuantityUnit::Unit, 1), 1);
        assert_eq!(max_workers(ELECTRICAL_WORKS, QuantityUnit::Unit, 2), 3);
        assert_eq!(max_workers(ELECTRICAL_WORKS, QuantityUnit::Unit, 5), 3);
        assert_eq!(max_workers(ELECTRICAL_WORKS, QuantityUnit::Unit, 6), 5);
    }

    /// WA-004: Carpentry by area
    #[test]
    fn test_carpentry_square_metre_bands() {
        assert_eq!(max_workers(CARPENTRY, QuantityUnit::SqM, 4), 1);
        assert_eq!(max_workers(CARPENTRY, QuantityUnit::SqM, 5), 3);
        assert_eq!(max_workers(CARPENTRY, QuantityUnit::SqM, 6), 6);
    }

    /// WA-005: Carpentry other units
    #[test]
    fn test_carpentry_other_unit_bands() {
        assert_eq!(max_workers(CARPENTRY, QuantityUnit::Unit, 1), 1);
        assert_eq!(max_workers(CARPENTRY, QuantityUnit::Unit, 2), 3);
        assert_eq!(max_workers(CARPENTRY, QuantityUnit::Unit, 4), 3);
        assert_eq!(max_workers(CARPENTRY, QuantityUnit::Unit, 5), 3);
        assert_eq!(max_workers(CARPENTRY, QuantityUnit::Unit, 6), 6);
    }

    /// WA-006: Laundry by weight
    #[test]
    fn test_laundry_kg_bands() {
        assert_eq!(max_workers(LAUNDRY, QuantityUnit::Kg, 8), 1);
        assert_eq!(max_workers(LAUNDRY, QuantityUnit::Kg, 9), 1);
        assert_eq!(max_workers(LAUNDRY, QuantityUnit::Kg, 10), 3);
        assert_eq!(max_workers(LAUNDRY, QuantityUnit::Kg, 15), 3);
        assert_eq!(max_workers(LAUNDRY, QuantityUnit::Kg, 16), 5);
    }

    /// WA-007: Laundry by piece
    #[test]
    fn test_laundry_piece_bands() {
        assert_eq!(max_workers(LAUNDRY, QuantityUnit::Piece, 5), 1);
        assert_eq!(max_workers(LAUNDRY, QuantityUnit::Piece, 6), 3);
        assert_eq!(max_workers(LAUNDRY, QuantityUnit::Piece, 10), 3);
        assert_eq!(max_workers(LAUNDRY, QuantityUnit::Piece, 11), 5);
    }

    /// WA-008: Laundry other units and unrecognized categories
    #[test]
    fn test_laundry_other_and_unrecognized_category() {
        assert_eq!(max_workers(LAUNDRY, QuantityUnit::Load, 1), 1);
        assert_eq!(max_workers(LAUNDRY, QuantityUnit::Load, 2), 5);
        assert_eq!(max_workers("Gardening", QuantityUnit::Unit, 1), 1);
        assert_eq!(max_workers("Gardening", QuantityUnit::Unit, 2), 5);
    }

    /// WA-009: the platform cap binds Carpentry's ceiling of six
    #[test]
    fn test_platform_cap() {
        assert_eq!(worker_ceiling(CARPENTRY, QuantityUnit::SqM, 20), 6);
        assert_eq!(worker_ceiling(CAR_WASHING, QuantityUnit::Unit, 20), 5);
    }

    /// WA-010: eligibility thresholds per unit
    #[test]
    fn test_eligibility_thresholds() {
        assert_eq!(extra_worker_threshold(QuantityUnit::Kg), 10);
        assert_eq!(extra_worker_threshold(QuantityUnit::Piece), 8);
        assert_eq!(extra_worker_threshold(QuantityUnit::SqM), 5);
        assert_eq!(extra_worker_threshold(QuantityUnit::Unit), 3);
        assert_eq!(extra_worker_threshold(QuantityUnit::Load), 3);
    }

    /// WA-011: the extra-worker option needs both gates
    #[test]
    fn test_allow_extra_workers_needs_both_gates() {
        // Below the unit threshold: not offered even though the table allows 5.
        assert!(!allow_extra_workers(CAR_WASHING, QuantityUnit::Unit, 2));
        // Above the threshold with a ceiling above one: offered.
        assert!(allow_extra_workers(PLUMBING, QuantityUnit::Unit, 4));
        // At the threshold exactly: still not offered.
        assert!(!allow_extra_workers(PLUMBING, QuantityUnit::Unit, 3));
        // Weight work past its higher threshold: offered.
        assert!(allow_extra_workers(LAUNDRY, QuantityUnit::Kg, 11));
    }
}
