//! The computed quote.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::QuantityUnit;

/// The itemized result of a pricing computation.
///
/// A result is a pure projection of a [`PricingContext`](super::PricingContext)
/// plus the static catalog. It has no identity of its own and must be
/// recomputed whenever any context field changes; callers must never cache
/// one across input changes.
///
/// # Example
///
/// ```
/// use pricing_engine::models::{PricingResult, QuantityUnit};
/// use rust_decimal::Decimal;
///
/// let result = PricingResult {
///     quantity_unit: QuantityUnit::Unit,
///     billable_quantity: 4,
///     base_rate_amount: Decimal::from(2200),
///     rate_label: "per unit ₱2,200".to_string(),
///     subtotal: Decimal::from(8800),
///     minimum_applied: false,
///     night_fee_applies: true,
///     night_fee: Decimal::from(200),
///     workers_allowed: 5,
///     workers_requested: 5,
///     extra_worker_count: 4,
///     extra_workers_fee: Decimal::from(600),
///     total: Decimal::from(9600),
/// };
/// assert_eq!(result.total, Decimal::from(9600));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// The quantity unit the rate is billed against.
    pub quantity_unit: QuantityUnit,
    /// The quantity actually multiplied against the rate, after minimums.
    pub billable_quantity: u32,
    /// The normalized per-unit rate amount.
    pub base_rate_amount: Decimal,
    /// The display label for the rate (formatting only, not priced).
    pub rate_label: String,
    /// `base_rate_amount * billable_quantity`.
    pub subtotal: Decimal,
    /// Whether a minimum-billing rule raised the billable quantity.
    pub minimum_applied: bool,
    /// Whether the preferred time falls in the night surcharge window.
    pub night_fee_applies: bool,
    /// The flat night surcharge (zero when not applicable).
    pub night_fee: Decimal,
    /// The maximum workers the client may request for this quote.
    pub workers_allowed: u32,
    /// The requested worker count after clamping to `workers_allowed`.
    pub workers_requested: u32,
    /// Workers beyond the first.
    pub extra_worker_count: u32,
    /// The fee for workers beyond the first.
    pub extra_workers_fee: Decimal,
    /// `subtotal + night_fee + extra_workers_fee`.
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_round_trips_through_json() {
        let result = PricingResult {
            quantity_unit: QuantityUnit::Kg,
            billable_quantity: 8,
            base_rate_amount: Decimal::from(39),
            rate_label: "₱39/kg (min 8 kg)".to_string(),
            subtotal: Decimal::from(312),
            minimum_applied: true,
            night_fee_applies: false,
            night_fee: Decimal::ZERO,
            workers_allowed: 1,
            workers_requested: 1,
            extra_worker_count: 0,
            extra_workers_fee: Decimal::ZERO,
            total: Decimal::from(312),
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: PricingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_result_serializes_unit_tag() {
        let result = PricingResult {
            quantity_unit: QuantityUnit::SqM,
            billable_quantity: 5,
            base_rate_amount: Decimal::from(250),
            rate_label: "₱250/sq.m".to_string(),
            subtotal: Decimal::from(1250),
            minimum_applied: false,
            night_fee_applies: false,
            night_fee: Decimal::ZERO,
            workers_allowed: 3,
            workers_requested: 1,
            extra_worker_count: 0,
            extra_workers_fee: Decimal::ZERO,
            total: Decimal::from(1250),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["quantity_unit"], "sq.m");
    }
}
