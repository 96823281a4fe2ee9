//! Quantity coercion and minimum-billing rules.

use crate::models::{LAUNDRY, QuantityUnit};

/// The smallest accepted quantity; non-positive input coerces here.
pub const QUANTITY_MIN: u32 = 1;

/// The largest accepted quantity.
pub const QUANTITY_MAX: u32 = 999;

/// The minimum billable weight for Laundry services priced per kilogram.
pub const LAUNDRY_KG_MINIMUM: u32 = 8;

/// Coerces a user-entered quantity into the accepted range.
///
/// Malformed quantities are recovered locally, never surfaced as errors.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::clamp_quantity;
///
/// assert_eq!(clamp_quantity(0), 1);
/// assert_eq!(clamp_quantity(4), 4);
/// assert_eq!(clamp_quantity(5000), 999);
/// ```
pub fn clamp_quantity(raw: u32) -> u32 {
    raw.clamp(QUANTITY_MIN, QUANTITY_MAX)
}

/// Applies minimum-billing rules to a clamped quantity.
///
/// Laundry priced per kilogram bills at least [`LAUNDRY_KG_MINIMUM`] kg; all
/// other category/unit combinations bill the entered quantity as-is.
///
/// # Returns
///
/// The billable quantity and whether a minimum raised it.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::billable_quantity;
/// use pricing_engine::models::QuantityUnit;
///
/// assert_eq!(billable_quantity("Laundry", QuantityUnit::Kg, 5), (8, true));
/// assert_eq!(billable_quantity("Laundry", QuantityUnit::Kg, 10), (10, false));
/// assert_eq!(billable_quantity("Plumbing", QuantityUnit::Unit, 4), (4, false));
/// ```
pub fn billable_quantity(service_type: &str, unit: QuantityUnit, quantity: u32) -> (u32, bool) {
    if service_type == LAUNDRY && unit == QuantityUnit::Kg && quantity < LAUNDRY_KG_MINIMUM {
        (LAUNDRY_KG_MINIMUM, true)
    } else {
        (quantity, false)
    }
}
