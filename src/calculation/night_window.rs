//! Night-time surcharge window.
//!
//! A flat fee applies when the preferred service time falls in the late/early
//! window: 20:00 through 05:59, plus 06:00 and 06:30 exactly.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

/// The flat night-time surcharge.
pub const NIGHT_FEE: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Determines whether the night surcharge applies to a preferred time.
///
/// The time is expected as "HH:MM" (24-hour). An empty or unparsable string
/// means no surcharge; a bad time never fails a quote.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::night_fee_applies;
///
/// assert!(!night_fee_applies("19:59"));
/// assert!(night_fee_applies("20:00"));
/// assert!(night_fee_applies("05:59"));
/// assert!(night_fee_applies("06:30"));
/// assert!(!night_fee_applies("06:15"));
/// assert!(!night_fee_applies(""));
/// ```
pub fn night_fee_applies(preferred_time: &str) -> bool {
    let Ok(time) = NaiveTime::parse_from_str(preferred_time, "%H:%M") else {
        return false;
    };

    let hour = time.hour();
    let minute = time.minute();

    hour >= 20 || hour <= 5 || (hour == 6 && (minute == 0 || minute == 30))
}
