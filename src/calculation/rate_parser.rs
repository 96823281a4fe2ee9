//! Rate normalization.
//!
//! Catalog rates arrive as bare amounts or free-form strings. This module
//! converts them into the tagged [`RateDescriptor`] union the engine consumes,
//! preserving the classification order the catalog strings were authored
//! against, and provides the display label used by the presentation layer.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    CAR_WASHING, CARPENTRY, ELECTRICAL_WORKS, LAUNDRY, PLUMBING, QuantityUnit, RateDescriptor,
    RawRate,
};

/// Categories whose rates are displayed as "per unit <rate>" even when the
/// catalog entry is a plain fixed amount. They are billed per input quantity
/// identically to explicit per-unit entries.
const PER_UNIT_LABELED: [&str; 4] = [CAR_WASHING, PLUMBING, CARPENTRY, ELECTRICAL_WORKS];

/// Per-unit markers that make a string an explicit per-unit rate.
const PER_UNIT_MARKERS: [&str; 8] = [
    "/kg", "/sq.m", "/sqm", "/pc", "/piece", "/pair", "/load", "/bag",
];

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(\.\d+)?").expect("valid number pattern"))
}

fn minimum_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"min\s*(\d+)").expect("valid minimum pattern"))
}

/// Normalizes an authored catalog rate into a [`RateDescriptor`].
///
/// Returns `None` when the rate carries no usable number; callers treat that
/// as "no rate available" and must block progression.
///
/// The unit classification scans marker substrings in a fixed priority order
/// (`sq.m` before `pair` before `piece` before `load` before `bag` before
/// `kg`); reordering would silently reclassify existing catalog strings.
/// The `pair` branch only applies to the Laundry category.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::parse_rate;
/// use pricing_engine::models::{QuantityUnit, RawRate};
/// use rust_decimal::Decimal;
///
/// let raw = RawRate::Text("₱39/kg (min 8 kg)".to_string());
/// let rate = parse_rate(&raw, "Laundry").unwrap();
/// assert_eq!(rate.amount(), Decimal::from(39));
/// assert_eq!(rate.unit(), QuantityUnit::Kg);
/// ```
pub fn parse_rate(raw: &RawRate, service_type: &str) -> Option<RateDescriptor> {
    let text = match raw {
        RawRate::Amount(amount) => {
            return Some(RateDescriptor::Fixed { amount: *amount });
        }
        RawRate::Text(text) => text,
    };

    let lower = text.to_lowercase();
    let numbers: Vec<Decimal> = number_pattern()
        .find_iter(text)
        .filter_map(|m| Decimal::from_str(m.as_str()).ok())
        .collect();

    let first = *numbers.first()?;

    let is_range = lower.contains('-') || lower.contains(" to ");
    let is_per_unit_style = PER_UNIT_MARKERS.iter().any(|m| lower.contains(m));
    let has_bound = lower.contains("min") || lower.contains("max");

    let amount = if is_range && !is_per_unit_style && !has_bound {
        match numbers.get(1) {
            Some(second) => ((first + second) / Decimal::from(2))
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            None => first,
        }
    } else {
        first
    };

    let unit = classify_unit(&lower, service_type);

    let minimum = minimum_pattern()
        .captures(&lower)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());

    let descriptor = match (minimum, unit) {
        (Some(min), unit) => RateDescriptor::PerUnitWithMin { amount, unit, min },
        (None, QuantityUnit::Unit) => RateDescriptor::Fixed { amount },
        (None, unit) => RateDescriptor::PerUnit { amount, unit },
    };

    Some(descriptor)
}

/// Scans a lowercased rate string for unit markers in priority order.
fn classify_unit(lower: &str, service_type: &str) -> QuantityUnit {
    if lower.contains("sq.m") || lower.contains("sqm") {
        QuantityUnit::SqM
    } else if service_type == LAUNDRY && lower.contains("pair") {
        QuantityUnit::Pair
    } else if lower.contains("/pc") || lower.contains("piece") {
        QuantityUnit::Piece
    } else if lower.contains("load") {
        QuantityUnit::Load
    } else if lower.contains("bag") {
        QuantityUnit::Bag
    } else if lower.contains("kg") {
        QuantityUnit::Kg
    } else {
        QuantityUnit::Unit
    }
}

/// Builds the display label for a rate.
///
/// Display only; never enters the billed total. Currency-prefixed strings
/// pass through verbatim, numeric amounts are formatted with thousands
/// separators and no decimal digits, and the fixed-amount categories are
/// labeled "per unit" because they bill per input quantity.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::{format_rate_label, parse_rate};
/// use pricing_engine::models::RawRate;
/// use rust_decimal::Decimal;
///
/// let raw = RawRate::Amount(Decimal::from(2200));
/// let rate = parse_rate(&raw, "Plumbing").unwrap();
/// assert_eq!(format_rate_label(&raw, &rate, "Plumbing"), "per unit ₱2,200");
/// ```
pub fn format_rate_label(raw: &RawRate, rate: &RateDescriptor, service_type: &str) -> String {
    let body = match raw {
        RawRate::Text(text) if text.starts_with('₱') => text.clone(),
        _ => format!("₱{}", group_thousands(rate.amount())),
    };

    if PER_UNIT_LABELED.contains(&service_type) {
        format!("per unit {}", body)
    } else {
        body
    }
}

/// Formats a non-negative amount with thousands separators and no decimals.
fn group_thousands(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();

    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, c) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
