//! Rate models for the Service-Request Pricing Engine.
//!
//! The catalog stores rates as they were authored (plain numbers or free-form
//! strings); the rate parser normalizes them into the tagged [`RateDescriptor`]
//! union that the pricing engine consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The measurement tag inferred from a catalog rate.
///
/// Drives the minimum-billing rule and the worker-allowance branch that
/// applies to a quote.
///
/// # Example
///
/// ```
/// use pricing_engine::models::QuantityUnit;
///
/// let unit = QuantityUnit::Kg;
/// assert_eq!(unit.to_string(), "kg");
/// assert_eq!(QuantityUnit::SqM.to_string(), "sq.m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    /// Kilograms (laundry by weight).
    Kg,
    /// Square metres (surface work).
    #[serde(rename = "sq.m")]
    SqM,
    /// Individual pieces.
    Piece,
    /// Pairs (laundry footwear).
    Pair,
    /// Machine loads.
    Load,
    /// Bags.
    Bag,
    /// Generic unit; the fallback when no marker matches.
    Unit,
}

impl std::fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QuantityUnit::Kg => "kg",
            QuantityUnit::SqM => "sq.m",
            QuantityUnit::Piece => "piece",
            QuantityUnit::Pair => "pair",
            QuantityUnit::Load => "load",
            QuantityUnit::Bag => "bag",
            QuantityUnit::Unit => "unit",
        };
        write!(f, "{}", s)
    }
}

/// A catalog rate exactly as authored.
///
/// Catalog entries are either a bare amount (e.g. `3150`) or a free-form
/// string (e.g. `"₱39/kg (min 8 kg)"`). The untagged representation lets the
/// YAML catalog keep both forms side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRate {
    /// A bare numeric amount.
    Amount(Decimal),
    /// A free-form rate string to be normalized by the rate parser.
    Text(String),
}

/// A normalized catalog rate.
///
/// Every non-empty raw rate resolves to exactly one descriptor with a
/// non-negative amount and one quantity unit. Strings carrying an advisory
/// maximum normalize to [`RateDescriptor::PerUnit`]; maxima never enter
/// billing.
///
/// # Example
///
/// ```
/// use pricing_engine::models::{QuantityUnit, RateDescriptor};
/// use rust_decimal::Decimal;
///
/// let rate = RateDescriptor::PerUnitWithMin {
///     amount: Decimal::from(39),
///     unit: QuantityUnit::Kg,
///     min: 8,
/// };
/// assert_eq!(rate.amount(), Decimal::from(39));
/// assert_eq!(rate.unit(), QuantityUnit::Kg);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateDescriptor {
    /// A fixed amount billed per input unit.
    Fixed {
        /// The amount billed per unit of quantity.
        amount: Decimal,
    },
    /// An amount billed per explicit quantity unit.
    PerUnit {
        /// The amount billed per unit of quantity.
        amount: Decimal,
        /// The quantity unit the amount applies to.
        unit: QuantityUnit,
    },
    /// A per-unit amount with a minimum billable quantity.
    PerUnitWithMin {
        /// The amount billed per unit of quantity.
        amount: Decimal,
        /// The quantity unit the amount applies to.
        unit: QuantityUnit,
        /// The minimum billable quantity declared by the catalog entry.
        min: u32,
    },
}

impl RateDescriptor {
    /// Returns the normalized per-unit amount.
    pub fn amount(&self) -> Decimal {
        match self {
            RateDescriptor::Fixed { amount }
            | RateDescriptor::PerUnit { amount, .. }
            | RateDescriptor::PerUnitWithMin { amount, .. } => *amount,
        }
    }

    /// Returns the quantity unit this rate is billed against.
    ///
    /// Fixed amounts bill against the generic unit tag.
    pub fn unit(&self) -> QuantityUnit {
        match self {
            RateDescriptor::Fixed { .. } => QuantityUnit::Unit,
            RateDescriptor::PerUnit { unit, .. }
            | RateDescriptor::PerUnitWithMin { unit, .. } => *unit,
        }
    }
}
