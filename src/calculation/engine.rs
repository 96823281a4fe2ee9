//! Quote computation.
//!
//! The single entry point that turns a [`PricingContext`] and the static
//! catalog into an itemized [`PricingResult`]. Pure and synchronous: no I/O,
//! no shared state, identical inputs always produce an identical result.

use rust_decimal::Decimal;

use crate::config::ServiceCatalog;
use crate::error::{EngineError, EngineResult};
use crate::models::{PricingContext, PricingResult};

use super::night_window::{NIGHT_FEE, night_fee_applies};
use super::quantity::{billable_quantity, clamp_quantity};
use super::rate_parser::{format_rate_label, parse_rate};
use super::worker_allowance::worker_ceiling;

/// The flat fee per worker beyond the first.
pub const EXTRA_WORKER_FEE: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Computes a quote for the given context against the catalog.
///
/// The order of operations is fixed: rate lookup and normalization, quantity
/// clamping, minimum billing, subtotal, night surcharge, worker clamping,
/// extra-worker fee, total. A missing or unusable rate is the only hard
/// failure; every other malformed input degrades to a safe default so the
/// caller can flag the quote incomplete instead of crashing.
///
/// # Errors
///
/// Returns [`EngineError::NoRateAvailable`] when the category/task pair is
/// absent from the catalog or its rate carries no usable number.
///
/// # Example
///
/// ```no_run
/// use pricing_engine::calculation::compute_quote;
/// use pricing_engine::config::CatalogLoader;
/// use pricing_engine::models::PricingContext;
/// use rust_decimal::Decimal;
///
/// let loader = CatalogLoader::load("./config/catalog.yaml").unwrap();
/// let context = PricingContext {
///     service_type: "Plumbing".to_string(),
///     service_task: "Sink Declogging".to_string(),
///     input_quantity: 4,
///     preferred_time: "21:00".to_string(),
///     workers_requested: 5,
/// };
///
/// let result = compute_quote(&context, loader.catalog()).unwrap();
/// assert_eq!(result.total, Decimal::from(9600));
/// ```
pub fn compute_quote(
    context: &PricingContext,
    catalog: &ServiceCatalog,
) -> EngineResult<PricingResult> {
    let no_rate = || EngineError::NoRateAvailable {
        service_type: context.service_type.clone(),
        service_task: context.service_task.clone(),
    };

    let raw = catalog
        .lookup(&context.service_type, &context.service_task)
        .ok_or_else(no_rate)?;
    let rate = parse_rate(raw, &context.service_type).ok_or_else(no_rate)?;

    let unit = rate.unit();
    let input_quantity = clamp_quantity(context.input_quantity);
    let (billable, minimum_applied) =
        billable_quantity(&context.service_type, unit, input_quantity);

    let subtotal = rate.amount() * Decimal::from(billable);

    let night_applies = night_fee_applies(&context.preferred_time);
    let night_fee = if night_applies { NIGHT_FEE } else { Decimal::ZERO };

    let workers_allowed = worker_ceiling(&context.service_type, unit, input_quantity);
    let workers_requested = if workers_allowed <= 1 {
        1
    } else {
        context.workers_requested.clamp(1, workers_allowed)
    };

    let extra_worker_count = workers_requested.saturating_sub(1);
    let extra_workers_fee = EXTRA_WORKER_FEE * Decimal::from(extra_worker_count);

    let total = subtotal + night_fee + extra_workers_fee;

    Ok(PricingResult {
        quantity_unit: unit,
        billable_quantity: billable,
        base_rate_amount: rate.amount(),
        rate_label: format_rate_label(raw, &rate, &context.service_type),
        subtotal,
        minimum_applied,
        night_fee_applies: night_applies,
        night_fee,
        workers_allowed,
        workers_requested,
        extra_worker_count,
        extra_workers_fee,
        total,
    })
}
