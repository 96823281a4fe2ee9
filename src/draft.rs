//! Draft Store serialization adapter.
//!
//! The booking wizard persists the user's selections and the computed quote
//! between steps. Downstream consumers of those drafts grew up expecting
//! different field names for the same semantic value, so the boundary writes
//! each value under every alias. The aliasing lives here, at the boundary;
//! the engine itself only ever sees the canonical [`PricingContext`] and
//! [`PricingResult`].

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::models::{PricingContext, PricingResult};

/// Serializes a pricing context into its draft record.
///
/// The worker count is mirrored under `workers_needed`, `workers_need`,
/// `manpower`, and `num_workers`; the quantity and time each carry one
/// legacy alias.
pub fn context_fields(context: &PricingContext) -> BTreeMap<String, Value> {
    let mut fields = BTreeMap::new();
    fields.insert("service_type".to_string(), json!(context.service_type));
    fields.insert("service_task".to_string(), json!(context.service_task));

    fields.insert("quantity".to_string(), json!(context.input_quantity));
    fields.insert("service_quantity".to_string(), json!(context.input_quantity));

    fields.insert("preferred_time".to_string(), json!(context.preferred_time));
    fields.insert("service_time".to_string(), json!(context.preferred_time));

    for alias in ["workers_needed", "workers_need", "manpower", "num_workers"] {
        fields.insert(alias.to_string(), json!(context.workers_requested));
    }

    fields
}

/// Serializes a pricing result into its draft record.
///
/// The billed total is mirrored under `total`, `total_price`, and
/// `computed_price`; the clamped worker count under the same four aliases as
/// the context record.
pub fn result_fields(result: &PricingResult) -> BTreeMap<String, Value> {
    let mut fields = BTreeMap::new();
    fields.insert("quantity_unit".to_string(), json!(result.quantity_unit));
    fields.insert("billable_quantity".to_string(), json!(result.billable_quantity));
    fields.insert("base_rate_amount".to_string(), json!(result.base_rate_amount));
    fields.insert("rate_label".to_string(), json!(result.rate_label));
    fields.insert("subtotal".to_string(), json!(result.subtotal));
    fields.insert("minimum_applied".to_string(), json!(result.minimum_applied));
    fields.insert("night_fee_applies".to_string(), json!(result.night_fee_applies));
    fields.insert("night_fee".to_string(), json!(result.night_fee));
    fields.insert("workers_allowed".to_string(), json!(result.workers_allowed));
    fields.insert("extra_worker_count".to_string(), json!(result.extra_worker_count));
    fields.insert("extra_workers_fee".to_string(), json!(result.extra_workers_fee));

    for alias in ["workers_needed", "workers_need", "manpower", "num_workers"] {
        fields.insert(alias.to_string(), json!(result.workers_requested));
    }

    for alias in ["total", "total_price", "computed_price"] {
        fields.insert(alias.to_string(), json!(result.total));
    }

    fields
}
