//! Request types for the pricing engine API.
//!
//! This module defines the JSON request structure for the `/quote` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::PricingContext;

/// Request body for the `/quote` endpoint.
///
/// Mirrors the five pricing-context fields. Quantity, time, and worker count
/// default when omitted so a partially-filled wizard step can still be quoted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The selected service category.
    pub service_type: String,
    /// The selected task under the category.
    pub service_task: String,
    /// The user-entered quantity.
    #[serde(default = "default_quantity")]
    pub input_quantity: u32,
    /// The preferred service time as "HH:MM", or empty.
    #[serde(default)]
    pub preferred_time: String,
    /// The number of workers the client asked for.
    #[serde(default = "default_workers")]
    pub workers_requested: u32,
}

fn default_quantity() -> u32 {
    1
}

fn default_workers() -> u32 {
    1
}

impl From<QuoteRequest> for PricingContext {
    fn from(req: QuoteRequest) -> Self {
        PricingContext {
            service_type: req.service_type,
            service_task: req.service_task,
            input_quantity: req.input_quantity,
            preferred_time: req.preferred_time,
            workers_requested: req.workers_requested,
        }
    }
}
