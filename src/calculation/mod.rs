//! Calculation logic for the Service-Request Pricing Engine.
//!
//! This module contains the pricing rules: rate normalization and display
//! labeling, quantity clamping and minimum billing, the night-time surcharge
//! window, the worker allowance policy, and the quote computation that ties
//! them together.

mod engine;
mod night_window;
mod quantity;
mod rate_parser;
mod worker_allowance;

pub use engine::{EXTRA_WORKER_FEE, compute_quote};
pub use night_window::{NIGHT_FEE, night_fee_applies};
pub use quantity::{
    LAUNDRY_KG_MINIMUM, QUANTITY_MAX, QUANTITY_MIN, billable_quantity, clamp_quantity,
};
pub use rate_parser::{format_rate_label, parse_rate};
pub use worker_allowance::{
    WORKER_CAP, allow_extra_workers, extra_worker_threshold, max_workers, worker_ceiling,
};
