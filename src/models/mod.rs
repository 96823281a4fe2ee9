//! Domain models for the Service-Request Pricing Engine.
//!
//! This module contains the core data types used throughout the engine.

mod category;
mod context;
mod rate;
mod result;

pub use category::{
    CAR_WASHING, CARPENTRY, ELECTRICAL_WORKS, LAUNDRY, PLUMBING, SERVICE_CATEGORIES,
};
pub use context::PricingContext;
pub use rate::{QuantityUnit, RateDescriptor, RawRate};
pub use result::PricingResult;
