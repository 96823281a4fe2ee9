//! Service-Request Pricing Engine
//!
//! This crate provides the pricing core of a home-services marketplace:
//! given a service category/task, a quantity, a preferred time, and a
//! requested worker count, it derives a billed total, enforcing category
//! minimums, per-category worker-count ceilings, and a night-time surcharge.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod draft;
pub mod error;
pub mod models;
