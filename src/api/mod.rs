//! HTTP API for the Service-Request Pricing Engine.
//!
//! This module provides the axum router, request/response types, and shared
//! application state for the quote endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::QuoteRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
