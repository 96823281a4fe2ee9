//! Error types for the Service-Request Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the service catalog
//! or computing a quote.

use thiserror::Error;

/// The main error type for the Service-Request Pricing Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pricing_engine::error::EngineError;
///
/// let error = EngineError::CatalogNotFound {
///     path: "/missing/catalog.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Catalog file not found: /missing/catalog.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Service category was not found in the catalog.
    #[error("Service category not found: {service_type}")]
    ServiceTypeNotFound {
        /// The category that was not found.
        service_type: String,
    },

    /// No usable numeric rate exists for the given category/task pair.
    ///
    /// This is the only error that blocks a quote; quantity and time
    /// malformations are coerced to safe defaults instead.
    #[error("No rate available for '{service_task}' under '{service_type}'")]
    NoRateAvailable {
        /// The service category that was requested.
        service_type: String,
        /// The task within the category that has no usable rate.
        service_task: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
