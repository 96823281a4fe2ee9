//! Service catalog configuration.
//!
//! This module provides the static rate catalog: strongly-typed structures
//! deserialized from a YAML catalog file, and the loader that reads them.

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{CatalogConfig, ServiceCatalog};
