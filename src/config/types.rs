//! Catalog types for the pricing engine.
//!
//! The catalog is a static, versionless table mapping a service category to
//! its tasks and their authored rates. Changing a price means replacing a
//! catalog entry, never engine logic.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::RawRate;

/// The catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Map of service category to its task/rate table.
    pub services: HashMap<String, HashMap<String, RawRate>>,
}

/// The static service catalog.
///
/// Pure data with a single lookup operation. An unknown category/task pair
/// returns `None` rather than an error; callers treat absence as "no rate
/// available" and must block progression.
///
/// # Example
///
/// ```
/// use pricing_engine::config::ServiceCatalog;
/// use pricing_engine::models::RawRate;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let mut tasks = HashMap::new();
/// tasks.insert("Sink Declogging".to_string(), RawRate::Amount(Decimal::from(2200)));
/// let mut services = HashMap::new();
/// services.insert("Plumbing".to_string(), tasks);
///
/// let catalog = ServiceCatalog::new(services);
/// assert!(catalog.lookup("Plumbing", "Sink Declogging").is_some());
/// assert!(catalog.lookup("Plumbing", "Roof Repair").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: HashMap<String, HashMap<String, RawRate>>,
}

impl ServiceCatalog {
    /// Creates a catalog from a category → task → rate table.
    pub fn new(services: HashMap<String, HashMap<String, RawRate>>) -> Self {
        Self { services }
    }

    /// Looks up the authored rate for a category/task pair.
    pub fn lookup(&self, service_type: &str, service_task: &str) -> Option<&RawRate> {
        self.services
            .get(service_type)
            .and_then(|tasks| tasks.get(service_task))
    }

    /// Returns the categories defined in this catalog.
    pub fn service_types(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    /// Returns the tasks defined under a category, if the category exists.
    pub fn tasks(&self, service_type: &str) -> Option<impl Iterator<Item = &str>> {
        self.services
            .get(service_type)
            .map(|tasks| tasks.keys().map(String::as_str))
    }
}

impl From<CatalogConfig> for ServiceCatalog {
    fn from(config: CatalogConfig) -> Self {
        Self::new(config.services)
    }
}
