//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the service
//! catalog from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::SERVICE_CATEGORIES;

use super::types::{CatalogConfig, ServiceCatalog};

/// Loads and provides access to the service catalog.
///
/// # File structure
///
/// ```text
/// config/
/// └── catalog.yaml   # services: {category: {task: rate}}
/// ```
///
/// # Example
///
/// ```no_run
/// use pricing_engine::config::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/catalog.yaml").unwrap();
/// let rate = loader.catalog().lookup("Plumbing", "Sink Declogging");
/// assert!(rate.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: ServiceCatalog,
}

impl CatalogLoader {
    /// Loads the catalog from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` on success, or an error if:
    /// - The file is missing (`CatalogNotFound`)
    /// - The file contains invalid YAML (`CatalogParseError`)
    /// - Any of the five platform categories is absent (`ServiceTypeNotFound`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        let config: CatalogConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        let catalog: ServiceCatalog = config.into();

        for category in SERVICE_CATEGORIES {
            if catalog.tasks(category).is_none() {
                return Err(EngineError::ServiceTypeNotFound {
                    service_type: category.to_string(),
                });
            }
        }

        Ok(Self { catalog })
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_yaml(content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("catalog_test_{}.yaml", uuid::Uuid::new_v4()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file_returns_catalog_not_found() {
        let result = CatalogLoader::load("/definitely/missing/catalog.yaml");
        match result.unwrap_err() {
            EngineError::CatalogNotFound { path } => {
                assert!(path.contains("catalog.yaml"));
            }
            other => panic!("Expected CatalogNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let path = write_temp_yaml("services: [not, a, map");
        let result = CatalogLoader::load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(
            result.unwrap_err(),
            EngineError::CatalogParseError { .. }
        ));
    }

    #[test]
    fn test_load_rejects_catalog_missing_a_category() {
        let path = write_temp_yaml(
            r#"
services:
  Plumbing:
    Sink Declogging: 2200
"#,
        );
        let result = CatalogLoader::load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(
            result.unwrap_err(),
            EngineError::ServiceTypeNotFound { .. }
        ));
    }

    #[test]
    fn test_load_shipped_catalog() {
        let loader = CatalogLoader::load("./config/catalog.yaml").unwrap();
        let catalog = loader.catalog();
        assert!(catalog.lookup("Plumbing", "Sink Declogging").is_some());
        assert!(catalog.lookup("Laundry", "Regular Clothes").is_some());
        for category in SERVICE_CATEGORIES {
            let count = catalog.tasks(category).unwrap().count();
            assert!(
                (10..=15).contains(&count),
                "{} has {} tasks, expected 10-15",
                category,
                count
            );
        }
    }
}
