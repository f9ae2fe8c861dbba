//! Survey configuration: which question catalog to serve and the quadrant threshold.

use serde::Deserialize;
use std::path::PathBuf;

use crate::adapters::catalog::{BuiltinCatalogSource, FileCatalogSource};
use crate::domain::scoring::DEFAULT_QUADRANT_THRESHOLD;
use crate::domain::survey::BuiltinCatalog;
use crate::ports::CatalogSource;

use super::error::ValidationError;

/// Survey configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyConfig {
    /// Built-in catalog used when no file is configured
    #[serde(default)]
    pub catalog: BuiltinCatalog,

    /// YAML or JSON catalog file; takes precedence over `catalog`
    pub catalog_path: Option<PathBuf>,

    /// Index value at or above which a dimension counts as high
    #[serde(default = "default_quadrant_threshold")]
    pub quadrant_threshold: f64,
}

impl SurveyConfig {
    /// Source the active catalog should be loaded from.
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog_path {
            Some(path) => Box::new(FileCatalogSource::new(path)),
            None => Box::new(BuiltinCatalogSource(self.catalog)),
        }
    }

    /// Validate survey configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=100.0).contains(&self.quadrant_threshold) {
            return Err(ValidationError::InvalidQuadrantThreshold(
                self.quadrant_threshold,
            ));
        }
        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::EmptyCatalogPath);
            }
        }
        Ok(())
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            catalog: BuiltinCatalog::default(),
            catalog_path: None,
            quadrant_threshold: default_quadrant_threshold(),
        }
    }
}

fn default_quadrant_threshold() -> f64 {
    DEFAULT_QUADRANT_THRESHOLD
}
