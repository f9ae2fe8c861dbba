//! Catalog Adapters
//!
//! Implementations of the CatalogSource port.
//!
//! - **BuiltinCatalogSource** - one of the catalogs compiled into the binary
//! - **FileCatalogSource** - a YAML or JSON file on disk

mod file_catalog_source;

pub use file_catalog_source::FileCatalogSource;

use async_trait::async_trait;

use crate::domain::survey::{BuiltinCatalog, QuestionCatalog};
use crate::ports::{CatalogLoadError, CatalogSource};

/// Catalog embedded in the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource(pub BuiltinCatalog);

#[async_trait]
impl CatalogSource for BuiltinCatalogSource {
    async fn load(&self) -> Result<QuestionCatalog, CatalogLoadError> {
        Ok(self.0.load()?)
    }

    fn describe(&self) -> String {
        format!("builtin:{}", self.0)
    }
}
