//! Catalog source port.
//!
//! Supplies the question catalog a deployment scores against: one of the
//! embedded catalogs or a file provided by the operator.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::survey::{CatalogError, QuestionCatalog};

/// Errors raised while loading a catalog from outside the binary.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Unsupported catalog file format: '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("Catalog file '{path}' is invalid: {source}")]
    Parse {
        path: String,
        #[source]
        source: CatalogError,
    },

    #[error(transparent)]
    Builtin(#[from] CatalogError),
}

/// Port for obtaining the active question catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and validate the catalog.
    ///
    /// # Errors
    ///
    /// - `Io` if the backing file cannot be read
    /// - `UnsupportedFormat` for unknown file extensions
    /// - `Parse` if the content is malformed or fails validation
    async fn load(&self) -> Result<QuestionCatalog, CatalogLoadError>;

    /// Human-readable description of where the catalog comes from.
    fn describe(&self) -> String;
}
