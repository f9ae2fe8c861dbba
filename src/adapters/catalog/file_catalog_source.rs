//! File-based Catalog Source
//!
//! Reads a question catalog from a YAML or JSON file chosen by extension.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::survey::QuestionCatalog;
use crate::ports::{CatalogLoadError, CatalogSource};

/// Catalog document format, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            "json" => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

/// Catalog stored on disk
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    /// Create a source for the given file
    ///
    /// # Example
    /// ```ignore
    /// let source = FileCatalogSource::new("./catalogs/custom.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<QuestionCatalog, CatalogLoadError> {
        let display = self.path.display().to_string();
        let format = CatalogFormat::from_path(&self.path)
            .ok_or_else(|| CatalogLoadError::UnsupportedFormat(display.clone()))?;

        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogLoadError::Io {
                path: display.clone(),
                message: e.to_string(),
            })?;

        let parsed = match format {
            CatalogFormat::Yaml => QuestionCatalog::from_yaml_str(&text),
            CatalogFormat::Json => QuestionCatalog::from_json_str(&text),
        };
        parsed.map_err(|source| CatalogLoadError::Parse {
            path: display,
            source,
        })
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
