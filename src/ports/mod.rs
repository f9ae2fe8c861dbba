//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DiagnosisSessionRepository` - Session aggregate persistence
//! - `CatalogSource` - Supplies the active question catalog

mod catalog_source;
mod diagnosis_session_repository;

pub use catalog_source::{CatalogLoadError, CatalogSource};
pub use diagnosis_session_repository::DiagnosisSessionRepository;
