//! Adapters - Implementations of port interfaces.
//!
//! - `catalog` - Builtin and file-backed question catalogs
//! - `http` - Axum REST API
//! - `storage` - Session repositories

pub mod catalog;
pub mod http;
pub mod storage;

pub use catalog::{BuiltinCatalogSource, FileCatalogSource};
pub use storage::InMemorySessionRepository;
