//! Storage Adapters
//!
//! Implementations of the DiagnosisSessionRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionRepository** - Stores sessions in memory; a session
//!   lives as long as the server process
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemorySessionRepository;
//!
//! let repository = Arc::new(InMemorySessionRepository::new());
//! ```

mod in_memory_session_repository;

pub use in_memory_session_repository::InMemorySessionRepository;
