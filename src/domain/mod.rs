//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `survey` - Question catalog, answer sets and business profile
//! - `scoring` - Pure Scorer and Classifier services
//! - `report` - Single and dual report assembly with chart series
//! - `session` - Diagnosis session aggregate and workflow

pub mod foundation;
pub mod report;
pub mod scoring;
pub mod session;
pub mod survey;
