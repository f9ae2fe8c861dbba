//! Survey module - question catalog, answers and business profile.
//!
//! # Components
//!
//! - `QuestionCatalog` - validated soft/hard question lists with category order
//! - `BuiltinCatalog` - embedded `standard` and `extended` catalogs
//! - `ResponseSet` - one respondent's raw 1-5 answers
//! - `BusinessProfile` - business type and facility scale shown on reports

mod catalog;
mod profile;
mod question;
mod response;

pub use catalog::{BuiltinCatalog, CatalogError, QuestionCatalog};
pub use profile::{BusinessProfile, BusinessType, FacilityScale};
pub use question::{Question, QuestionGroup};
pub use response::{ResponseSet, MAX_SCORE, MIN_SCORE, NEUTRAL_SCORE};
