//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the diagnosis domain.

mod diagnosis_mode;
mod diagnosis_status;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use diagnosis_mode::{DiagnosisMode, RespondentRole};
pub use diagnosis_status::DiagnosisStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DiagnosisCode, QuestionId, SessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
