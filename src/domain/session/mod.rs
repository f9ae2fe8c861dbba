//! Session domain module.
//!
//! Handles the diagnosis session lifecycle: creation in single or dual
//! mode, answer submission in workflow order, reset and report assembly.

mod aggregate;
mod errors;

pub use aggregate::DiagnosisSession;
pub use errors::DiagnosisError;
