//! Welfare Diagnosis - Management risk self-assessment for welfare-service operators
//!
//! Scores a Likert questionnaire into a soft (organizational) and a hard
//! (compliance and revenue) index, places the operator in one of four risk
//! quadrants, and compares executive and manager perceptions in dual mode.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
