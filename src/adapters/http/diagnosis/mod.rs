//! HTTP adapter for the diagnosis API.
//!
//! - `GET /health` - Liveness
//! - `GET /api/catalog` - Active question catalog
//! - `POST /api/evaluate` - Stateless single evaluation
//! - `POST /api/diagnoses` - Start a diagnosis
//! - `GET /api/diagnoses/:id` - Session status
//! - `DELETE /api/diagnoses/:id` - Discard a session
//! - `PUT /api/diagnoses/:id/responses/:role` - Submit answers
//! - `POST /api/diagnoses/:id/reset` - Reset a dual diagnosis
//! - `GET /api/diagnoses/:id/report` - Report

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::DiagnosisAppState;
pub use routes::{diagnosis_router, diagnosis_routes};
