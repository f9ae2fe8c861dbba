//! Axum router configuration for diagnosis endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    create_diagnosis, delete_diagnosis, evaluate, get_catalog, get_diagnosis, get_report, health, reset_diagnosis,
    submit_responses, DiagnosisAppState,
};

/// Session routes, mounted at `/api/diagnoses`.
///
/// # Routes
/// - `POST /` - Start a single or dual diagnosis
/// - `GET /:id` - Session status
/// - `DELETE /:id` - Discard the session
/// - `PUT /:id/responses/:role` - Submit answers for `single`, `executive` or `manager`
/// - `POST /:id/reset` - Clear both answer sets of a dual diagnosis
/// - `GET /:id/report` - Single or dual report
pub fn diagnosis_routes() -> Router<DiagnosisAppState> {
    Router::new()
        .route("/", post(create_diagnosis))
        .route("/:id", get(get_diagnosis).delete(delete_diagnosis))
        .route("/:id/responses/:role", put(submit_responses))
        .route("/:id/reset", post(reset_diagnosis))
        .route("/:id/report", get(get_report))
}

/// The complete API with its state applied.
///
/// Adds `GET /health`, `GET /api/catalog` and `POST /api/evaluate` next to
/// the session routes.
pub fn diagnosis_router(state: DiagnosisAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/catalog", get(get_catalog))
        .route("/api/evaluate", post(evaluate))
        .nest("/api/diagnoses", diagnosis_routes())
        .with_state(state)
}
