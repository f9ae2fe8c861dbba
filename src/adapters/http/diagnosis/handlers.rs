//! HTTP handlers for diagnosis endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::application::handlers::{
    CreateDiagnosisCommand, CreateDiagnosisHandler, DeleteDiagnosisCommand,
    DeleteDiagnosisHandler, EvaluateResponsesHandler,
    EvaluateResponsesQuery, GetDiagnosisHandler, GetDiagnosisQuery, GetDiagnosisReportHandler,
    GetDiagnosisReportQuery, ResetDiagnosisCommand, ResetDiagnosisHandler,
    SubmitResponsesCommand, SubmitResponsesHandler, SurveyContext,
};
use crate::domain::foundation::{RespondentRole, SessionId};
use crate::domain::session::DiagnosisError;
use crate::domain::survey::ResponseSet;
use crate::ports::DiagnosisSessionRepository;

use super::dto::{
    CatalogResponse, CreateDiagnosisRequest, DiagnosisCreatedResponse, DiagnosisStatusResponse,
    ErrorResponse, EvaluateRequest, HealthResponse, ResetResponse, SubmitResponsesRequest,
    SubmitResponsesResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for diagnosis routes.
#[derive(Clone)]
pub struct DiagnosisAppState {
    pub repository: Arc<dyn DiagnosisSessionRepository>,
    pub survey: SurveyContext,
    /// Where the active catalog was loaded from (e.g. `builtin:standard`).
    pub catalog_source: Arc<str>,
}

impl DiagnosisAppState {
    pub fn new(
        repository: Arc<dyn DiagnosisSessionRepository>,
        survey: SurveyContext,
        catalog_source: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            repository,
            survey,
            catalog_source: catalog_source.into(),
        }
    }

    pub fn create_diagnosis_handler(&self) -> CreateDiagnosisHandler {
        CreateDiagnosisHandler::new(self.repository.clone())
    }

    pub fn submit_responses_handler(&self) -> SubmitResponsesHandler {
        SubmitResponsesHandler::new(self.repository.clone(), self.survey.clone())
    }

    pub fn reset_diagnosis_handler(&self) -> ResetDiagnosisHandler {
        ResetDiagnosisHandler::new(self.repository.clone())
    }

    pub fn delete_diagnosis_handler(&self) -> DeleteDiagnosisHandler {
        DeleteDiagnosisHandler::new(self.repository.clone())
    }

    pub fn get_diagnosis_handler(&self) -> GetDiagnosisHandler {
        GetDiagnosisHandler::new(self.repository.clone())
    }

    pub fn get_report_handler(&self) -> GetDiagnosisReportHandler {
        GetDiagnosisReportHandler::new(self.repository.clone(), self.survey.clone())
    }

    pub fn evaluate_handler(&self) -> EvaluateResponsesHandler {
        EvaluateResponsesHandler::new(self.survey.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::ok()))
}

/// GET /api/catalog - Active question catalog
pub async fn get_catalog(State(state): State<DiagnosisAppState>) -> impl IntoResponse {
    let response = CatalogResponse {
        source: &state.catalog_source,
        catalog: &state.survey.catalog,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/evaluate - Score one answer set without creating a session
pub async fn evaluate(
    State(state): State<DiagnosisAppState>,
    Json(req): Json<EvaluateRequest>,
) -> impl IntoResponse {
    if let Err(response) = check_scale(&req.responses) {
        return response;
    }

    let report = state.evaluate_handler().handle(EvaluateResponsesQuery {
        profile: req.profile(),
        responses: req.responses,
    });
    (StatusCode::OK, Json(report)).into_response()
}

/// POST /api/diagnoses - Start a diagnosis
pub async fn create_diagnosis(
    State(state): State<DiagnosisAppState>,
    Json(req): Json<CreateDiagnosisRequest>,
) -> impl IntoResponse {
    let cmd = CreateDiagnosisCommand {
        mode: req.mode,
        profile: req.profile(),
    };

    match state.create_diagnosis_handler().handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(DiagnosisCreatedResponse::from(&result.session)),
        )
            .into_response(),
        Err(e) => handle_diagnosis_error(e),
    }
}

/// GET /api/diagnoses/:id - Session status
pub async fn get_diagnosis(
    State(state): State<DiagnosisAppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .get_diagnosis_handler()
        .handle(GetDiagnosisQuery { session_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(DiagnosisStatusResponse::from(&session))).into_response(),
        Err(e) => handle_diagnosis_error(e),
    }
}

/// DELETE /api/diagnoses/:id - Discard a session and its answers
pub async fn delete_diagnosis(
    State(state): State<DiagnosisAppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .delete_diagnosis_handler()
        .handle(DeleteDiagnosisCommand { session_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_diagnosis_error(e),
    }
}

/// PUT /api/diagnoses/:id/responses/:role - Submit one respondent's answers
pub async fn submit_responses(
    State(state): State<DiagnosisAppState>,
    Path((session_id, role)): Path<(String, String)>,
    Json(req): Json<SubmitResponsesRequest>,
) -> impl IntoResponse {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let role: RespondentRole = match role.parse() {
        Ok(role) => role,
        Err(err) => {
            tracing::warn!(session_id = %session_id, role = %role, "Unknown respondent role");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&err))).into_response();
        }
    };
    if let Err(response) = check_scale(&req.responses) {
        return response;
    }

    let cmd = SubmitResponsesCommand {
        session_id,
        role,
        responses: req.responses,
    };

    match state.submit_responses_handler().handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(SubmitResponsesResponse::new(session_id, result)),
        )
            .into_response(),
        Err(e) => handle_diagnosis_error(e),
    }
}

/// POST /api/diagnoses/:id/reset - Clear a dual diagnosis
pub async fn reset_diagnosis(
    State(state): State<DiagnosisAppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .reset_diagnosis_handler()
        .handle(ResetDiagnosisCommand { session_id })
        .await
    {
        Ok(status) => (
            StatusCode::OK,
            Json(ResetResponse {
                session_id: session_id.to_string(),
                status,
            }),
        )
            .into_response(),
        Err(e) => handle_diagnosis_error(e),
    }
}

/// GET /api/diagnoses/:id/report - Single or dual report
pub async fn get_report(
    State(state): State<DiagnosisAppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .get_report_handler()
        .handle(GetDiagnosisReportQuery { session_id })
        .await
    {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => handle_diagnosis_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, axum::response::Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

/// Rejects scores outside the 1..=5 scale before they reach the domain.
fn check_scale(responses: &ResponseSet) -> Result<(), axum::response::Response> {
    responses.validate_scale().map_err(|err| {
        tracing::warn!(field = err.field(), error = %err, "Rejected out-of-scale answer");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&err))).into_response()
    })
}

fn handle_diagnosis_error(error: DiagnosisError) -> axum::response::Response {
    match error {
        DiagnosisError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Diagnosis", &id.to_string())),
        )
            .into_response(),
        DiagnosisError::ValidationFailed { field, message } => {
            tracing::warn!(field = %field, message = %message, "Diagnosis request rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    code: "VALIDATION_FAILED".to_string(),
                    message,
                    details: Some(serde_json::json!({ "field": field })),
                }),
            )
                .into_response()
        }
        DiagnosisError::InvalidState(msg) => {
            (StatusCode::CONFLICT, Json(ErrorResponse::conflict(msg))).into_response()
        }
        DiagnosisError::Conflict(msg) => {
            tracing::warn!(message = %msg, "Concurrent diagnosis update rejected");
            (StatusCode::CONFLICT, Json(ErrorResponse::conflict(msg))).into_response()
        }
        DiagnosisError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Diagnosis infrastructure error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An internal error occurred")),
            )
                .into_response()
        }
    }
}
