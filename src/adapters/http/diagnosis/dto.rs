//! HTTP DTOs for diagnosis endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::SubmitResponsesResult;
use crate::domain::foundation::{
    DiagnosisMode, DiagnosisStatus, ErrorCode, RespondentRole, SessionId, ValidationError,
};
use crate::domain::session::DiagnosisSession;
use crate::domain::survey::{
    BusinessProfile, BusinessType, FacilityScale, QuestionCatalog, ResponseSet,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a diagnosis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDiagnosisRequest {
    #[serde(default)]
    pub mode: DiagnosisMode,
    #[serde(default)]
    pub business_type: BusinessType,
    #[serde(default)]
    pub scale: FacilityScale,
}

impl CreateDiagnosisRequest {
    pub fn profile(&self) -> BusinessProfile {
        BusinessProfile::new(self.business_type, self.scale)
    }
}

/// Request carrying one respondent's answers.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponsesRequest {
    pub responses: ResponseSet,
}

/// Request for a stateless evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    pub responses: ResponseSet,
    #[serde(default)]
    pub business_type: BusinessType,
    #[serde(default)]
    pub scale: FacilityScale,
}

impl EvaluateRequest {
    pub fn profile(&self) -> BusinessProfile {
        BusinessProfile::new(self.business_type, self.scale)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a newly created diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisCreatedResponse {
    pub session_id: String,
    pub code: String,
    pub mode: DiagnosisMode,
    pub status: DiagnosisStatus,
}

impl From<&DiagnosisSession> for DiagnosisCreatedResponse {
    fn from(session: &DiagnosisSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            code: session.code().to_string(),
            mode: session.mode(),
            status: session.status(),
        }
    }
}

/// Session status view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisStatusResponse {
    pub session_id: String,
    pub code: String,
    pub mode: DiagnosisMode,
    pub status: DiagnosisStatus,
    pub business_type: BusinessType,
    pub scale: FacilityScale,
    pub expected_roles: Vec<RespondentRole>,
    pub submitted_roles: Vec<RespondentRole>,
    pub report_ready: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&DiagnosisSession> for DiagnosisStatusResponse {
    fn from(session: &DiagnosisSession) -> Self {
        let submitted_roles = session
            .mode()
            .roles()
            .iter()
            .copied()
            .filter(|role| session.responses(*role).is_some())
            .collect();
        Self {
            session_id: session.id().to_string(),
            code: session.code().to_string(),
            mode: session.mode(),
            status: session.status(),
            business_type: session.profile().business_type,
            scale: session.profile().scale,
            expected_roles: session.expected_roles(),
            submitted_roles,
            report_ready: session.status().is_report_ready(),
            created_at: session.created_at().as_datetime().to_rfc3339(),
            updated_at: session.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Response for an accepted answer submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponsesResponse {
    pub session_id: String,
    pub status: DiagnosisStatus,
    pub report_ready: bool,
    /// Questions left blank; scored as 3.
    pub unanswered: Vec<String>,
    /// Ids that are not part of the catalog; ignored.
    pub unknown_ids: Vec<String>,
}

impl SubmitResponsesResponse {
    pub fn new(session_id: SessionId, result: SubmitResponsesResult) -> Self {
        Self {
            session_id: session_id.to_string(),
            status: result.status,
            report_ready: result.status.is_report_ready(),
            unanswered: result.unanswered.into_iter().map(String::from).collect(),
            unknown_ids: result.unknown_ids,
        }
    }
}

/// Response for a reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub session_id: String,
    pub status: DiagnosisStatus,
}

/// Active catalog and where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse<'a> {
    pub source: &'a str,
    #[serde(flatten)]
    pub catalog: &'a QuestionCatalog,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Rejected input naming the offending field.
    pub fn validation(err: &ValidationError) -> Self {
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: err.to_string(),
            details: Some(serde_json::json!({ "field": err.field() })),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
