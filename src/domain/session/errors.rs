//! Diagnosis-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};

/// Errors returned by the diagnosis command and query handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisError {
    /// Session was not found.
    NotFound(SessionId),
    /// Operation is not allowed in the current workflow state.
    InvalidState(String),
    /// Another request changed the session first; the caller may retry.
    Conflict(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Storage or other infrastructure error.
    Infrastructure(String),
}

impl DiagnosisError {
    pub fn not_found(id: SessionId) -> Self {
        DiagnosisError::NotFound(id)
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        DiagnosisError::InvalidState(message.into())
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        DiagnosisError::Conflict(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DiagnosisError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        DiagnosisError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DiagnosisError::NotFound(_) => ErrorCode::SessionNotFound,
            DiagnosisError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            DiagnosisError::Conflict(_) => ErrorCode::ConcurrentModification,
            DiagnosisError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            DiagnosisError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DiagnosisError::NotFound(id) => format!("Diagnosis not found: {}", id),
            DiagnosisError::InvalidState(msg) => format!("Invalid state: {}", msg),
            DiagnosisError::Conflict(msg) => format!("Conflict: {}", msg),
            DiagnosisError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            DiagnosisError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DiagnosisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DiagnosisError {}

impl From<DomainError> for DiagnosisError {
    fn from(err: DomainError) -> Self {
        let field = err
            .details
            .get("field")
            .or_else(|| err.details.get("role"))
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());
        match err.code {
            ErrorCode::InvalidStateTransition | ErrorCode::WorkflowIncomplete => {
                DiagnosisError::InvalidState(err.message)
            }
            ErrorCode::ConcurrentModification => DiagnosisError::Conflict(err.message),
            ErrorCode::SessionNotFound => match err
                .details
                .get("session_id")
                .and_then(|id| id.parse::<SessionId>().ok())
            {
                Some(id) => DiagnosisError::NotFound(id),
                None => DiagnosisError::Infrastructure(err.to_string()),
            },
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::RoleMismatch => DiagnosisError::ValidationFailed {
                field,
                message: err.message,
            },
            _ => DiagnosisError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn workflow_errors_map_to_invalid_state() {
        let err: DiagnosisError =
            DomainError::new(ErrorCode::WorkflowIncomplete, "Awaiting manager").into();
        assert_eq!(err, DiagnosisError::invalid_state("Awaiting manager"));
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn role_mismatch_maps_to_validation_with_role_field() {
        let err: DiagnosisError = DomainError::new(ErrorCode::RoleMismatch, "wrong role")
            .with_detail("role", "single")
            .into();
        assert_eq!(err, DiagnosisError::validation("single", "wrong role"));
    }

    #[test]
    fn value_errors_keep_their_field() {
        let err: DiagnosisError =
            DomainError::from(ValidationError::out_of_range("soft_1", 1, 5, 9)).into();
        match err {
            DiagnosisError::ValidationFailed { field, .. } => assert_eq!(field, "soft_1"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn storage_errors_map_to_infrastructure() {
        let err: DiagnosisError = DomainError::new(ErrorCode::StorageError, "lock poisoned").into();
        assert!(matches!(err, DiagnosisError::Infrastructure(_)));
        assert_eq!(err.to_string(), "Error: [STORAGE_ERROR] lock poisoned");
    }

    #[test]
    fn concurrent_modification_maps_to_conflict() {
        let err: DiagnosisError =
            DomainError::new(ErrorCode::ConcurrentModification, "changed in flight").into();
        assert_eq!(err, DiagnosisError::conflict("changed in flight"));
        assert_eq!(err.code(), ErrorCode::ConcurrentModification);
    }

    #[test]
    fn missing_session_from_storage_maps_to_not_found() {
        let id = SessionId::new();
        let err: DiagnosisError = DomainError::new(ErrorCode::SessionNotFound, "gone")
            .with_detail("session_id", id.to_string())
            .into();
        assert_eq!(err, DiagnosisError::not_found(id));
    }

    #[test]
    fn not_found_message_names_session() {
        let id = SessionId::new();
        assert_eq!(
            DiagnosisError::not_found(id).to_string(),
            format!("Diagnosis not found: {}", id)
        );
    }
}
