//! GetDiagnosisHandler - Query handler for session status.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{DiagnosisError, DiagnosisSession};
use crate::ports::DiagnosisSessionRepository;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetDiagnosisQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving a diagnosis session.
pub struct GetDiagnosisHandler {
    repository: Arc<dyn DiagnosisSessionRepository>,
}

impl GetDiagnosisHandler {
    pub fn new(repository: Arc<dyn DiagnosisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDiagnosisQuery) -> Result<DiagnosisSession, DiagnosisError> {
        self.repository
            .find_by_id(&query.session_id)
            .await?
            .ok_or_else(|| DiagnosisError::not_found(query.session_id))
    }
}
