//! CreateDiagnosisHandler - Command handler for starting a diagnosis.

use std::sync::Arc;

use crate::domain::foundation::{DiagnosisMode, SessionId};
use crate::domain::session::{DiagnosisError, DiagnosisSession};
use crate::domain::survey::BusinessProfile;
use crate::ports::DiagnosisSessionRepository;

/// Command to create a new diagnosis session.
#[derive(Debug, Clone)]
pub struct CreateDiagnosisCommand {
    pub mode: DiagnosisMode,
    pub profile: BusinessProfile,
}

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateDiagnosisResult {
    pub session: DiagnosisSession,
}

/// Handler for creating diagnosis sessions.
pub struct CreateDiagnosisHandler {
    repository: Arc<dyn DiagnosisSessionRepository>,
}

impl CreateDiagnosisHandler {
    pub fn new(repository: Arc<dyn DiagnosisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateDiagnosisCommand,
    ) -> Result<CreateDiagnosisResult, DiagnosisError> {
        let session = DiagnosisSession::new(SessionId::new(), cmd.mode, cmd.profile);

        self.repository.save(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            code = %session.code(),
            mode = %session.mode(),
            business_type = ?session.profile().business_type,
            "Diagnosis session created"
        );

        Ok(CreateDiagnosisResult { session })
    }
}
