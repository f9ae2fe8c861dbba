//! ResetDiagnosisHandler - Command handler for restarting a dual diagnosis.

use std::sync::Arc;

use crate::domain::foundation::{DiagnosisStatus, SessionId};
use crate::domain::session::DiagnosisError;
use crate::ports::DiagnosisSessionRepository;

/// Command to clear both answer sets of a dual diagnosis.
#[derive(Debug, Clone)]
pub struct ResetDiagnosisCommand {
    pub session_id: SessionId,
}

/// Handler for resetting sessions.
pub struct ResetDiagnosisHandler {
    repository: Arc<dyn DiagnosisSessionRepository>,
}

impl ResetDiagnosisHandler {
    pub fn new(repository: Arc<dyn DiagnosisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ResetDiagnosisCommand) -> Result<DiagnosisStatus, DiagnosisError> {
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| DiagnosisError::not_found(cmd.session_id))?;

        let read_at = session.version();
        let status = session.reset()?;
        self.repository.update(&session, read_at).await?;

        tracing::info!(session_id = %cmd.session_id, "Diagnosis reset");
        Ok(status)
    }
}
