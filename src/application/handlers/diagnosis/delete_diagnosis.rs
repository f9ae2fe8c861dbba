//! DeleteDiagnosisHandler - Command handler for discarding a finished or abandoned diagnosis.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::DiagnosisError;
use crate::ports::DiagnosisSessionRepository;

/// Command to remove a session and its answers.
#[derive(Debug, Clone)]
pub struct DeleteDiagnosisCommand {
    pub session_id: SessionId,
}

/// Handler for deleting sessions.
pub struct DeleteDiagnosisHandler {
    repository: Arc<dyn DiagnosisSessionRepository>,
}

impl DeleteDiagnosisHandler {
    pub fn new(repository: Arc<dyn DiagnosisSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteDiagnosisCommand) -> Result<(), DiagnosisError> {
        self.repository.delete(&cmd.session_id).await?;

        tracing::info!(session_id = %cmd.session_id, "Diagnosis deleted");
        Ok(())
    }
}
