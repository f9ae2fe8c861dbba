//! SubmitResponsesHandler - Command handler for storing a respondent's answers.

use std::sync::Arc;

use crate::domain::foundation::{DiagnosisStatus, QuestionId, RespondentRole, SessionId};
use crate::domain::session::DiagnosisError;
use crate::domain::survey::ResponseSet;
use crate::ports::DiagnosisSessionRepository;

use super::SurveyContext;

/// Command to submit one respondent's answers.
#[derive(Debug, Clone)]
pub struct SubmitResponsesCommand {
    pub session_id: SessionId,
    pub role: RespondentRole,
    pub responses: ResponseSet,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitResponsesResult {
    pub status: DiagnosisStatus,
    /// Catalog questions left blank; they score as neutral.
    pub unanswered: Vec<QuestionId>,
    /// Answered ids the catalog does not know; they are ignored.
    pub unknown_ids: Vec<String>,
}

/// Handler for answer submission.
pub struct SubmitResponsesHandler {
    repository: Arc<dyn DiagnosisSessionRepository>,
    survey: SurveyContext,
}

impl SubmitResponsesHandler {
    pub fn new(repository: Arc<dyn DiagnosisSessionRepository>, survey: SurveyContext) -> Self {
        Self { repository, survey }
    }

    pub async fn handle(
        &self,
        cmd: SubmitResponsesCommand,
    ) -> Result<SubmitResponsesResult, DiagnosisError> {
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| DiagnosisError::not_found(cmd.session_id))?;

        let catalog = &self.survey.catalog;
        let unanswered: Vec<QuestionId> =
            cmd.responses.unanswered(catalog).into_iter().cloned().collect();
        let unknown_ids: Vec<String> = cmd
            .responses
            .unknown_ids(catalog)
            .into_iter()
            .map(str::to_string)
            .collect();

        if !unanswered.is_empty() {
            tracing::warn!(
                session_id = %cmd.session_id,
                role = %cmd.role,
                count = unanswered.len(),
                "Unanswered questions will score as neutral"
            );
        }
        if !unknown_ids.is_empty() {
            tracing::warn!(
                session_id = %cmd.session_id,
                role = %cmd.role,
                ids = ?unknown_ids,
                "Ignoring answers to unknown questions"
            );
        }

        let read_at = session.version();
        let status = session.submit(cmd.role, cmd.responses)?;
        self.repository.update(&session, read_at).await?;

        tracing::info!(
            session_id = %cmd.session_id,
            role = %cmd.role,
            status = %status,
            "Responses submitted"
        );

        Ok(SubmitResponsesResult {
            status,
            unanswered,
            unknown_ids,
        })
    }
}
