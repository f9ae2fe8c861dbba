//! GetDiagnosisReportHandler - Query handler for single and dual reports.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::report::DiagnosisReport;
use crate::domain::session::DiagnosisError;
use crate::ports::DiagnosisSessionRepository;

use super::SurveyContext;

/// Query for the report of a finished diagnosis.
#[derive(Debug, Clone)]
pub struct GetDiagnosisReportQuery {
    pub session_id: SessionId,
}

/// Handler for building diagnosis reports.
pub struct GetDiagnosisReportHandler {
    repository: Arc<dyn DiagnosisSessionRepository>,
    survey: SurveyContext,
}

impl GetDiagnosisReportHandler {
    pub fn new(repository: Arc<dyn DiagnosisSessionRepository>, survey: SurveyContext) -> Self {
        Self { repository, survey }
    }

    pub async fn handle(
        &self,
        query: GetDiagnosisReportQuery,
    ) -> Result<DiagnosisReport, DiagnosisError> {
        let session = self
            .repository
            .find_by_id(&query.session_id)
            .await?
            .ok_or_else(|| DiagnosisError::not_found(query.session_id))?;

        let report = session.report(&self.survey.catalog, self.survey.quadrant_threshold)?;

        match &report {
            DiagnosisReport::Single(r) => tracing::debug!(
                session_id = %query.session_id,
                soft_index = r.scores.soft_index,
                hard_index = r.scores.hard_index,
                quadrant = %r.assessment.quadrant,
                "Single report built"
            ),
            DiagnosisReport::Dual(r) => tracing::debug!(
                session_id = %query.session_id,
                executive_quadrant = %r.executive.assessment.quadrant,
                manager_quadrant = %r.manager.assessment.quadrant,
                mean_absolute_gap = r.mean_absolute_gap,
                gap_level = %r.gap_level,
                "Dual report built"
            ),
        }

        Ok(report)
    }
}
