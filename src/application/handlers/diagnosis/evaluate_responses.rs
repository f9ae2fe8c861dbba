//! EvaluateResponsesHandler - Stateless single evaluation.

use crate::domain::foundation::{DiagnosisCode, Timestamp};
use crate::domain::report::{ReportHeader, SingleReport};
use crate::domain::survey::{BusinessProfile, ResponseSet};

use super::SurveyContext;

/// Query to score one answer set without creating a session.
#[derive(Debug, Clone, Default)]
pub struct EvaluateResponsesQuery {
    pub responses: ResponseSet,
    pub profile: BusinessProfile,
}

/// Handler for stateless evaluation.
pub struct EvaluateResponsesHandler {
    survey: SurveyContext,
}

impl EvaluateResponsesHandler {
    pub fn new(survey: SurveyContext) -> Self {
        Self { survey }
    }

    pub fn handle(&self, query: EvaluateResponsesQuery) -> SingleReport {
        let now = Timestamp::now();
        let header = ReportHeader::new(DiagnosisCode::from_timestamp(&now), query.profile, &now);
        let report = SingleReport::build(
            header,
            &query.responses,
            &self.survey.catalog,
            self.survey.quadrant_threshold,
        );

        tracing::debug!(
            soft_index = report.scores.soft_index,
            hard_index = report.scores.hard_index,
            quadrant = %report.assessment.quadrant,
            "Stateless evaluation"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::diagnosis::test_support::standard_context;
    use crate::domain::scoring::Quadrant;
    use crate::domain::survey::BuiltinCatalog;

    #[test]
    fn evaluates_without_session() {
        let handler = EvaluateResponsesHandler::new(standard_context());
        let responses = ResponseSet::new()
            .with("soft_1", 5)
            .with("soft_2", 5)
            .with("soft_3", 5)
            .with("soft_4", 5)
            .with("soft_5", 5)
            .with("hard_1", 1)
            .with("hard_2", 1)
            .with("hard_3", 1)
            .with("hard_4", 1)
            .with("hard_5", 1);

        let report = handler.handle(EvaluateResponsesQuery {
            responses,
            profile: BusinessProfile::default(),
        });

        assert_eq!(report.scores.soft_index, 100.0);
        assert_eq!(report.scores.hard_index, 20.0);
        assert_eq!(report.quadrant(), Quadrant::ChronicallyUnderfunded);
        assert!(report.header.diagnosis_code.as_str().starts_with("DIAG-"));
    }

    #[test]
    fn configured_threshold_is_applied() {
        let catalog = BuiltinCatalog::Standard.load().unwrap();
        let handler = EvaluateResponsesHandler::new(SurveyContext::new(catalog, 61.0));
        let report = handler.handle(EvaluateResponsesQuery::default());
        assert_eq!(report.quadrant(), Quadrant::NearCollapse);
    }
}
