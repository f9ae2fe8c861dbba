//! Diagnosis command and query handlers.

mod create_diagnosis;
mod delete_diagnosis;
mod evaluate_responses;
mod get_diagnosis;
mod get_diagnosis_report;
mod reset_diagnosis;
mod submit_responses;

pub use create_diagnosis::{CreateDiagnosisCommand, CreateDiagnosisHandler, CreateDiagnosisResult};
pub use delete_diagnosis::{DeleteDiagnosisCommand, DeleteDiagnosisHandler};
pub use evaluate_responses::{EvaluateResponsesHandler, EvaluateResponsesQuery};
pub use get_diagnosis::{GetDiagnosisHandler, GetDiagnosisQuery};
pub use get_diagnosis_report::{GetDiagnosisReportHandler, GetDiagnosisReportQuery};
pub use reset_diagnosis::{ResetDiagnosisCommand, ResetDiagnosisHandler};
pub use submit_responses::{SubmitResponsesCommand, SubmitResponsesHandler, SubmitResponsesResult};

use std::sync::Arc;

use crate::domain::scoring::DEFAULT_QUADRANT_THRESHOLD;
use crate::domain::survey::QuestionCatalog;

/// Catalog and classification threshold shared by the scoring handlers.
#[derive(Debug, Clone)]
pub struct SurveyContext {
    pub catalog: Arc<QuestionCatalog>,
    pub quadrant_threshold: f64,
}

impl SurveyContext {
    pub fn new(catalog: QuestionCatalog, quadrant_threshold: f64) -> Self {
        Self {
            catalog: Arc::new(catalog),
            quadrant_threshold,
        }
    }

    /// Context with the default threshold of 60.
    pub fn with_default_threshold(catalog: QuestionCatalog) -> Self {
        Self::new(catalog, DEFAULT_QUADRANT_THRESHOLD)
    }
}
