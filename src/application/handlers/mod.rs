//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod diagnosis;

pub use diagnosis::{
    CreateDiagnosisCommand, CreateDiagnosisHandler, CreateDiagnosisResult,
    DeleteDiagnosisCommand, DeleteDiagnosisHandler,
    EvaluateResponsesHandler, EvaluateResponsesQuery, GetDiagnosisHandler, GetDiagnosisQuery,
    GetDiagnosisReportHandler, GetDiagnosisReportQuery, ResetDiagnosisCommand,
    ResetDiagnosisHandler, SubmitResponsesCommand, SubmitResponsesHandler,
    SubmitResponsesResult, SurveyContext,
};
