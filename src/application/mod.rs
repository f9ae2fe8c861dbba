//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, submit, reset) change session state; query
//! handlers (get, report, evaluate) only read it.

pub mod handlers;

pub use handlers::{
    CreateDiagnosisCommand, CreateDiagnosisHandler, CreateDiagnosisResult,
    DeleteDiagnosisCommand, DeleteDiagnosisHandler,
    EvaluateResponsesHandler, EvaluateResponsesQuery, GetDiagnosisHandler, GetDiagnosisQuery,
    GetDiagnosisReportHandler, GetDiagnosisReportQuery, ResetDiagnosisCommand,
    ResetDiagnosisHandler, SubmitResponsesCommand, SubmitResponsesHandler,
    SubmitResponsesResult, SurveyContext,
};
