//! DiagnosisStatus enum for tracking the answer workflow of a session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DiagnosisMode, StateMachine};

/// Workflow status of a diagnosis session.
///
/// Single mode: `AwaitingAnswers -> Submitted` (resubmission keeps `Submitted`).
/// Dual mode: `AwaitingExecutive -> AwaitingManager -> Complete`, with a reset
/// edge back to `AwaitingExecutive` from either later state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisStatus {
    AwaitingAnswers,
    Submitted,
    AwaitingExecutive,
    AwaitingManager,
    Complete,
}

impl DiagnosisStatus {
    /// Returns the initial status for a workflow mode.
    pub fn initial(mode: DiagnosisMode) -> Self {
        match mode {
            DiagnosisMode::Single => DiagnosisStatus::AwaitingAnswers,
            DiagnosisMode::Dual => DiagnosisStatus::AwaitingExecutive,
        }
    }

    /// Returns true once every required answer set has been submitted.
    pub fn is_report_ready(&self) -> bool {
        matches!(self, DiagnosisStatus::Submitted | DiagnosisStatus::Complete)
    }

    /// Returns the mode this status belongs to.
    pub fn mode(&self) -> DiagnosisMode {
        match self {
            DiagnosisStatus::AwaitingAnswers | DiagnosisStatus::Submitted => DiagnosisMode::Single,
            _ => DiagnosisMode::Dual,
        }
    }
}

impl StateMachine for DiagnosisStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DiagnosisStatus::*;
        matches!(
            (self, target),
            (AwaitingAnswers, Submitted)
                | (Submitted, Submitted)
                | (AwaitingExecutive, AwaitingManager)
                | (AwaitingManager, Complete)
                | (AwaitingManager, AwaitingExecutive)
                | (Complete, AwaitingExecutive)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DiagnosisStatus::*;
        match self {
            AwaitingAnswers => vec![Submitted],
            Submitted => vec![Submitted],
            AwaitingExecutive => vec![AwaitingManager],
            AwaitingManager => vec![Complete, AwaitingExecutive],
            Complete => vec![AwaitingExecutive],
        }
    }
}

impl fmt::Display for DiagnosisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagnosisStatus::AwaitingAnswers => "Awaiting answers",
            DiagnosisStatus::Submitted => "Submitted",
            DiagnosisStatus::AwaitingExecutive => "Awaiting executive",
            DiagnosisStatus::AwaitingManager => "Awaiting manager",
            DiagnosisStatus::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}
