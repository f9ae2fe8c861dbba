//! Diagnosis mode and respondent role enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Whether a session collects one answer set or two independent ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisMode {
    #[default]
    Single,
    Dual,
}

impl DiagnosisMode {
    /// Roles that answer in this mode, in answering order.
    pub fn roles(&self) -> &'static [RespondentRole] {
        match self {
            DiagnosisMode::Single => &[RespondentRole::Single],
            DiagnosisMode::Dual => &[RespondentRole::Executive, RespondentRole::Manager],
        }
    }
}

impl fmt::Display for DiagnosisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagnosisMode::Single => "single",
            DiagnosisMode::Dual => "dual",
        };
        write!(f, "{}", s)
    }
}

/// Who submitted an answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespondentRole {
    /// The only respondent of a single-mode session.
    Single,
    /// Owner, chair or representative director.
    Executive,
    /// Facility director or site manager.
    Manager,
}

impl RespondentRole {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RespondentRole::Single => "Respondent",
            RespondentRole::Executive => "Executive",
            RespondentRole::Manager => "Manager",
        }
    }
}

impl fmt::Display for RespondentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RespondentRole::Single => "single",
            RespondentRole::Executive => "executive",
            RespondentRole::Manager => "manager",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RespondentRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(RespondentRole::Single),
            "executive" => Ok(RespondentRole::Executive),
            "manager" => Ok(RespondentRole::Manager),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown respondent role '{}'", other),
            )),
        }
    }
}
