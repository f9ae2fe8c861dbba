use serde::{Deserialize, Serialize};
use std::fmt;

/// Health label of one category average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    /// Average of 4 or more.
    Good,
    /// Average of 3 up to 4.
    Caution,
    /// Average below 3, including the 0 of an empty category.
    NeedsImprovement,
}

impl CategoryStatus {
    pub fn from_average(average: f64) -> Self {
        if average >= 4.0 {
            CategoryStatus::Good
        } else if average >= 3.0 {
            CategoryStatus::Caution
        } else {
            CategoryStatus::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryStatus::Good => "good",
            CategoryStatus::Caution => "caution",
            CategoryStatus::NeedsImprovement => "needs improvement",
        }
    }

    /// True for categories that get an advice entry on the report.
    pub fn needs_advice(&self) -> bool {
        matches!(self, CategoryStatus::NeedsImprovement)
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
