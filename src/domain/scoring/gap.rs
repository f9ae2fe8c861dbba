//! Per-question perception gaps between an executive and a site manager.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::QuestionId;
use crate::domain::survey::QuestionGroup;

/// Absolute gap at or above which a question is flagged.
pub const HIGH_GAP_THRESHOLD: i64 = 2;

/// Mean absolute gap at or above which the gap level is `Large`.
pub const LARGE_GAP_THRESHOLD: f64 = 1.5;

/// Mean absolute gap at or above which the gap level is `Moderate`.
pub const MODERATE_GAP_THRESHOLD: f64 = 0.8;

/// Gap between two respondents on one question.
///
/// `signed_gap` is `executive_score - manager_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapRecord {
    pub question_id: QuestionId,
    pub group: QuestionGroup,
    pub category: String,
    pub prompt: String,
    pub executive_score: i32,
    pub manager_score: i32,
    pub signed_gap: i64,
    pub absolute_gap: i64,
}

impl GapRecord {
    pub fn is_high_gap(&self) -> bool {
        self.absolute_gap >= HIGH_GAP_THRESHOLD
    }

    pub fn direction(&self) -> GapDirection {
        match self.signed_gap {
            g if g > 0 => GapDirection::ExecutiveHigher,
            g if g < 0 => GapDirection::ManagerHigher,
            _ => GapDirection::Aligned,
        }
    }
}

/// Which respondent rated a question higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapDirection {
    ExecutiveHigher,
    ManagerHigher,
    Aligned,
}

impl GapDirection {
    pub fn label(&self) -> &'static str {
        match self {
            GapDirection::ExecutiveHigher => "executive rates higher",
            GapDirection::ManagerHigher => "manager rates higher",
            GapDirection::Aligned => "aligned",
        }
    }
}

impl fmt::Display for GapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bucket of the mean absolute gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapLevel {
    Large,
    Moderate,
    Small,
}

impl GapLevel {
    /// Buckets a mean absolute gap. NaN falls through to `Small`.
    pub fn from_mean(mean_absolute_gap: f64) -> Self {
        if mean_absolute_gap >= LARGE_GAP_THRESHOLD {
            GapLevel::Large
        } else if mean_absolute_gap >= MODERATE_GAP_THRESHOLD {
            GapLevel::Moderate
        } else {
            GapLevel::Small
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GapLevel::Large => "large",
            GapLevel::Moderate => "moderate",
            GapLevel::Small => "small",
        }
    }
}

impl fmt::Display for GapLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// All gap records of a dual diagnosis with their summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub records: Vec<GapRecord>,
    pub mean_absolute_gap: f64,
    pub level: GapLevel,
}

impl GapReport {
    /// Summarizes records; an empty list has mean 0 and level `Small`.
    pub fn from_records(records: Vec<GapRecord>) -> Self {
        let mean_absolute_gap = if records.is_empty() {
            0.0
        } else {
            let total: i64 = records.iter().map(|r| r.absolute_gap).sum();
            total as f64 / records.len() as f64
        };
        Self {
            level: GapLevel::from_mean(mean_absolute_gap),
            records,
            mean_absolute_gap,
        }
    }

    /// Records with an absolute gap of at least 2, in catalog order.
    pub fn high_gap_items(&self) -> impl Iterator<Item = &GapRecord> {
        self.records.iter().filter(|r| r.is_high_gap())
    }
}
