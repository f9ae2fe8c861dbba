//! Report module - assembles scoring output into presentable reports.
//!
//! Reports are plain serializable data: indices, quadrant profiles,
//! category tables, fixed advice text and chart series. Identical inputs
//! produce identical reports.

mod advice;
mod chart;
mod dual;
mod single;

pub use advice::{
    category_advice, GapAdvice, ALL_CATEGORIES_MEET_STANDARD, FALLBACK_CATEGORY_ADVICE,
    PERCEPTION_MISMATCH_WARNING,
};
pub use chart::{
    truncate_label, GapSegment, PairedBarSeries, QuadrantPoint, RadarSeries, BAR_LABEL_MAX_CHARS,
};
pub use dual::{DualCharts, DualReport, HighGapItem, PerceptionWarning, RespondentSummary};
pub use single::{CategoryAdvice, CategoryRow, QuadrantAssessment, SingleCharts, SingleReport};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{DiagnosisCode, DiagnosisMode, Timestamp};
use crate::domain::survey::BusinessProfile;

/// Diagnosis information printed on every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHeader {
    pub diagnosis_code: DiagnosisCode,
    pub profile: BusinessProfile,
    pub business_type_label: &'static str,
    pub scale_label: &'static str,
    pub diagnosed_on: NaiveDate,
}

impl ReportHeader {
    pub fn new(diagnosis_code: DiagnosisCode, profile: BusinessProfile, diagnosed_at: &Timestamp) -> Self {
        Self {
            diagnosis_code,
            business_type_label: profile.business_type.label(),
            scale_label: profile.scale.label(),
            profile,
            diagnosed_on: diagnosed_at.date(),
        }
    }
}

/// Report of either workflow mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DiagnosisReport {
    Single(SingleReport),
    Dual(DualReport),
}

impl DiagnosisReport {
    pub fn mode(&self) -> DiagnosisMode {
        match self {
            DiagnosisReport::Single(_) => DiagnosisMode::Single,
            DiagnosisReport::Dual(_) => DiagnosisMode::Dual,
        }
    }

    pub fn header(&self) -> &ReportHeader {
        match self {
            DiagnosisReport::Single(r) => &r.header,
            DiagnosisReport::Dual(r) => &r.header,
        }
    }
}
