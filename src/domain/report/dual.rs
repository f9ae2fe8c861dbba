//! Dual-mode report comparing executive and manager answers.

use serde::Serialize;

use super::advice::{GapAdvice, PERCEPTION_MISMATCH_WARNING};
use super::chart::{GapSegment, PairedBarSeries, QuadrantPoint, RadarSeries};
use super::single::{category_rows, CategoryRow, QuadrantAssessment};
use super::ReportHeader;
use crate::domain::scoring::{Classifier, GapDirection, GapLevel, GapRecord, ScoreResult, Scorer};
use crate::domain::survey::{QuestionCatalog, ResponseSet};

/// Scores and quadrant of one of the two respondents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RespondentSummary {
    pub scores: ScoreResult,
    pub assessment: QuadrantAssessment,
    pub categories: Vec<CategoryRow>,
}

impl RespondentSummary {
    fn evaluate(responses: &ResponseSet, catalog: &QuestionCatalog, threshold: f64) -> Self {
        let scores = Scorer::compute_scores(responses, catalog);
        Self {
            assessment: QuadrantAssessment::classify(&scores, threshold),
            categories: category_rows(&scores.category_averages),
            scores,
        }
    }
}

/// A question where the two respondents differ by 2 or more points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighGapItem {
    pub record: GapRecord,
    pub direction: GapDirection,
    pub direction_label: &'static str,
}

/// Present only when the two quadrants differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerceptionWarning {
    pub executive_quadrant: &'static str,
    pub manager_quadrant: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualCharts {
    pub executive_point: QuadrantPoint,
    pub manager_point: QuadrantPoint,
    pub gap_segment: GapSegment,
    pub comparison_bars: PairedBarSeries,
    pub executive_radar: RadarSeries,
    pub manager_radar: RadarSeries,
}

/// Report comparing executive and manager answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    pub executive: RespondentSummary,
    pub manager: RespondentSummary,
    pub perception_mismatch: bool,
    pub perception_warning: Option<PerceptionWarning>,
    pub gaps: Vec<GapRecord>,
    pub mean_absolute_gap: f64,
    pub gap_level: GapLevel,
    pub gap_advice: GapAdvice,
    pub high_gap_items: Vec<HighGapItem>,
    pub charts: DualCharts,
}

impl DualReport {
    pub fn build(
        header: ReportHeader,
        executive_responses: &ResponseSet,
        manager_responses: &ResponseSet,
        catalog: &QuestionCatalog,
        threshold: f64,
    ) -> Self {
        let executive = RespondentSummary::evaluate(executive_responses, catalog, threshold);
        let manager = RespondentSummary::evaluate(manager_responses, catalog, threshold);
        let gap_report = Classifier::gap_report(executive_responses, manager_responses, catalog);

        let exec_quadrant = executive.assessment.quadrant;
        let mgr_quadrant = manager.assessment.quadrant;
        let perception_mismatch = exec_quadrant != mgr_quadrant;
        let perception_warning = perception_mismatch.then(|| PerceptionWarning {
            executive_quadrant: exec_quadrant.name(),
            manager_quadrant: mgr_quadrant.name(),
            message: PERCEPTION_MISMATCH_WARNING,
        });

        let high_gap_items = gap_report
            .high_gap_items()
            .map(|record| {
                let direction = record.direction();
                HighGapItem {
                    record: record.clone(),
                    direction,
                    direction_label: direction.label(),
                }
            })
            .collect();

        let executive_point = QuadrantPoint::from_scores("Executive", &executive.scores);
        let manager_point = QuadrantPoint::from_scores("Manager", &manager.scores);
        let charts = DualCharts {
            gap_segment: GapSegment {
                from: executive_point.clone(),
                to: manager_point.clone(),
            },
            executive_point,
            manager_point,
            comparison_bars: PairedBarSeries::from_gaps(&gap_report.records),
            executive_radar: RadarSeries::from_averages(
                "Executive",
                &executive.scores.category_averages,
            ),
            manager_radar: RadarSeries::from_averages("Manager", &manager.scores.category_averages),
        };

        Self {
            header,
            executive,
            manager,
            perception_mismatch,
            perception_warning,
            gap_advice: GapAdvice::for_level(gap_report.level),
            gap_level: gap_report.level,
            mean_absolute_gap: gap_report.mean_absolute_gap,
            gaps: gap_report.records,
            high_gap_items,
            charts,
        }
    }
}
