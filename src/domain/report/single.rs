//! Single-respondent report: scores, quadrant, category advice and charts.

use chrono::NaiveDate;
use serde::Serialize;

use super::advice::{category_advice, ALL_CATEGORIES_MEET_STANDARD};
use super::chart::{QuadrantPoint, RadarSeries};
use super::ReportHeader;
use crate::domain::scoring::{
    CategoryAverages, CategoryStatus, Classifier, Quadrant, QuadrantProfile, ScoreResult, Scorer,
};
use crate::domain::survey::{QuestionCatalog, ResponseSet};

/// One row of the category table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub average: f64,
    pub status: CategoryStatus,
}

/// Improvement advice for a category averaging below 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAdvice {
    pub category: String,
    pub advice: &'static str,
}

/// Quadrant assessment of one respondent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantAssessment {
    pub quadrant: Quadrant,
    pub name: &'static str,
    pub profile: QuadrantProfile,
}

impl QuadrantAssessment {
    pub fn classify(scores: &ScoreResult, threshold: f64) -> Self {
        let quadrant = Classifier::classify_quadrant(scores.soft_index, scores.hard_index, threshold);
        Self {
            quadrant,
            name: quadrant.name(),
            profile: quadrant.profile(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleCharts {
    pub quadrant_point: QuadrantPoint,
    pub radar: RadarSeries,
    pub baseline: RadarSeries,
}

/// Report for a single respondent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    pub scores: ScoreResult,
    pub assessment: QuadrantAssessment,
    pub categories: Vec<CategoryRow>,
    /// Advice for every category below 3, in catalog order.
    pub low_categories: Vec<CategoryAdvice>,
    /// Shown instead of advice when no category is below 3.
    pub all_clear_message: Option<&'static str>,
    pub charts: SingleCharts,
}

impl SingleReport {
    /// Scores and classifies one answer set.
    pub fn build(
        header: ReportHeader,
        responses: &ResponseSet,
        catalog: &QuestionCatalog,
        threshold: f64,
    ) -> Self {
        let scores = Scorer::compute_scores(responses, catalog);
        let assessment = QuadrantAssessment::classify(&scores, threshold);
        let categories = category_rows(&scores.category_averages);

        let low_categories: Vec<CategoryAdvice> = categories
            .iter()
            .filter(|row| row.status.needs_advice())
            .map(|row| CategoryAdvice {
                category: row.category.clone(),
                advice: category_advice(&row.category),
            })
            .collect();
        let all_clear_message = low_categories
            .is_empty()
            .then_some(ALL_CATEGORIES_MEET_STANDARD);

        let radar = RadarSeries::from_averages("result", &scores.category_averages);
        let charts = SingleCharts {
            quadrant_point: QuadrantPoint::from_scores("Respondent", &scores),
            baseline: RadarSeries::baseline(&radar.axes),
            radar,
        };

        Self {
            header,
            scores,
            assessment,
            categories,
            low_categories,
            all_clear_message,
            charts,
        }
    }

    pub fn quadrant(&self) -> Quadrant {
        self.assessment.quadrant
    }

    pub fn diagnosed_on(&self) -> NaiveDate {
        self.header.diagnosed_on
    }
}

pub(crate) fn category_rows(averages: &CategoryAverages) -> Vec<CategoryRow> {
    averages
        .iter()
        .map(|c| CategoryRow {
            category: c.category.clone(),
            average: c.average,
            status: CategoryStatus::from_average(c.average),
        })
        .collect()
}
