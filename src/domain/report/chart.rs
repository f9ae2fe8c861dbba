//! Chart data series.
//!
//! Only the numbers a renderer needs: points, closed radar polygons and
//! paired bars. Layout and colors beyond the quadrant palette stay with the
//! client.

use serde::Serialize;

use crate::domain::scoring::{CategoryAverages, GapRecord, ScoreResult};
use crate::domain::survey::NEUTRAL_SCORE;

/// Maximum number of prompt characters shown under a bar.
pub const BAR_LABEL_MAX_CHARS: usize = 15;

/// A respondent's position on the quadrant plot (x = hard, y = soft).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl QuadrantPoint {
    pub fn from_scores(label: impl Into<String>, scores: &ScoreResult) -> Self {
        Self {
            label: label.into(),
            x: scores.hard_index,
            y: scores.soft_index,
        }
    }
}

/// Line connecting the executive point to the manager point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapSegment {
    pub from: QuadrantPoint,
    pub to: QuadrantPoint,
}

/// Closed radar polygon: the first axis is repeated at the end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub name: String,
    pub axes: Vec<String>,
    pub values: Vec<f64>,
}

impl RadarSeries {
    /// Builds a series from category averages in their stored order.
    pub fn from_averages(name: impl Into<String>, averages: &CategoryAverages) -> Self {
        let mut axes: Vec<String> = averages.iter().map(|c| c.category.clone()).collect();
        let mut values: Vec<f64> = averages.iter().map(|c| c.average).collect();
        close(&mut axes);
        close(&mut values);
        Self {
            name: name.into(),
            axes,
            values,
        }
    }

    /// Constant series at the neutral score over the same axes.
    pub fn baseline(axes: &[String]) -> Self {
        Self {
            name: "baseline".to_string(),
            axes: axes.to_vec(),
            values: vec![f64::from(NEUTRAL_SCORE); axes.len()],
        }
    }
}

fn close<T: Clone>(series: &mut Vec<T>) {
    if let Some(first) = series.first().cloned() {
        series.push(first);
    }
}

/// Executive vs manager score per question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairedBarSeries {
    pub labels: Vec<String>,
    pub executive: Vec<i32>,
    pub manager: Vec<i32>,
}

impl PairedBarSeries {
    pub fn from_gaps(records: &[GapRecord]) -> Self {
        Self {
            labels: records.iter().map(|r| truncate_label(&r.prompt)).collect(),
            executive: records.iter().map(|r| r.executive_score).collect(),
            manager: records.iter().map(|r| r.manager_score).collect(),
        }
    }
}

/// Shortens a prompt to 15 characters followed by "...".
pub fn truncate_label(prompt: &str) -> String {
    if prompt.chars().count() > BAR_LABEL_MAX_CHARS {
        let head: String = prompt.chars().take(BAR_LABEL_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        prompt.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::CategoryAverage;

    fn averages(values: &[(&str, f64)]) -> CategoryAverages {
        values
            .iter()
            .map(|(category, average)| CategoryAverage {
                category: category.to_string(),
                average: *average,
            })
            .collect()
    }

    #[test]
    fn radar_series_repeats_first_axis() {
        let series = RadarSeries::from_averages("result", &averages(&[("a", 4.0), ("b", 2.5), ("c", 3.0)]));
        assert_eq!(series.axes, vec!["a", "b", "c", "a"]);
        assert_eq!(series.values, vec![4.0, 2.5, 3.0, 4.0]);
    }

    #[test]
    fn empty_radar_series_stays_empty() {
        let series = RadarSeries::from_averages("result", &CategoryAverages::default());
        assert!(series.axes.is_empty());
        assert!(series.values.is_empty());
    }

    #[test]
    fn baseline_is_neutral_on_every_axis() {
        let series = RadarSeries::from_averages("result", &averages(&[("a", 1.0), ("b", 5.0)]));
        let baseline = RadarSeries::baseline(&series.axes);
        assert_eq!(baseline.values, vec![3.0, 3.0, 3.0]);
        assert_eq!(baseline.axes, series.axes);
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_label("short prompt"), "short prompt");
        assert_eq!(truncate_label("exactly 15 char"), "exactly 15 char");
        assert_eq!(truncate_label("sixteen chars!!!"), "sixteen chars!!...");
        let wide = "あ".repeat(16);
        assert_eq!(truncate_label(&wide), format!("{}...", "あ".repeat(15)));
    }

    #[test]
    fn quadrant_point_puts_hard_on_x() {
        let scores = ScoreResult {
            soft_index: 80.0,
            hard_index: 40.0,
            category_averages: CategoryAverages::default(),
            soft_raw: vec![],
            hard_raw: vec![],
        };
        let point = QuadrantPoint::from_scores("Executive", &scores);
        assert_eq!((point.x, point.y), (40.0, 80.0));
    }
}
