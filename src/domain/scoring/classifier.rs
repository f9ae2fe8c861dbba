//! Classifier - quadrant placement and dual-respondent gap analysis.

use super::gap::{GapRecord, GapReport};
use super::quadrant::{Quadrant, DEFAULT_QUADRANT_THRESHOLD};
use crate::domain::survey::{QuestionCatalog, ResponseSet};

/// Stateless classification service.
pub struct Classifier;

impl Classifier {
    /// Places an index pair on the 2x2 plane.
    ///
    /// An index equal to the threshold counts as high. NaN compares false
    /// on either axis, so it lands on the low side.
    pub fn classify_quadrant(soft_index: f64, hard_index: f64, threshold: f64) -> Quadrant {
        let soft_high = soft_index >= threshold;
        let hard_high = hard_index >= threshold;
        match (soft_high, hard_high) {
            (true, true) => Quadrant::Healthy,
            (false, true) => Quadrant::FragileGrowth,
            (true, false) => Quadrant::ChronicallyUnderfunded,
            (false, false) => Quadrant::NearCollapse,
        }
    }

    /// `classify_quadrant` with the threshold of 60.
    pub fn classify_quadrant_default(soft_index: f64, hard_index: f64) -> Quadrant {
        Self::classify_quadrant(soft_index, hard_index, DEFAULT_QUADRANT_THRESHOLD)
    }

    /// Computes one gap record per catalog question, soft group first.
    ///
    /// Missing answers on either side count as the neutral score.
    pub fn compute_gaps(
        executive: &ResponseSet,
        manager: &ResponseSet,
        catalog: &QuestionCatalog,
    ) -> Vec<GapRecord> {
        catalog
            .iter()
            .map(|(group, question)| {
                let id = question.id().as_str();
                let executive_score = executive.score_or_neutral(id);
                let manager_score = manager.score_or_neutral(id);
                let signed_gap = i64::from(executive_score) - i64::from(manager_score);
                GapRecord {
                    question_id: question.id().clone(),
                    group,
                    category: question.category().to_string(),
                    prompt: question.prompt().to_string(),
                    executive_score,
                    manager_score,
                    signed_gap,
                    absolute_gap: signed_gap.abs(),
                }
            })
            .collect()
    }

    /// `compute_gaps` summarized into a `GapReport`.
    pub fn gap_report(
        executive: &ResponseSet,
        manager: &ResponseSet,
        catalog: &QuestionCatalog,
    ) -> GapReport {
        GapReport::from_records(Self::compute_gaps(executive, manager, catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionId;
    use crate::domain::scoring::{GapDirection, GapLevel, Scorer};
    use crate::domain::survey::{BuiltinCatalog, Question, QuestionGroup};
    use proptest::prelude::*;

    fn single_question_catalog() -> QuestionCatalog {
        QuestionCatalog::new(
            vec![],
            vec![Question::new(QuestionId::new("q1").unwrap(), "retention", "Prompt", "").unwrap()],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn quadrant_table_is_covered() {
        assert_eq!(Classifier::classify_quadrant(80.0, 80.0, 60.0), Quadrant::Healthy);
        assert_eq!(Classifier::classify_quadrant(40.0, 80.0, 60.0), Quadrant::FragileGrowth);
        assert_eq!(
            Classifier::classify_quadrant(80.0, 40.0, 60.0),
            Quadrant::ChronicallyUnderfunded
        );
        assert_eq!(Classifier::classify_quadrant(40.0, 40.0, 60.0), Quadrant::NearCollapse);
    }

    #[test]
    fn threshold_boundary_counts_as_high() {
        assert_eq!(Classifier::classify_quadrant_default(60.0, 60.0), Quadrant::Healthy);
        assert_eq!(
            Classifier::classify_quadrant_default(59.999, 60.0),
            Quadrant::FragileGrowth
        );
    }

    #[test]
    fn nan_lands_on_low_side() {
        assert_eq!(
            Classifier::classify_quadrant_default(f64::NAN, f64::NAN),
            Quadrant::NearCollapse
        );
        assert_eq!(
            Classifier::classify_quadrant_default(f64::NAN, 90.0),
            Quadrant::FragileGrowth
        );
    }

    #[test]
    fn custom_threshold_is_respected() {
        assert_eq!(Classifier::classify_quadrant(65.0, 65.0, 70.0), Quadrant::NearCollapse);
    }

    #[test]
    fn scored_scenarios_classify_as_expected() {
        let catalog = QuestionCatalog::new(
            vec![],
            vec![Question::new(QuestionId::new("soft_1").unwrap(), "a", "P", "").unwrap()],
            vec![Question::new(QuestionId::new("hard_1").unwrap(), "b", "P", "").unwrap()],
        )
        .unwrap();
        let cases = [
            ((5, 5), Quadrant::Healthy),
            ((1, 1), Quadrant::NearCollapse),
            ((5, 1), Quadrant::ChronicallyUnderfunded),
            ((1, 5), Quadrant::FragileGrowth),
        ];
        for ((soft, hard), expected) in cases {
            let responses = ResponseSet::new().with("soft_1", soft).with("hard_1", hard);
            let scores = Scorer::compute_scores(&responses, &catalog);
            assert_eq!(
                Classifier::classify_quadrant_default(scores.soft_index, scores.hard_index),
                expected
            );
        }
    }

    #[test]
    fn single_question_gap_is_large() {
        let executive = ResponseSet::new().with("q1", 5);
        let manager = ResponseSet::new().with("q1", 2);
        let report = Classifier::gap_report(&executive, &manager, &single_question_catalog());

        let record = &report.records[0];
        assert_eq!(record.signed_gap, 3);
        assert_eq!(record.absolute_gap, 3);
        assert!(record.is_high_gap());
        assert_eq!(record.direction(), GapDirection::ExecutiveHigher);
        assert_eq!(report.level, GapLevel::Large);
    }

    #[test]
    fn gaps_follow_catalog_order_and_default_to_neutral() {
        let catalog = BuiltinCatalog::Standard.load().unwrap();
        let executive = ResponseSet::new().with("hard_5", 1);
        let gaps = Classifier::compute_gaps(&executive, &ResponseSet::new(), &catalog);

        assert_eq!(gaps.len(), catalog.len());
        assert_eq!(gaps[0].question_id.as_str(), "soft_1");
        assert_eq!(gaps[0].group, QuestionGroup::Soft);
        let last = gaps.last().unwrap();
        assert_eq!(last.question_id.as_str(), "hard_5");
        assert_eq!(last.group, QuestionGroup::Hard);
        assert_eq!(last.manager_score, 3);
        assert_eq!(last.signed_gap, -2);
        assert!(gaps[..gaps.len() - 1].iter().all(|g| g.signed_gap == 0));
    }

    #[test]
    fn extreme_scores_do_not_overflow() {
        let executive = ResponseSet::new().with("q1", i32::MAX);
        let manager = ResponseSet::new().with("q1", i32::MIN);
        let gaps = Classifier::compute_gaps(&executive, &manager, &single_question_catalog());
        assert_eq!(gaps[0].signed_gap, i64::from(i32::MAX) - i64::from(i32::MIN));
    }

    #[test]
    fn empty_catalog_has_no_gaps() {
        let catalog = QuestionCatalog::new(vec![], vec![], vec![]).unwrap();
        let report = Classifier::gap_report(&ResponseSet::new(), &ResponseSet::new(), &catalog);
        assert!(report.records.is_empty());
        assert_eq!(report.mean_absolute_gap, 0.0);
    }

    fn answers() -> impl Strategy<Value = ResponseSet> {
        proptest::collection::vec(1i32..=5, 10).prop_map(|scores| {
            ["soft_1", "soft_2", "soft_3", "soft_4", "soft_5", "hard_1", "hard_2", "hard_3", "hard_4", "hard_5"]
                .into_iter()
                .zip(scores)
                .collect()
        })
    }

    proptest! {
        #[test]
        fn classification_is_total(soft in proptest::num::f64::ANY, hard in proptest::num::f64::ANY) {
            let quadrant = Classifier::classify_quadrant_default(soft, hard);
            prop_assert!(Quadrant::ALL.contains(&quadrant));
        }

        #[test]
        fn gaps_are_antisymmetric(a in answers(), b in answers()) {
            let catalog = BuiltinCatalog::Standard.load().unwrap();
            let forward = Classifier::compute_gaps(&a, &b, &catalog);
            let backward = Classifier::compute_gaps(&b, &a, &catalog);
            for (f, r) in forward.iter().zip(backward.iter()) {
                prop_assert_eq!(f.signed_gap, -r.signed_gap);
                prop_assert_eq!(f.absolute_gap, r.absolute_gap);
            }
        }

        #[test]
        fn gap_analysis_is_idempotent(a in answers(), b in answers()) {
            let catalog = BuiltinCatalog::Standard.load().unwrap();
            prop_assert_eq!(
                Classifier::gap_report(&a, &b, &catalog),
                Classifier::gap_report(&a, &b, &catalog)
            );
        }
    }
}
