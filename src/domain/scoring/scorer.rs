//! Scorer - turns a ResponseSet into composite indices and category averages.

use serde::{Deserialize, Serialize};

use crate::domain::survey::{QuestionCatalog, QuestionGroup, ResponseSet, MAX_SCORE};

/// Average score of one category (1-5 scale, 0 when the category is empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverage {
    pub category: String,
    pub average: f64,
}

/// Category averages in catalog category order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryAverages(Vec<CategoryAverage>);

impl CategoryAverages {
    /// Returns the average for a category, if the catalog declares it.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.average)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryAverage> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[CategoryAverage] {
        &self.0
    }
}

impl FromIterator<CategoryAverage> for CategoryAverages {
    fn from_iter<I: IntoIterator<Item = CategoryAverage>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of scoring one ResponseSet.
///
/// # Invariants
///
/// - `soft_index`, `hard_index` are in [0, 100] when every raw score is in [1, 5]
/// - `soft_raw`/`hard_raw` follow catalog declaration order, neutral-filled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Organizational health, 0-100.
    pub soft_index: f64,
    /// Compliance and revenue health, 0-100.
    pub hard_index: f64,
    pub category_averages: CategoryAverages,
    pub soft_raw: Vec<i32>,
    pub hard_raw: Vec<i32>,
}

impl ScoreResult {
    /// Returns the composite index of one group.
    pub fn index(&self, group: QuestionGroup) -> f64 {
        match group {
            QuestionGroup::Soft => self.soft_index,
            QuestionGroup::Hard => self.hard_index,
        }
    }
}

/// Stateless scoring service.
pub struct Scorer;

impl Scorer {
    /// Computes composite indices and category averages.
    ///
    /// Unanswered questions count as the neutral score 3. Scores outside
    /// 1-5 are used as given.
    ///
    /// # Edge Cases
    /// - Empty question group: index 0
    /// - Declared category without questions: average 0
    pub fn compute_scores(responses: &ResponseSet, catalog: &QuestionCatalog) -> ScoreResult {
        let soft_raw = Self::collect(responses, catalog, QuestionGroup::Soft);
        let hard_raw = Self::collect(responses, catalog, QuestionGroup::Hard);

        let category_averages = catalog
            .categories()
            .iter()
            .map(|category| {
                let scores: Vec<i32> = catalog
                    .iter()
                    .filter(|(_, q)| q.category() == category.as_str())
                    .map(|(_, q)| responses.score_or_neutral(q.id().as_str()))
                    .collect();
                CategoryAverage {
                    category: category.clone(),
                    average: mean(&scores),
                }
            })
            .collect();

        ScoreResult {
            soft_index: Self::composite_index(&soft_raw),
            hard_index: Self::composite_index(&hard_raw),
            category_averages: CategoryAverages(category_averages),
            soft_raw,
            hard_raw,
        }
    }

    /// Rescales the mean of raw 1-5 scores to 0-100.
    pub fn composite_index(scores: &[i32]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }
        (mean(scores) / f64::from(MAX_SCORE)) * 100.0
    }

    fn collect(responses: &ResponseSet, catalog: &QuestionCatalog, group: QuestionGroup) -> Vec<i32> {
        catalog
            .questions(group)
            .iter()
            .map(|q| responses.score_or_neutral(q.id().as_str()))
            .collect()
    }
}

/// Arithmetic mean, 0 for an empty slice.
pub(crate) fn mean(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|v| f64::from(*v)).sum();
    sum / values.len() as f64
}
