//! ResponseSet - one respondent's raw answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::QuestionCatalog;
use crate::domain::foundation::{QuestionId, ValidationError};

/// Lowest point of the Likert scale.
pub const MIN_SCORE: i32 = 1;

/// Highest point of the Likert scale.
pub const MAX_SCORE: i32 = 5;

/// Score assumed for a question the respondent left unanswered.
///
/// Historical reports were computed with this default, so changing it would
/// shift every partially completed diagnosis.
pub const NEUTRAL_SCORE: i32 = 3;

/// Mapping from question id to raw score.
///
/// Scores are stored exactly as given. The scoring functions never clamp or
/// reject them; `validate_scale` exists for callers that want to refuse
/// out-of-range input before it reaches the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<String, i32>);

impl ResponseSet {
    /// Creates an empty response set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a score, returning the previous one if the question was answered.
    pub fn insert(&mut self, question_id: impl Into<String>, score: i32) -> Option<i32> {
        self.0.insert(question_id.into(), score)
    }

    /// Builder-style variant of `insert`.
    pub fn with(mut self, question_id: impl Into<String>, score: i32) -> Self {
        self.insert(question_id, score);
        self
    }

    /// Returns the raw score, if answered.
    pub fn get(&self, question_id: &str) -> Option<i32> {
        self.0.get(question_id).copied()
    }

    /// Returns the raw score, or `NEUTRAL_SCORE` if unanswered.
    pub fn score_or_neutral(&self, question_id: &str) -> i32 {
        self.get(question_id).unwrap_or(NEUTRAL_SCORE)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates answers in question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(id, score)| (id.as_str(), *score))
    }

    /// Catalog questions without an answer (they will score as neutral).
    pub fn unanswered<'a>(&self, catalog: &'a QuestionCatalog) -> Vec<&'a QuestionId> {
        catalog
            .iter()
            .filter(|(_, q)| !self.0.contains_key(q.id().as_str()))
            .map(|(_, q)| q.id())
            .collect()
    }

    /// Answered ids that the catalog does not know (ignored by scoring).
    pub fn unknown_ids(&self, catalog: &QuestionCatalog) -> Vec<&str> {
        self.0
            .keys()
            .filter(|id| !catalog.contains(id))
            .map(String::as_str)
            .collect()
    }

    /// Checks that every score lies on the 1-5 scale.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` naming the first offending question id
    pub fn validate_scale(&self) -> Result<(), ValidationError> {
        match self
            .iter()
            .find(|(_, score)| !(MIN_SCORE..=MAX_SCORE).contains(score))
        {
            Some((id, score)) => Err(ValidationError::out_of_range(id, MIN_SCORE, MAX_SCORE, score)),
            None => Ok(()),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (K, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::BuiltinCatalog;

    #[test]
    fn missing_answer_scores_neutral() {
        let responses = ResponseSet::new().with("soft_1", 5);
        assert_eq!(responses.score_or_neutral("soft_1"), 5);
        assert_eq!(responses.score_or_neutral("soft_2"), NEUTRAL_SCORE);
    }

    #[test]
    fn insert_replaces_previous_score() {
        let mut responses = ResponseSet::new();
        assert_eq!(responses.insert("hard_1", 2), None);
        assert_eq!(responses.insert("hard_1", 4), Some(2));
        assert_eq!(responses.get("hard_1"), Some(4));
    }

    #[test]
    fn out_of_range_scores_are_stored_verbatim() {
        let responses = ResponseSet::new().with("soft_1", 9);
        assert_eq!(responses.score_or_neutral("soft_1"), 9);
    }

    #[test]
    fn validate_scale_names_first_offender() {
        let responses: ResponseSet = [("soft_1", 3), ("soft_2", 0), ("soft_3", 6)]
            .into_iter()
            .collect();
        assert_eq!(
            responses.validate_scale(),
            Err(ValidationError::out_of_range("soft_2", 1, 5, 0))
        );
    }

    #[test]
    fn validate_scale_accepts_full_scale() {
        let responses: ResponseSet = (1..=5).map(|s| (format!("q{}", s), s)).collect();
        assert!(responses.validate_scale().is_ok());
    }

    #[test]
    fn unanswered_lists_catalog_order() {
        let catalog = BuiltinCatalog::Standard.load().unwrap();
        let responses = ResponseSet::new().with("soft_2", 4).with("hard_1", 4);
        let missing: Vec<&str> = responses
            .unanswered(&catalog)
            .into_iter()
            .map(QuestionId::as_str)
            .collect();
        assert_eq!(
            missing,
            vec!["soft_1", "soft_3", "soft_4", "soft_5", "hard_2", "hard_3", "hard_4", "hard_5"]
        );
    }

    #[test]
    fn unknown_ids_are_reported() {
        let catalog = BuiltinCatalog::Standard.load().unwrap();
        let responses = ResponseSet::new().with("soft_1", 4).with("soft_99", 4);
        assert_eq!(responses.unknown_ids(&catalog), vec!["soft_99"]);
    }

    #[test]
    fn serializes_as_plain_map() {
        let responses = ResponseSet::new().with("b", 2).with("a", 1);
        assert_eq!(serde_json::to_string(&responses).unwrap(), r#"{"a":1,"b":2}"#);
    }
}
