//! Question value object and question groups.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{QuestionId, ValidationError};

/// Which composite index a question feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionGroup {
    /// Organizational and cultural health (people, training, mission).
    Soft,
    /// Regulatory compliance and financial/administrative rigor.
    Hard,
}

impl QuestionGroup {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionGroup::Soft => "Organizational management (Soft)",
            QuestionGroup::Hard => "Compliance and revenue (Hard)",
        }
    }
}

impl fmt::Display for QuestionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionGroup::Soft => "Soft",
            QuestionGroup::Hard => "Hard",
        };
        write!(f, "{}", s)
    }
}

/// A single Likert question of the catalog.
///
/// # Invariants
///
/// - `id` is non-blank (enforced by `QuestionId`)
/// - `category` and `prompt` are non-blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    category: String,
    prompt: String,
    #[serde(default)]
    description: String,
}

impl Question {
    /// Creates a question.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if category or prompt is blank
    pub fn new(
        id: QuestionId,
        category: impl Into<String>,
        prompt: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let question = Self {
            id,
            category: category.into(),
            prompt: prompt.into(),
            description: description.into(),
        };
        question.validate()?;
        Ok(question)
    }

    /// Checks the invariants of a (possibly deserialized) question.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}.category", self.id)));
        }
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}.prompt", self.id)));
        }
        Ok(())
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(s: &str) -> QuestionId {
        QuestionId::new(s).unwrap()
    }

    #[test]
    fn question_new_keeps_fields() {
        let q = Question::new(qid("soft_1"), "retention", "Is it good?", "Details").unwrap();
        assert_eq!(q.id().as_str(), "soft_1");
        assert_eq!(q.category(), "retention");
        assert_eq!(q.prompt(), "Is it good?");
        assert_eq!(q.description(), "Details");
    }

    #[test]
    fn question_rejects_blank_category() {
        let err = Question::new(qid("soft_1"), " ", "Prompt", "").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("soft_1.category"));
    }

    #[test]
    fn question_rejects_blank_prompt() {
        let err = Question::new(qid("hard_1"), "records", "", "").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("hard_1.prompt"));
    }

    #[test]
    fn question_description_defaults_when_missing() {
        let q: Question =
            serde_json::from_str(r#"{"id":"soft_9","category":"training","prompt":"P"}"#).unwrap();
        assert_eq!(q.description(), "");
    }

    #[test]
    fn group_displays_short_name() {
        assert_eq!(QuestionGroup::Soft.to_string(), "Soft");
        assert_eq!(QuestionGroup::Hard.to_string(), "Hard");
    }
}
