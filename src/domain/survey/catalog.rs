//! Question catalog - the injectable set of soft and hard questions.
//!
//! A catalog is static configuration data. It is validated once on
//! construction and never mutated afterwards, so scoring code can rely on
//! unique ids and known categories.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::question::{Question, QuestionGroup};
use crate::domain::foundation::ValidationError;

/// Errors raised while parsing or validating catalog text.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog is invalid: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Failed to parse YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Catalog layout as written in YAML/JSON files.
#[derive(Debug, Clone, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    soft_questions: Vec<Question>,
    #[serde(default)]
    hard_questions: Vec<Question>,
}

/// Validated question catalog.
///
/// # Invariants
///
/// - Question ids are unique across both groups
/// - Every question's category is listed in `categories`
/// - `categories` has no duplicates; a category may have no questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    categories: Vec<String>,
    soft_questions: Vec<Question>,
    hard_questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds a catalog with an explicit category order.
    ///
    /// Passing an empty `categories` list derives the order from the
    /// questions (soft first, then hard, first appearance wins).
    ///
    /// # Errors
    ///
    /// - `Duplicate` for repeated question ids or categories
    /// - `InvalidFormat` for a question whose category is not declared
    /// - `EmptyField` for blank categories or question fields
    pub fn new(
        categories: Vec<String>,
        soft_questions: Vec<Question>,
        hard_questions: Vec<Question>,
    ) -> Result<Self, ValidationError> {
        let categories = if categories.is_empty() {
            let mut derived: Vec<String> = Vec::new();
            for q in soft_questions.iter().chain(hard_questions.iter()) {
                if !derived.iter().any(|c| c == q.category()) {
                    derived.push(q.category().to_string());
                }
            }
            derived
        } else {
            categories
        };

        let mut seen_categories = HashSet::new();
        for category in &categories {
            if category.trim().is_empty() {
                return Err(ValidationError::empty_field("category"));
            }
            if !seen_categories.insert(category.as_str()) {
                return Err(ValidationError::duplicate("category", category.clone()));
            }
        }

        let mut seen_ids = HashSet::new();
        for q in soft_questions.iter().chain(hard_questions.iter()) {
            q.validate()?;
            if !seen_ids.insert(q.id().as_str()) {
                return Err(ValidationError::duplicate("question_id", q.id().as_str()));
            }
            if !seen_categories.contains(q.category()) {
                return Err(ValidationError::invalid_format(
                    format!("{}.category", q.id()),
                    format!("category '{}' is not declared", q.category()),
                ));
            }
        }

        Ok(Self {
            categories,
            soft_questions,
            hard_questions,
        })
    }

    /// Parses a catalog from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_yaml::from_str(text)?;
        Ok(Self::from_document(doc)?)
    }

    /// Parses a catalog from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(text)?;
        Ok(Self::from_document(doc)?)
    }

    fn from_document(doc: CatalogDocument) -> Result<Self, ValidationError> {
        Self::new(doc.categories, doc.soft_questions, doc.hard_questions)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Categories in declaration order (the radar axis order).
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn soft_questions(&self) -> &[Question] {
        &self.soft_questions
    }

    pub fn hard_questions(&self) -> &[Question] {
        &self.hard_questions
    }

    /// Returns the questions of one group.
    pub fn questions(&self, group: QuestionGroup) -> &[Question] {
        match group {
            QuestionGroup::Soft => &self.soft_questions,
            QuestionGroup::Hard => &self.hard_questions,
        }
    }

    /// Iterates soft then hard questions, in declaration order, with their group.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionGroup, &Question)> {
        self.soft_questions
            .iter()
            .map(|q| (QuestionGroup::Soft, q))
            .chain(self.hard_questions.iter().map(|q| (QuestionGroup::Hard, q)))
    }

    /// Looks up a question by id.
    pub fn find(&self, id: &str) -> Option<(QuestionGroup, &Question)> {
        self.iter().find(|(_, q)| q.id().as_str() == id)
    }

    /// Returns true if the id belongs to this catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Total number of questions.
    pub fn len(&self) -> usize {
        self.soft_questions.len() + self.hard_questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Catalog variants shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinCatalog {
    /// Five questions per group, six categories.
    #[default]
    Standard,
    /// Seven questions per group, eight categories.
    Extended,
}

impl BuiltinCatalog {
    fn source(&self) -> &'static str {
        match self {
            BuiltinCatalog::Standard => include_str!("catalogs/standard.yaml"),
            BuiltinCatalog::Extended => include_str!("catalogs/extended.yaml"),
        }
    }

    /// Parses the embedded catalog.
    pub fn load(&self) -> Result<QuestionCatalog, CatalogError> {
        QuestionCatalog::from_yaml_str(self.source())
    }
}

impl fmt::Display for BuiltinCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BuiltinCatalog::Standard => "standard",
            BuiltinCatalog::Extended => "extended",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for BuiltinCatalog {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(BuiltinCatalog::Standard),
            "extended" => Ok(BuiltinCatalog::Extended),
            other => Err(ValidationError::invalid_format(
                "catalog",
                format!("unknown built-in catalog '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionId;

    fn question(id: &str, category: &str) -> Question {
        Question::new(QuestionId::new(id).unwrap(), category, format!("Prompt {}", id), "")
            .unwrap()
    }

    #[test]
    fn standard_catalog_has_five_questions_per_group() {
        let catalog = BuiltinCatalog::Standard.load().unwrap();
        assert_eq!(catalog.soft_questions().len(), 5);
        assert_eq!(catalog.hard_questions().len(), 5);
        assert_eq!(
            catalog.categories(),
            &["retention", "training", "mission", "staffing-ratio", "records", "safety"]
        );
    }

    #[test]
    fn extended_catalog_has_seven_questions_per_group() {
        let catalog = BuiltinCatalog::Extended.load().unwrap();
        assert_eq!(catalog.soft_questions().len(), 7);
        assert_eq!(catalog.hard_questions().len(), 7);
        assert_eq!(catalog.categories().len(), 8);
        assert!(catalog.categories().iter().any(|c| c == "billing-addons"));
    }

    #[test]
    fn iter_yields_soft_then_hard_in_declaration_order() {
        let catalog = BuiltinCatalog::Standard.load().unwrap();
        let ids: Vec<&str> = catalog.iter().map(|(_, q)| q.id().as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "soft_1", "soft_2", "soft_3", "soft_4", "soft_5", "hard_1", "hard_2", "hard_3",
                "hard_4", "hard_5"
            ]
        );
    }

    #[test]
    fn find_reports_group() {
        let catalog = BuiltinCatalog::Standard.load().unwrap();
        let (group, q) = catalog.find("hard_4").unwrap();
        assert_eq!(group, QuestionGroup::Hard);
        assert_eq!(q.category(), "safety");
        assert!(catalog.find("hard_99").is_none());
    }

    #[test]
    fn new_derives_categories_when_none_declared() {
        let catalog = QuestionCatalog::new(
            vec![],
            vec![question("s1", "b"), question("s2", "a")],
            vec![question("h1", "b"), question("h2", "c")],
        )
        .unwrap();
        assert_eq!(catalog.categories(), &["b", "a", "c"]);
    }

    #[test]
    fn new_rejects_duplicate_ids_across_groups() {
        let err = QuestionCatalog::new(
            vec![],
            vec![question("q1", "a")],
            vec![question("q1", "b")],
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::duplicate("question_id", "q1"));
    }

    #[test]
    fn new_rejects_undeclared_category() {
        let err = QuestionCatalog::new(
            vec!["a".to_string()],
            vec![question("q1", "a")],
            vec![question("q2", "z")],
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn new_rejects_duplicate_categories() {
        let err = QuestionCatalog::new(
            vec!["a".to_string(), "a".to_string()],
            vec![question("q1", "a")],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::duplicate("category", "a"));
    }

    #[test]
    fn declared_category_may_be_empty() {
        let catalog = QuestionCatalog::new(
            vec!["a".to_string(), "unused".to_string()],
            vec![question("q1", "a")],
            vec![],
        )
        .unwrap();
        assert_eq!(catalog.categories().len(), 2);
    }

    #[test]
    fn from_json_str_parses_document() {
        let json = r#"{
            "soft_questions": [{"id": "soft_1", "category": "retention", "prompt": "P1"}],
            "hard_questions": [{"id": "hard_1", "category": "safety", "prompt": "P2"}]
        }"#;
        let catalog = QuestionCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.categories(), &["retention", "safety"]);
    }

    #[test]
    fn from_yaml_str_surfaces_validation_errors() {
        let yaml = "soft_questions:\n  - id: a\n    category: x\n    prompt: p\n  - id: a\n    category: x\n    prompt: q\n";
        let err = QuestionCatalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(ValidationError::Duplicate { .. })));
    }

    #[test]
    fn builtin_catalog_parses_from_name() {
        assert_eq!("extended".parse::<BuiltinCatalog>().unwrap(), BuiltinCatalog::Extended);
        assert!("tiny".parse::<BuiltinCatalog>().is_err());
    }
}
