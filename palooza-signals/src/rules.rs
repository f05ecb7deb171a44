//! Declarative keyword rules for annotation heuristics.
//!
//! Each [`KeywordRule`] names the keywords it looks for, the rating it
//! adjusts and how many matching labels it needs. Rules are evaluated
//! uniformly by [`KeywordRule::fires`]; adding a heuristic means adding a
//! table entry rather than another branch.

use crate::Annotation;

/// The sub-rating a rule adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingField {
    /// Swagger and confidence.
    Attitude,
    /// Walk and posture.
    Strut,
    /// Tourist judging factor.
    Judging,
}

impl RatingField {
    /// Every field, in the order jitter is drawn.
    pub const ALL: [Self; 3] = [Self::Attitude, Self::Strut, Self::Judging];
}

/// A keyword heuristic over image labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordRule {
    /// Short name used in diagnostics.
    pub name: &'static str,
    /// Keywords matched as case-insensitive substrings of the label text.
    pub keywords: &'static [&'static str],
    /// Rating adjusted when the rule fires.
    pub applies_to: RatingField,
    /// Amount added to the rating when the rule fires.
    pub weight: i64,
    /// Labels only count when their confidence is strictly above this value.
    pub min_confidence: Option<f32>,
    /// Number of matching labels required for the rule to fire.
    pub min_matches: usize,
}

impl KeywordRule {
    /// Report whether a single label satisfies the rule.
    #[must_use]
    pub fn matches(&self, label: &Annotation) -> bool {
        let confident = self
            .min_confidence
            .is_none_or(|threshold| label.confidence > threshold);
        confident && contains_any_keyword(&label.text.to_lowercase(), self.keywords)
    }

    /// Count the labels that satisfy the rule; each label counts once.
    #[must_use]
    pub fn count_matches(&self, labels: &[Annotation]) -> usize {
        labels.iter().filter(|label| self.matches(label)).count()
    }

    /// Report whether enough labels match for the rule to apply.
    #[must_use]
    pub fn fires(&self, labels: &[Annotation]) -> bool {
        self.count_matches(labels) >= self.min_matches
    }
}

fn contains_any_keyword(lowercase_text: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| lowercase_text.contains(keyword.to_lowercase().as_str()))
}

/// The heuristic rule table, evaluated in order.
///
/// Both judging rules may fire for the same image, raising judging by two
/// before jitter and clamping.
pub const RULES: [KeywordRule; 4] = [
    KeywordRule {
        name: "bold features",
        keywords: &["Bird", "Pigeon", "Beak", "Eye", "Feather", "Wing"],
        applies_to: RatingField::Attitude,
        weight: 1,
        min_confidence: Some(0.8),
        min_matches: 3,
    },
    KeywordRule {
        name: "posture",
        keywords: &["Perched", "Standing", "Sitting", "Walking"],
        applies_to: RatingField::Strut,
        weight: 1,
        min_confidence: None,
        min_matches: 1,
    },
    KeywordRule {
        name: "urban setting",
        keywords: &["Building", "Street", "Sidewalk", "Urban", "City", "Concrete"],
        applies_to: RatingField::Judging,
        weight: 1,
        min_confidence: None,
        min_matches: 2,
    },
    KeywordRule {
        name: "people nearby",
        keywords: &["Person", "Human", "People", "Crowd"],
        applies_to: RatingField::Judging,
        weight: 1,
        min_confidence: None,
        min_matches: 1,
    },
];
