//! Signals derived from image-recognition annotations.
//!
//! The vision service returns weighted labels, localised objects and detected
//! faces. Ratings start neutral, are nudged by the keyword [`RULES`] and then
//! receive a small symmetric jitter so two similar photos rarely tie. Every
//! adjustment is clamped to `1..=5` as it is applied.
//!
//! Objects and faces are carried for diagnostics only; no rule reads them.

use palooza_core::{RandomSource, Rating, RawSignal};
use serde::{Deserialize, Deserializer, Serialize};

use crate::rules::{RULES, RatingField};

const SUMMARY_LABELS: usize = 5;
const SUMMARY_OBJECTS: usize = 3;

/// A single weighted annotation.
///
/// Deserialises from the vision service shapes `{ "description", "score" }`
/// (labels) and `{ "name", "score" }` (objects).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Label or object name.
    #[serde(alias = "description", alias = "name")]
    pub text: String,
    /// Confidence in `0.0..=1.0`; missing scores read as zero.
    #[serde(alias = "score", default)]
    pub confidence: f32,
}

impl Annotation {
    /// Build an annotation from its text and confidence.
    #[must_use]
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// The annotations returned for one image.
///
/// Each list may be missing or `null` in the payload; both read as empty.
///
/// # Examples
/// ```
/// use palooza_signals::AnnotationSet;
///
/// let payload = r#"{
///     "labelAnnotations": [{ "description": "Pigeon", "score": 0.97 }],
///     "localizedObjectAnnotations": null,
///     "faceAnnotations": [{}, {}]
/// }"#;
/// let set: AnnotationSet = serde_json::from_str(payload).expect("valid payload");
/// assert_eq!(set.labels.len(), 1);
/// assert!(set.objects.is_empty());
/// assert_eq!(set.faces, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnnotationSet {
    /// Whole-image labels.
    #[serde(rename = "labelAnnotations", default, deserialize_with = "nullable_list")]
    pub labels: Vec<Annotation>,
    /// Localised objects.
    #[serde(
        rename = "localizedObjectAnnotations",
        default,
        deserialize_with = "nullable_list"
    )]
    pub objects: Vec<Annotation>,
    /// Number of detected faces.
    #[serde(rename = "faceAnnotations", default, deserialize_with = "face_count")]
    pub faces: usize,
}

impl AnnotationSet {
    /// Build a set from labels alone.
    #[must_use]
    pub const fn from_labels(labels: Vec<Annotation>) -> Self {
        Self {
            labels,
            objects: Vec::new(),
            faces: 0,
        }
    }

    /// Summarise the leading annotations for diagnostics.
    #[must_use]
    pub fn summary(&self) -> AnnotationSummary {
        AnnotationSummary {
            labels: self.labels.iter().take(SUMMARY_LABELS).cloned().collect(),
            objects: self.objects.iter().take(SUMMARY_OBJECTS).cloned().collect(),
            faces: self.faces,
        }
    }
}

/// The first few labels and objects of an [`AnnotationSet`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationSummary {
    /// Up to five labels, in payload order.
    pub labels: Vec<Annotation>,
    /// Up to three objects, in payload order.
    pub objects: Vec<Annotation>,
    /// Number of detected faces.
    pub faces: usize,
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<Annotation>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Annotation>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn face_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<serde::de::IgnoredAny>>::deserialize(deserializer)
        .map(|faces| faces.as_ref().map_or(0, Vec::len))
}

/// Derive a signal from annotations.
///
/// Ratings start at the neutral `3`. Each rule in [`RULES`] that fires adds
/// its weight to its rating. Each rating then receives jitter drawn as two
/// coins, the first added and the second subtracted, in the order attitude,
/// strut, judging. The description is left empty for the synthesiser.
///
/// # Examples
/// ```
/// use palooza_core::test_support::FixedSequence;
/// use palooza_signals::{Annotation, AnnotationSet, from_annotations};
///
/// let set = AnnotationSet::from_labels(vec![Annotation::new("Walking", 0.6)]);
/// let signal = from_annotations(&set, &mut FixedSequence::zeros());
/// assert_eq!(signal.strut, Some(4));
/// assert_eq!(signal.attitude, Some(3));
/// assert!(signal.description.is_none());
/// ```
pub fn from_annotations(set: &AnnotationSet, rng: &mut dyn RandomSource) -> RawSignal {
    let mut ratings = HeuristicRatings::default();
    for rule in &RULES {
        if rule.fires(&set.labels) {
            log::debug!("annotation rule '{}' fired", rule.name);
            ratings.adjust(rule.applies_to, rule.weight);
        }
    }
    for field in RatingField::ALL {
        ratings.adjust(field, jitter(rng));
    }
    ratings.into_signal()
}

fn jitter(rng: &mut dyn RandomSource) -> i64 {
    let up = i64::from(rng.coin());
    let down = i64::from(rng.coin());
    up - down
}

#[derive(Debug, Default)]
struct HeuristicRatings {
    attitude: Rating,
    strut: Rating,
    judging: Rating,
}

impl HeuristicRatings {
    fn adjust(&mut self, field: RatingField, delta: i64) {
        let slot = match field {
            RatingField::Attitude => &mut self.attitude,
            RatingField::Strut => &mut self.strut,
            RatingField::Judging => &mut self.judging,
        };
        *slot = slot.adjusted(delta);
    }

    fn into_signal(self) -> RawSignal {
        RawSignal::with_ratings(
            self.attitude.as_i64(),
            self.strut.as_i64(),
            self.judging.as_i64(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palooza_core::test_support::FixedSequence;
    use rstest::rstest;

    fn labels(texts: &[(&str, f32)]) -> AnnotationSet {
        AnnotationSet::from_labels(
            texts
                .iter()
                .map(|&(text, confidence)| Annotation::new(text, confidence))
                .collect(),
        )
    }

    #[rstest]
    fn empty_annotations_stay_neutral_without_jitter() {
        let signal = from_annotations(&AnnotationSet::default(), &mut FixedSequence::zeros());
        assert_eq!(signal, RawSignal::with_ratings(3, 3, 3));
    }

    #[rstest]
    fn judging_can_rise_by_two() {
        let set = labels(&[("Building", 0.7), ("Street", 0.6), ("Crowd", 0.5)]);
        let signal = from_annotations(&set, &mut FixedSequence::zeros());
        assert_eq!(signal.judging, Some(5));
    }

    #[rstest]
    fn every_rule_fires_together() {
        let set = labels(&[
            ("Bird", 0.98),
            ("Beak", 0.92),
            ("Feather", 0.9),
            ("Standing", 0.4),
            ("City", 0.8),
            ("Concrete", 0.7),
            ("People", 0.6),
        ]);
        let signal = from_annotations(&set, &mut FixedSequence::zeros());
        assert_eq!(signal, RawSignal::with_ratings(4, 4, 5));
    }

    #[rstest]
    #[case([1, 0, 0, 0, 0, 1], [4, 3, 2])]
    #[case([1, 1, 0, 0, 1, 1], [3, 3, 3])]
    #[case([0, 1, 1, 0, 0, 0], [2, 4, 3])]
    fn jitter_is_drawn_per_rating_in_order(#[case] draws: [u64; 6], #[case] expected: [i64; 3]) {
        let signal = from_annotations(&AnnotationSet::default(), &mut FixedSequence::new(draws));
        let [attitude, strut, judging] = expected;
        assert_eq!(signal, RawSignal::with_ratings(attitude, strut, judging));
    }

    #[rstest]
    fn jitter_cannot_push_past_the_ceiling() {
        let set = labels(&[("Sidewalk", 0.9), ("Urban", 0.9), ("Human", 0.9)]);
        let signal = from_annotations(&set, &mut FixedSequence::new([0, 0, 0, 0, 1, 0]));
        assert_eq!(signal.judging, Some(5));
    }

    #[rstest]
    fn objects_and_faces_do_not_affect_ratings() {
        let set = AnnotationSet {
            labels: Vec::new(),
            objects: vec![Annotation::new("Person", 0.99), Annotation::new("Bird", 0.99)],
            faces: 4,
        };
        let signal = from_annotations(&set, &mut FixedSequence::zeros());
        assert_eq!(signal, RawSignal::with_ratings(3, 3, 3));
    }

    #[rstest]
    fn summary_keeps_leading_entries() {
        let set = AnnotationSet {
            labels: (0..8).map(|i| Annotation::new(format!("label {i}"), 0.5)).collect(),
            objects: (0..5).map(|i| Annotation::new(format!("object {i}"), 0.5)).collect(),
            faces: 1,
        };
        let summary = set.summary();
        assert_eq!(summary.labels.len(), 5);
        assert_eq!(summary.objects.len(), 3);
        assert_eq!(summary.labels.first().map(|a| a.text.as_str()), Some("label 0"));
        assert_eq!(summary.faces, 1);
    }

    #[rstest]
    fn deserialises_vision_payload_shapes() {
        let payload = r#"{
            "labelAnnotations": [{ "description": "Pigeon", "score": 0.97, "mid": "/m/0h23m" }],
            "localizedObjectAnnotations": [{ "name": "Bird", "score": 0.88 }]
        }"#;
        let set: AnnotationSet = serde_json::from_str(payload).expect("decode annotations");
        assert_eq!(set.labels, vec![Annotation::new("Pigeon", 0.97)]);
        assert_eq!(set.objects, vec![Annotation::new("Bird", 0.88)]);
        assert_eq!(set.faces, 0);
    }
}
