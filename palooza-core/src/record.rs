//! Final rating output handed to persistence and serialisation.

use serde::{Deserialize, Serialize};

use crate::Rating;
use crate::composer::{MAX_SCORE, MIN_SCORE, round_score};

/// Description stored for records that arrive without one.
pub const FALLBACK_DESCRIPTION: &str = "This pigeon's got attitude!";

/// A completed, immutable rating.
///
/// Records serialise to a flat JSON object using the camel-case field names
/// stored by the gallery and leaderboard (`attitudeRating`, `strutRating`,
/// `touristJudgingRating`, `overallScore`, `bonusPoints`, `funDescription`).
/// Deserialising re-applies the range invariants, so stored documents that
/// were edited by hand still rank sensibly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredRecord")]
pub struct RatingRecord {
    attitude_rating: Rating,
    strut_rating: Rating,
    tourist_judging_rating: Rating,
    overall_score: f64,
    bonus_points: u32,
    fun_description: String,
}

impl RatingRecord {
    pub(crate) const fn new(
        ratings: [Rating; 3],
        overall_score: f64,
        bonus_points: u32,
        fun_description: String,
    ) -> Self {
        let [attitude_rating, strut_rating, tourist_judging_rating] = ratings;
        Self {
            attitude_rating,
            strut_rating,
            tourist_judging_rating,
            overall_score,
            bonus_points,
            fun_description,
        }
    }

    /// Swagger and confidence, `1..=5`.
    #[must_use]
    pub const fn attitude_rating(&self) -> Rating {
        self.attitude_rating
    }

    /// Walk and posture, `1..=5`.
    #[must_use]
    pub const fn strut_rating(&self) -> Rating {
        self.strut_rating
    }

    /// Tourist judging factor, `1..=5`.
    #[must_use]
    pub const fn tourist_judging_rating(&self) -> Rating {
        self.tourist_judging_rating
    }

    /// Composite score in `1.0..=5.0`, rounded to two decimals.
    #[must_use]
    pub const fn overall_score(&self) -> f64 {
        self.overall_score
    }

    /// Landmark bonus awarded to the submission.
    #[must_use]
    pub const fn bonus_points(&self) -> u32 {
        self.bonus_points
    }

    /// Human-readable description; never empty.
    #[must_use]
    pub fn fun_description(&self) -> &str {
        &self.fun_description
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    attitude_rating: Rating,
    strut_rating: Rating,
    tourist_judging_rating: Rating,
    overall_score: f64,
    #[serde(default)]
    bonus_points: u32,
    #[serde(default)]
    fun_description: String,
}

impl From<StoredRecord> for RatingRecord {
    fn from(stored: StoredRecord) -> Self {
        let description = if stored.fun_description.trim().is_empty() {
            FALLBACK_DESCRIPTION.to_owned()
        } else {
            stored.fun_description
        };
        let score = if stored.overall_score.is_finite() {
            round_score(stored.overall_score.clamp(MIN_SCORE, MAX_SCORE))
        } else {
            MIN_SCORE
        };
        Self::new(
            [
                stored.attitude_rating,
                stored.strut_rating,
                stored.tourist_judging_rating,
            ],
            score,
            stored.bonus_points,
            description,
        )
    }
}
