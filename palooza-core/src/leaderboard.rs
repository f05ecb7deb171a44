//! Rank stored records by composite score.

use std::cmp::Ordering;

use crate::RatingRecord;

/// Number of records shown on the full leaderboard.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;
/// Number of records shown on the live, auto-refreshing leaderboard.
pub const LIVE_LEADERBOARD_LIMIT: usize = 10;

/// Order records by `overallScore`, highest first, keeping at most `limit`.
///
/// The sort is stable: records with equal scores keep their input order, so
/// callers that pass records in submission order get first-come ranking for
/// ties.
///
/// # Examples
/// ```
/// use palooza_core::{RawSignal, RngSource, compose, leaderboard::rank};
///
/// let mut rng = RngSource::seeded(1);
/// let low = compose(&RawSignal::with_ratings(1, 1, 1), "High Line", &mut rng);
/// let high = compose(&RawSignal::with_ratings(5, 5, 4), "High Line", &mut rng);
/// let ranked = rank(vec![low, high.clone()], 1);
/// assert_eq!(ranked, vec![high]);
/// ```
#[must_use]
pub fn rank(mut records: Vec<RatingRecord>, limit: usize) -> Vec<RatingRecord> {
    records.sort_by(|left, right| descending(left.overall_score(), right.overall_score()));
    records.truncate(limit);
    records
}

fn descending(left: f64, right: f64) -> Ordering {
    match (left.is_finite(), right.is_finite()) {
        (true, true) => right.total_cmp(&left),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}
