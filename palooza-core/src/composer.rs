//! Compose raw signals into final rating records.
//!
//! The composer is the only entry point that produces a
//! [`RatingRecord`](crate::RatingRecord). It clamps the three sub-ratings,
//! blends them with the landmark bonus, rounds the composite score and
//! synthesises the description. It is total: every [`RawSignal`] and every
//! landmark key yields a well-formed record.
//!
//! # Score blend
//!
//! ```text
//! base    = (attitude + strut + judging) / 3
//! overall = min(5.0, base + bonus / 100)
//! ```
//!
//! The bonus is scaled down by two orders of magnitude so it nudges the
//! composite rather than dominating it. `base` is already at least `1.0`, so
//! no floor clamp is applied. The result is rounded to two decimals with
//! [`round_score`].

use crate::description::synthesize;
use crate::landmark::{bonus_for, is_known};
use crate::{RandomSource, Rating, RatingRecord, RawSignal, RngSource};

/// Lowest composite score a record can carry.
pub const MIN_SCORE: f64 = 1.0;
/// Highest composite score a record can carry.
pub const MAX_SCORE: f64 = 5.0;

/// Compose a signal and landmark key into a [`RatingRecord`].
///
/// # Examples
/// ```
/// use palooza_core::{RawSignal, RngSource, compose};
///
/// let mut rng = RngSource::seeded(0);
/// let record = compose(&RawSignal::absent(), "Unknown Place", &mut rng);
/// assert_eq!(record.overall_score(), 3.1);
/// assert_eq!(record.bonus_points(), 10);
/// ```
pub fn compose(signal: &RawSignal, landmark_key: &str, rng: &mut dyn RandomSource) -> RatingRecord {
    let ratings = [
        Rating::or_neutral(signal.attitude),
        Rating::or_neutral(signal.strut),
        Rating::or_neutral(signal.judging),
    ];
    if !is_known(landmark_key) {
        log::debug!("landmark {landmark_key:?} is not in the bonus table; using default bonus");
    }
    let bonus = bonus_for(landmark_key);
    let overall = round_score(blend_score(ratings, bonus));
    let description = synthesize(signal.description.as_deref(), landmark_key, rng);
    RatingRecord::new(ratings, overall, bonus, description)
}

#[expect(
    clippy::float_arithmetic,
    reason = "the composite score is a mean plus a scaled bonus"
)]
fn blend_score(ratings: [Rating; 3], bonus: u32) -> f64 {
    let total: u8 = ratings.iter().map(|rating| rating.get()).sum();
    let base = f64::from(total) / 3.0;
    (base + f64::from(bonus) / 100.0).min(MAX_SCORE)
}

/// Round a score to two decimal places, half away from zero.
///
/// The value is scaled by 100 and rounded with [`f64::round`], so exact
/// binary ties such as `4.625` round up to `4.63`. Values whose decimal
/// spelling ends in 5 but whose binary form lies just below the tie (for
/// example `1.005`) round down. `4.995` scales to exactly `499.5` and so
/// rounds up to `5.0`.
///
/// # Examples
/// ```
/// use palooza_core::composer::round_score;
///
/// assert_eq!(round_score(4.625), 4.63);
/// assert_eq!(round_score(10.0 / 3.0), 3.33);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to hundredths scales by 100"
)]
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// A composer that owns its random source.
///
/// Useful for request handlers that compose many records with one generator.
///
/// # Examples
/// ```
/// use palooza_core::{RatingComposer, RawSignal};
///
/// let mut first = RatingComposer::seeded(9);
/// let mut second = RatingComposer::seeded(9);
/// let signal = RawSignal::with_ratings(4, 4, 4).with_description("meh");
/// assert_eq!(
///     first.compose(&signal, "High Line"),
///     second.compose(&signal, "High Line"),
/// );
/// ```
pub struct RatingComposer {
    rng: Box<dyn RandomSource + Send>,
}

impl RatingComposer {
    /// Build a composer around any random source.
    #[must_use]
    pub fn new(rng: impl RandomSource + Send + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// Build a reproducible composer from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed))
    }

    /// Build a composer seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(RngSource::from_entropy())
    }

    /// Compose a record using the owned random source.
    pub fn compose(&mut self, signal: &RawSignal, landmark_key: &str) -> RatingRecord {
        compose(signal, landmark_key, self.rng.as_mut())
    }

    /// Borrow the owned random source, e.g. to drive a signal producer.
    pub fn rng(&mut self) -> &mut dyn RandomSource {
        self.rng.as_mut()
    }
}

impl std::fmt::Debug for RatingComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingComposer").finish_non_exhaustive()
    }
}
