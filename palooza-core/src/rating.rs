//! Bounded sub-rating values.
//!
//! Every sub-rating in a [`RatingRecord`](crate::RatingRecord) is an integer
//! in `1..=5`. [`Rating`] enforces that range at construction so downstream
//! code never observes an out-of-range value.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

const LOWEST: i64 = 1;
const HIGHEST: i64 = 5;

/// A sub-rating clamped to the inclusive range `1..=5`.
///
/// # Examples
/// ```
/// use palooza_core::Rating;
///
/// assert_eq!(Rating::clamped(9), Rating::MAX);
/// assert_eq!(Rating::clamped(-3), Rating::MIN);
/// assert_eq!(Rating::clamped(4).get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Lowest representable rating.
    pub const MIN: Self = Self(1);
    /// Highest representable rating.
    pub const MAX: Self = Self(5);
    /// Neutral default used whenever a signal carries no value.
    pub const NEUTRAL: Self = Self(3);

    /// Clamp an arbitrary integer to the nearest bound of `1..=5`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        u8::try_from(value.clamp(LOWEST, HIGHEST)).map_or(Self::NEUTRAL, Self)
    }

    /// Clamp an optional value, substituting [`Rating::NEUTRAL`] when absent.
    #[must_use]
    pub fn or_neutral(value: Option<i64>) -> Self {
        value.map_or(Self::NEUTRAL, Self::clamped)
    }

    /// Apply `delta` and clamp the result.
    #[must_use]
    pub fn adjusted(self, delta: i64) -> Self {
        Self::clamped(self.as_i64().saturating_add(delta))
    }

    /// Return the rating as a `u8`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Return the rating widened to `i64`.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self::clamped)
    }
}
