//! Unvalidated rating signals emitted by producers.

/// Intermediate rating data before normalisation.
///
/// Producers fill whichever fields they can. Any field may be absent, and
/// ratings may fall outside `1..=5`; the composer clamps and substitutes
/// neutral defaults.
///
/// # Examples
/// ```
/// use palooza_core::RawSignal;
///
/// let signal = RawSignal::with_ratings(5, 9, -1).with_description("NYC royalty");
/// assert_eq!(signal.strut, Some(9));
/// assert!(RawSignal::absent().attitude.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawSignal {
    /// Swagger and confidence.
    pub attitude: Option<i64>,
    /// Walk and posture.
    pub strut: Option<i64>,
    /// How hard the bird appears to judge tourists.
    pub judging: Option<i64>,
    /// Candidate description text.
    pub description: Option<String>,
}

impl RawSignal {
    /// A signal with every field absent.
    ///
    /// Callers substitute this when an upstream analysis fails, so composition
    /// still succeeds with neutral defaults.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            attitude: None,
            strut: None,
            judging: None,
            description: None,
        }
    }

    /// A signal carrying all three ratings and no description.
    #[must_use]
    pub const fn with_ratings(attitude: i64, strut: i64, judging: i64) -> Self {
        Self {
            attitude: Some(attitude),
            strut: Some(strut),
            judging: Some(judging),
            description: None,
        }
    }

    /// Attach a candidate description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Report whether no field carries a value.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.attitude.is_none()
            && self.strut.is_none()
            && self.judging.is_none()
            && self.description.is_none()
    }
}
