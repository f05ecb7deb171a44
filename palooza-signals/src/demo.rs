//! Demo producer used when no analysis backend is configured.

use palooza_core::{RandomSource, RawSignal};

const DEMO_LOW: i64 = 3;
const DEMO_HIGH: i64 = 5;

/// Draw a flattering random signal.
///
/// Each rating is drawn uniformly from `3..=5`, in the order attitude,
/// strut, judging. The description is left empty so a template is chosen.
///
/// # Examples
/// ```
/// use palooza_core::RngSource;
/// use palooza_signals::demo_signal;
///
/// let signal = demo_signal(&mut RngSource::seeded(7));
/// assert!(signal.attitude.is_some_and(|value| (3..=5).contains(&value)));
/// assert!(signal.description.is_none());
/// ```
pub fn demo_signal(rng: &mut dyn RandomSource) -> RawSignal {
    let attitude = rng.in_range(DEMO_LOW, DEMO_HIGH);
    let strut = rng.in_range(DEMO_LOW, DEMO_HIGH);
    let judging = rng.in_range(DEMO_LOW, DEMO_HIGH);
    RawSignal::with_ratings(attitude, strut, judging)
}
