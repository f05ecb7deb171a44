//! Deterministic `RandomSource` used by unit and behaviour tests.

use crate::RandomSource;

/// Replays a fixed list of draws.
///
/// Each call consumes the next value, cycling back to the start when the list
/// is exhausted. An empty list always yields zero. Values are mapped into the
/// requested range by saturation rather than modulo, so a test can state the
/// exact outcome it wants:
/// - [`coin`](RandomSource::coin) returns `1` for any non-zero value;
/// - [`index`](RandomSource::index) returns the value capped at `len - 1`;
/// - [`in_range`](RandomSource::in_range) returns `low + value` capped at
///   `high`.
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    values: Vec<u64>,
    position: usize,
    draws: usize,
}

impl FixedSequence {
    /// Create a sequence from the values to replay.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self {
            values: values.into_iter().collect(),
            position: 0,
            draws: 0,
        }
    }

    /// A sequence that always draws zero: no jitter, first template.
    #[must_use]
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Number of draws taken so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    fn next_value(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        let Some(&value) = self.values.get(self.position) else {
            self.position = 0;
            return self.values.first().map_or(0, |&first| {
                self.position = 1;
                first
            });
        };
        self.position = self.position.saturating_add(1);
        value
    }
}

impl RandomSource for FixedSequence {
    fn coin(&mut self) -> u8 {
        u8::from(self.next_value() != 0)
    }

    fn index(&mut self, len: usize) -> usize {
        let value = usize::try_from(self.next_value()).unwrap_or(usize::MAX);
        value.min(len.saturating_sub(1))
    }

    fn in_range(&mut self, low: i64, high: i64) -> i64 {
        let value = i64::try_from(self.next_value()).unwrap_or(i64::MAX);
        low.saturating_add(value).min(high).max(low)
    }
}
