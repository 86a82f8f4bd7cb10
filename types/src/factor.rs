//! Validated quiz domain numbers.

use std::fmt;

/// Error returned when a factor selection is outside the drilled range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("factor {0} is outside {min}-{max}", min = Factor::MIN, max = Factor::MAX)]
pub struct FactorRangeError(pub u8);

/// One of the two integers whose product is the quiz question.
///
/// Invariant: the value is within `1..=12`. Construction is the only
/// validation point; out-of-range selections are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Factor(u8);

impl Factor {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    pub fn new(n: u8) -> Result<Self, FactorRangeError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(FactorRangeError(n))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// All selectable factors in ascending order, for grid rendering.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Running count of correct answers.
///
/// Seeded from configuration and incremented by exactly one on each
/// correct submission. Never decremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score(u32);

impl Score {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{Factor, FactorRangeError, Score};

    #[test]
    fn accepts_full_range() {
        for n in 1..=12 {
            assert_eq!(Factor::new(n).map(Factor::get), Ok(n));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Factor::new(0), Err(FactorRangeError(0)));
        assert_eq!(Factor::new(13), Err(FactorRangeError(13)));
        assert_eq!(Factor::new(255), Err(FactorRangeError(255)));
    }

    #[test]
    fn all_yields_twelve_ascending() {
        let all: Vec<u8> = Factor::all().map(Factor::get).collect();
        assert_eq!(all, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn score_increments_by_one() {
        let mut score = Score::new(35);
        score.increment();
        assert_eq!(score.get(), 36);
    }

    #[test]
    fn score_saturates_at_max() {
        let mut score = Score::new(u32::MAX);
        score.increment();
        assert_eq!(score.get(), u32::MAX);
    }
}
