//! Difficulty knob: the chance of ignoring the optimal move.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Probability in `[0, 1]` that the engine plays a uniformly random legal
/// move instead of its optimal pick.
///
/// `0.0` always plays optimally; `1.0` always plays randomly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Randomness(f64);

impl Randomness {
    /// Never deviate from optimal play.
    pub const NONE: Self = Self(0.0);
    /// Always play a random legal move.
    pub const ALWAYS: Self = Self(1.0);
    /// Default difficulty: 30% random play.
    pub const DEFAULT: Self = Self(0.3);

    /// Creates a threshold.
    ///
    /// # Errors
    ///
    /// Rejects values outside `[0, 1]`, including NaN.
    #[track_caller]
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::new(format!(
                "randomness must be within [0, 1], got {}",
                value
            )))
        }
    }

    /// The threshold as a probability.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Randomness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Randomness {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Randomness> for f64 {
    fn from(randomness: Randomness) -> Self {
        randomness.0
    }
}

impl std::fmt::Display for Randomness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        assert_eq!(Randomness::new(0.0).unwrap(), Randomness::NONE);
        assert_eq!(Randomness::new(1.0).unwrap(), Randomness::ALWAYS);
        assert_eq!(Randomness::default().value(), 0.3);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Randomness::new(-0.01).is_err());
        assert!(Randomness::new(1.5).is_err());
        assert!(Randomness::new(f64::NAN).is_err());
        assert!(Randomness::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_names_value() {
        let err = Randomness::new(2.0).unwrap_err();
        assert!(err.message.contains("got 2"));
    }
}
