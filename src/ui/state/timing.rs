// SPDX-License-Identifier: MPL-2.0
//! Timing domain types for the hero effects.
//!
//! Each newtype clamps the value read from `settings.toml` into its valid
//! range, so the subscriptions never see a zero or absurd period.

use crate::config::{
    DEFAULT_HEADING_DELAY_MS, DEFAULT_PARALLAX_COEFFICIENT, DEFAULT_ROTATION_INTERVAL_MS,
    MAX_PARALLAX_COEFFICIENT, MAX_REVEAL_DELAY_MS, MAX_ROTATION_INTERVAL_MS,
    MIN_PARALLAX_COEFFICIENT, MIN_REVEAL_DELAY_MS, MIN_ROTATION_INTERVAL_MS,
};
use std::time::Duration;

/// Delay between two carousel images, in milliseconds.
///
/// # Example
///
/// ```
/// use summer_school::ui::state::RotationInterval;
///
/// let interval = RotationInterval::new(5_000);
/// assert_eq!(interval.value(), 5_000);
///
/// // Values outside range are clamped
/// assert_eq!(RotationInterval::new(1).value(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationInterval(u64);

impl RotationInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value.clamp(MIN_ROTATION_INTERVAL_MS, MAX_ROTATION_INTERVAL_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RotationInterval {
    fn default() -> Self {
        Self(DEFAULT_ROTATION_INTERVAL_MS)
    }
}

/// Per-character delay of a typewriter reveal, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealDelay(u64);

impl RevealDelay {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value.clamp(MIN_REVEAL_DELAY_MS, MAX_REVEAL_DELAY_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RevealDelay {
    fn default() -> Self {
        Self(DEFAULT_HEADING_DELAY_MS)
    }
}

/// Fraction of the page scroll applied to the hero backdrop.
///
/// Non-finite inputs fall back to the default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxCoefficient(f32);

impl ParallaxCoefficient {
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_PARALLAX_COEFFICIENT, MAX_PARALLAX_COEFFICIENT))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ParallaxCoefficient {
    fn default() -> Self {
        Self(DEFAULT_PARALLAX_COEFFICIENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_interval_clamps_to_valid_range() {
        assert_eq!(RotationInterval::new(0).value(), MIN_ROTATION_INTERVAL_MS);
        assert_eq!(
            RotationInterval::new(u64::MAX).value(),
            MAX_ROTATION_INTERVAL_MS
        );
        assert_eq!(RotationInterval::new(7_000).value(), 7_000);
    }

    #[test]
    fn rotation_interval_default_is_five_seconds() {
        assert_eq!(
            RotationInterval::default().as_duration(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn reveal_delay_clamps_to_valid_range() {
        assert_eq!(RevealDelay::new(0).value(), MIN_REVEAL_DELAY_MS);
        assert_eq!(RevealDelay::new(60_000).value(), MAX_REVEAL_DELAY_MS);
        assert_eq!(RevealDelay::new(80).as_duration(), Duration::from_millis(80));
    }

    #[test]
    fn parallax_coefficient_clamps_and_rejects_nan() {
        assert_eq!(ParallaxCoefficient::new(-1.0).value(), MIN_PARALLAX_COEFFICIENT);
        assert_eq!(ParallaxCoefficient::new(3.0).value(), MAX_PARALLAX_COEFFICIENT);
        assert_eq!(
            ParallaxCoefficient::new(f32::NAN).value(),
            DEFAULT_PARALLAX_COEFFICIENT
        );
        assert_eq!(ParallaxCoefficient::new(0.15).value(), 0.15);
    }
}
