// SPDX-License-Identifier: MPL-2.0
//! Scroll-linked offset for the hero backdrop.

use crate::ui::state::ParallaxCoefficient;

/// Last observed page scroll and the backdrop shift derived from it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parallax {
    scroll_y: f32,
    coefficient: ParallaxCoefficient,
}

impl Parallax {
    #[must_use]
    pub fn new(coefficient: ParallaxCoefficient) -> Self {
        Self {
            scroll_y: 0.0,
            coefficient,
        }
    }

    /// Records a raw vertical scroll offset, in logical pixels.
    pub fn observe(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
    }

    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Downward shift of the backdrop.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.scroll_y * self.coefficient.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_before_scrolling() {
        let parallax = Parallax::new(ParallaxCoefficient::new(0.15));
        assert_eq!(parallax.offset(), 0.0);
    }

    #[test]
    fn offset_scales_scroll_by_coefficient() {
        let mut parallax = Parallax::new(ParallaxCoefficient::new(0.15));
        parallax.observe(200.0);
        assert!((parallax.offset() - 30.0).abs() < f32::EPSILON * 100.0);
    }

    #[test]
    fn latest_observation_wins() {
        let mut parallax = Parallax::new(ParallaxCoefficient::new(0.5));
        parallax.observe(400.0);
        parallax.observe(100.0);
        assert_eq!(parallax.scroll_y(), 100.0);
        assert_eq!(parallax.offset(), 50.0);
    }

    #[test]
    fn zero_coefficient_disables_shift() {
        let mut parallax = Parallax::new(ParallaxCoefficient::new(0.0));
        parallax.observe(1_000.0);
        assert_eq!(parallax.offset(), 0.0);
    }
}
