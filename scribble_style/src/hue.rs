// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rainbow brush's distance-driven hue accumulator.

/// A hue in degrees that advances with distance drawn.
///
/// The accumulator gains half a degree per logical unit of path length and
/// wraps modulo 360. Because it depends only on cumulative distance, a
/// stroke of a given length always ends on the same hue no matter how many
/// move events delivered it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HueCycle {
    hue: f64,
}

impl HueCycle {
    /// Degrees of hue gained per logical unit of distance.
    const DEGREES_PER_UNIT: f64 = 0.5;

    /// Starts the cycle at hue zero (red).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current hue in `[0, 360)`.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.hue
    }

    /// Advances the hue by the given path distance. Negative or non-finite
    /// distances are ignored.
    pub fn advance(&mut self, distance: f64) {
        if distance.is_finite() && distance > 0.0 {
            self.hue = (self.hue + distance * Self::DEGREES_PER_UNIT).rem_euclid(360.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(HueCycle::new().current(), 0.0);
    }

    #[test]
    fn advances_half_degree_per_unit() {
        let mut hue = HueCycle::new();
        hue.advance(100.0);
        assert!((hue.current() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn wraps_modulo_360() {
        let mut hue = HueCycle::new();
        hue.advance(800.0); // 400 degrees
        assert!((hue.current() - 40.0).abs() < 1e-9);
        assert!(hue.current() < 360.0);
    }

    #[test]
    fn depends_on_cumulative_distance_only() {
        let mut many_small = HueCycle::new();
        for _ in 0..1000 {
            many_small.advance(0.25);
        }
        let mut one_big = HueCycle::new();
        one_big.advance(250.0);
        assert!((many_small.current() - one_big.current()).abs() < 1e-6);
    }

    #[test]
    fn ignores_nonsense_distances() {
        let mut hue = HueCycle::new();
        hue.advance(-5.0);
        hue.advance(f64::NAN);
        hue.advance(f64::INFINITY);
        assert_eq!(hue.current(), 0.0);
    }
}
