// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The one-gesture stroke state machine.

use kurbo::Point;

/// Tracks a single in-progress stroke: Idle until a pointer-down starts it,
/// Active while moves extend it, back to Idle on up or cancel.
///
/// The stored point is in *store* coordinates, captured at the moment of the
/// previous event. Only the last point is retained; segments are rasterized
/// incrementally as they arrive, so the gesture needs no path history.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct StrokeGesture {
    last: Option<Point>,
}

impl StrokeGesture {
    /// Enters the Active state at the given starting point.
    pub(crate) fn start(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Extends an Active gesture to `pos`, returning the segment from the
    /// previous point. Returns `None` while Idle.
    pub(crate) fn advance(&mut self, pos: Point) -> Option<(Point, Point)> {
        let from = self.last?;
        self.last = Some(pos);
        Some((from, pos))
    }

    /// Returns to Idle. Safe to call while already Idle.
    pub(crate) fn end(&mut self) {
        self.last = None;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let gesture = StrokeGesture::default();
        assert!(!gesture.is_active());
    }

    #[test]
    fn advance_while_idle_yields_nothing() {
        let mut gesture = StrokeGesture::default();
        assert_eq!(gesture.advance(Point::new(1.0, 1.0)), None);
        assert!(!gesture.is_active());
    }

    #[test]
    fn segments_chain_from_the_last_point() {
        let mut gesture = StrokeGesture::default();
        gesture.start(Point::new(0.0, 0.0));
        assert!(gesture.is_active());

        let (from, to) = gesture.advance(Point::new(3.0, 4.0)).unwrap();
        assert_eq!(from, Point::new(0.0, 0.0));
        assert_eq!(to, Point::new(3.0, 4.0));

        let (from, to) = gesture.advance(Point::new(6.0, 8.0)).unwrap();
        assert_eq!(from, Point::new(3.0, 4.0));
        assert_eq!(to, Point::new(6.0, 8.0));
    }

    #[test]
    fn end_returns_to_idle() {
        let mut gesture = StrokeGesture::default();
        gesture.start(Point::new(0.0, 0.0));
        gesture.end();
        assert!(!gesture.is_active());
        assert_eq!(gesture.advance(Point::new(1.0, 1.0)), None);
        // Ending twice is harmless.
        gesture.end();
    }
}
