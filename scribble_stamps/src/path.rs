// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation-controlled path primitives for stamp recipes.
//!
//! Recipes need explicit winding control so that inner subpaths (eyes,
//! windows) cancel the outer winding and render as holes. Coordinates are
//! y-down, so "clockwise" here matches what a viewer sees on screen.

use kurbo::{BezPath, Point};

/// Cubic Bézier approximation constant for a quarter circle.
const KAPPA: f64 = 0.552_284_749_831;

/// Subpath orientation in y-down screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Winding {
    /// Outer contours.
    Clockwise,
    /// Holes: cancels an enclosing clockwise contour under the nonzero rule.
    CounterClockwise,
}

/// Appends a full circle to `path` with the requested orientation.
pub(crate) fn add_circle(path: &mut BezPath, center: Point, radius: f64, winding: Winding) {
    let (cx, cy) = (center.x, center.y);
    let r = radius;
    let k = KAPPA * r;
    path.move_to((cx + r, cy));
    match winding {
        Winding::Clockwise => {
            // Right -> bottom -> left -> top, increasing y first.
            path.curve_to((cx + r, cy + k), (cx + k, cy + r), (cx, cy + r));
            path.curve_to((cx - k, cy + r), (cx - r, cy + k), (cx - r, cy));
            path.curve_to((cx - r, cy - k), (cx - k, cy - r), (cx, cy - r));
            path.curve_to((cx + k, cy - r), (cx + r, cy - k), (cx + r, cy));
        }
        Winding::CounterClockwise => {
            path.curve_to((cx + r, cy - k), (cx + k, cy - r), (cx, cy - r));
            path.curve_to((cx - k, cy - r), (cx - r, cy - k), (cx - r, cy));
            path.curve_to((cx - r, cy + k), (cx - k, cy + r), (cx, cy + r));
            path.curve_to((cx + k, cy + r), (cx + r, cy + k), (cx + r, cy));
        }
    }
    path.close_path();
}

/// Appends an axis-aligned rectangle with the requested orientation.
pub(crate) fn add_rect(path: &mut BezPath, x0: f64, y0: f64, x1: f64, y1: f64, winding: Winding) {
    path.move_to((x0, y0));
    match winding {
        Winding::Clockwise => {
            path.line_to((x1, y0));
            path.line_to((x1, y1));
            path.line_to((x0, y1));
        }
        Winding::CounterClockwise => {
            path.line_to((x0, y1));
            path.line_to((x1, y1));
            path.line_to((x1, y0));
        }
    }
    path.close_path();
}

/// Appends a closed polygon in the given vertex order.
pub(crate) fn add_polygon(path: &mut BezPath, points: &[(f64, f64)]) {
    let Some(&first) = points.first() else {
        return;
    };
    path.move_to(first);
    for &p in &points[1..] {
        path.line_to(p);
    }
    path.close_path();
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;

    fn signed_area(path: &BezPath) -> f64 {
        path.area()
    }

    #[test]
    fn circle_windings_have_opposite_signed_areas() {
        let mut cw = BezPath::new();
        add_circle(&mut cw, Point::new(0.0, 0.0), 10.0, Winding::Clockwise);
        let mut ccw = BezPath::new();
        add_circle(&mut ccw, Point::new(0.0, 0.0), 10.0, Winding::CounterClockwise);

        let a_cw = signed_area(&cw);
        let a_ccw = signed_area(&ccw);
        assert!(a_cw * a_ccw < 0.0, "orientations differ: {a_cw} vs {a_ccw}");
        let expected = core::f64::consts::PI * 100.0;
        assert!((a_cw.abs() - expected).abs() / expected < 0.01);
    }

    #[test]
    fn rect_windings_have_opposite_signed_areas() {
        let mut cw = BezPath::new();
        add_rect(&mut cw, 0.0, 0.0, 4.0, 2.0, Winding::Clockwise);
        let mut ccw = BezPath::new();
        add_rect(&mut ccw, 0.0, 0.0, 4.0, 2.0, Winding::CounterClockwise);
        assert!(signed_area(&cw) * signed_area(&ccw) < 0.0);
        assert!((signed_area(&cw).abs() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn polygon_is_closed() {
        let mut p = BezPath::new();
        add_polygon(&mut p, &[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
        assert!((signed_area(&p).abs() - 6.0).abs() < 1e-9);
    }
}
