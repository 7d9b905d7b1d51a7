// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stamp shapes themselves.
//!
//! Every recipe works in units of the stamp footprint `f`, centered on the
//! tap point. Geometric shapes carry both a fill and an outline; the glyphs
//! (rabbit, bird, train) are filled silhouettes with cutout details plus a
//! few strokes that extend outside the silhouette so they stay visible under
//! a flat paint.

use kurbo::{BezPath, Point};

use crate::path::{Winding, add_circle, add_polygon, add_rect};

/// One of the fixed tap-to-place shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StampShape {
    /// Filled disc with an outline ring.
    Circle,
    /// Two crossed diagonal bars.
    Cross,
    /// Filled square with an outline.
    Square,
    /// Filled triangle with an outline.
    Triangle,
    /// Rabbit head silhouette with ears and eye cutouts.
    Rabbit,
    /// Small bird with beak, tail, and legs.
    Bird,
    /// Train car with window cutouts, wheels, and a rail.
    Train,
}

impl StampShape {
    /// Every catalog entry, in picker order.
    pub const ALL: [Self; 7] = [
        Self::Circle,
        Self::Cross,
        Self::Square,
        Self::Triangle,
        Self::Rabbit,
        Self::Bird,
        Self::Train,
    ];

    /// Produces the drawing primitives for this shape.
    ///
    /// `footprint` is the overall size of the stamp; all internal measurements
    /// are fixed fractions of it. A non-positive footprint yields no
    /// primitives.
    #[must_use]
    pub fn elements(self, center: Point, footprint: f64) -> Vec<StampElement> {
        if footprint <= 0.0 {
            return Vec::new();
        }
        match self {
            Self::Circle => circle(center, footprint),
            Self::Cross => cross(center, footprint),
            Self::Square => square(center, footprint),
            Self::Triangle => triangle(center, footprint),
            Self::Rabbit => rabbit(center, footprint),
            Self::Bird => bird(center, footprint),
            Self::Train => train(center, footprint),
        }
    }
}

/// How a single stamp primitive is rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StampRole {
    /// Fill the path interior (nonzero winding).
    Fill,
    /// Stroke the path with round caps and joins.
    Stroke {
        /// Stroke width, already scaled to the footprint.
        width: f64,
    },
}

/// One fill or stroke primitive of a stamp recipe.
#[derive(Clone, Debug, PartialEq)]
pub struct StampElement {
    /// Geometry in the same coordinate space as the tap point.
    pub path: BezPath,
    /// Whether the path is filled or stroked.
    pub role: StampRole,
}

impl StampElement {
    fn fill(path: BezPath) -> Self {
        Self {
            path,
            role: StampRole::Fill,
        }
    }

    fn stroke(path: BezPath, width: f64) -> Self {
        Self {
            path,
            role: StampRole::Stroke { width },
        }
    }
}

fn circle(c: Point, f: f64) -> Vec<StampElement> {
    let mut disc = BezPath::new();
    add_circle(&mut disc, c, 0.38 * f, Winding::Clockwise);
    let mut ring = BezPath::new();
    add_circle(&mut ring, c, 0.38 * f, Winding::Clockwise);
    vec![
        StampElement::fill(disc),
        StampElement::stroke(ring, 0.12 * f),
    ]
}

fn cross(c: Point, f: f64) -> Vec<StampElement> {
    let r = 0.30 * f;
    let mut bars = BezPath::new();
    bars.move_to((c.x - r, c.y - r));
    bars.line_to((c.x + r, c.y + r));
    bars.move_to((c.x + r, c.y - r));
    bars.line_to((c.x - r, c.y + r));
    vec![StampElement::stroke(bars, 0.14 * f)]
}

fn square(c: Point, f: f64) -> Vec<StampElement> {
    let h = 0.32 * f;
    let mut filled = BezPath::new();
    add_rect(
        &mut filled,
        c.x - h,
        c.y - h,
        c.x + h,
        c.y + h,
        Winding::Clockwise,
    );
    let outline = filled.clone();
    vec![
        StampElement::fill(filled),
        StampElement::stroke(outline, 0.10 * f),
    ]
}

fn triangle(c: Point, f: f64) -> Vec<StampElement> {
    let pts = [
        (c.x, c.y - 0.40 * f),
        (c.x + 0.40 * f, c.y + 0.34 * f),
        (c.x - 0.40 * f, c.y + 0.34 * f),
    ];
    let mut filled = BezPath::new();
    add_polygon(&mut filled, &pts);
    let outline = filled.clone();
    vec![
        StampElement::fill(filled),
        StampElement::stroke(outline, 0.10 * f),
    ]
}

fn rabbit(c: Point, f: f64) -> Vec<StampElement> {
    let mut body = BezPath::new();
    // Head.
    add_circle(
        &mut body,
        Point::new(c.x, c.y + 0.12 * f),
        0.28 * f,
        Winding::Clockwise,
    );
    // Left ear: a lobe built from two quadratics.
    body.move_to((c.x - 0.20 * f, c.y));
    body.quad_to((c.x - 0.34 * f, c.y - 0.46 * f), (c.x - 0.12 * f, c.y - 0.42 * f));
    body.quad_to((c.x - 0.02 * f, c.y - 0.18 * f), (c.x - 0.04 * f, c.y - 0.02 * f));
    body.close_path();
    // Right ear: the left ear mirrored in x, traversed in reverse so the
    // subpath keeps the outer winding.
    body.move_to((c.x + 0.04 * f, c.y - 0.02 * f));
    body.quad_to((c.x + 0.02 * f, c.y - 0.18 * f), (c.x + 0.12 * f, c.y - 0.42 * f));
    body.quad_to((c.x + 0.34 * f, c.y - 0.46 * f), (c.x + 0.20 * f, c.y));
    body.close_path();
    // Eyes as cutouts.
    add_circle(
        &mut body,
        Point::new(c.x - 0.10 * f, c.y + 0.06 * f),
        0.035 * f,
        Winding::CounterClockwise,
    );
    add_circle(
        &mut body,
        Point::new(c.x + 0.10 * f, c.y + 0.06 * f),
        0.035 * f,
        Winding::CounterClockwise,
    );
    // Whiskers poke out past the cheeks.
    let mut whiskers = BezPath::new();
    whiskers.move_to((c.x - 0.26 * f, c.y + 0.16 * f));
    whiskers.line_to((c.x - 0.42 * f, c.y + 0.13 * f));
    whiskers.move_to((c.x - 0.26 * f, c.y + 0.22 * f));
    whiskers.line_to((c.x - 0.42 * f, c.y + 0.24 * f));
    whiskers.move_to((c.x + 0.26 * f, c.y + 0.16 * f));
    whiskers.line_to((c.x + 0.42 * f, c.y + 0.13 * f));
    whiskers.move_to((c.x + 0.26 * f, c.y + 0.22 * f));
    whiskers.line_to((c.x + 0.42 * f, c.y + 0.24 * f));
    vec![
        StampElement::fill(body),
        StampElement::stroke(whiskers, 0.03 * f),
    ]
}

fn bird(c: Point, f: f64) -> Vec<StampElement> {
    let mut body = BezPath::new();
    add_circle(
        &mut body,
        Point::new(c.x - 0.04 * f, c.y + 0.04 * f),
        0.26 * f,
        Winding::Clockwise,
    );
    // Head overlapping the body; nonzero winding unions them.
    add_circle(
        &mut body,
        Point::new(c.x + 0.20 * f, c.y - 0.14 * f),
        0.15 * f,
        Winding::Clockwise,
    );
    // Eye cutout.
    add_circle(
        &mut body,
        Point::new(c.x + 0.24 * f, c.y - 0.18 * f),
        0.03 * f,
        Winding::CounterClockwise,
    );
    // Beak.
    add_polygon(
        &mut body,
        &[
            (c.x + 0.32 * f, c.y - 0.20 * f),
            (c.x + 0.44 * f, c.y - 0.13 * f),
            (c.x + 0.32 * f, c.y - 0.08 * f),
        ],
    );
    // Tail, wound the same way as the body so the overlap unions.
    add_polygon(
        &mut body,
        &[
            (c.x - 0.24 * f, c.y - 0.02 * f),
            (c.x - 0.38 * f, c.y + 0.08 * f),
            (c.x - 0.46 * f, c.y - 0.14 * f),
        ],
    );
    // Legs below the body.
    let mut legs = BezPath::new();
    legs.move_to((c.x - 0.10 * f, c.y + 0.28 * f));
    legs.line_to((c.x - 0.10 * f, c.y + 0.42 * f));
    legs.move_to((c.x + 0.04 * f, c.y + 0.28 * f));
    legs.line_to((c.x + 0.04 * f, c.y + 0.42 * f));
    vec![
        StampElement::fill(body),
        StampElement::stroke(legs, 0.035 * f),
    ]
}

fn train(c: Point, f: f64) -> Vec<StampElement> {
    let mut car = BezPath::new();
    add_rect(
        &mut car,
        c.x - 0.44 * f,
        c.y - 0.30 * f,
        c.x + 0.44 * f,
        c.y + 0.16 * f,
        Winding::Clockwise,
    );
    // Window cutouts.
    add_rect(
        &mut car,
        c.x - 0.32 * f,
        c.y - 0.22 * f,
        c.x - 0.08 * f,
        c.y - 0.02 * f,
        Winding::CounterClockwise,
    );
    add_rect(
        &mut car,
        c.x + 0.08 * f,
        c.y - 0.22 * f,
        c.x + 0.32 * f,
        c.y - 0.02 * f,
        Winding::CounterClockwise,
    );
    // Wheels.
    add_circle(
        &mut car,
        Point::new(c.x - 0.24 * f, c.y + 0.26 * f),
        0.10 * f,
        Winding::Clockwise,
    );
    add_circle(
        &mut car,
        Point::new(c.x + 0.24 * f, c.y + 0.26 * f),
        0.10 * f,
        Winding::Clockwise,
    );
    // Rail under the wheels.
    let mut rail = BezPath::new();
    rail.move_to((c.x - 0.48 * f, c.y + 0.40 * f));
    rail.line_to((c.x + 0.48 * f, c.y + 0.40 * f));
    vec![
        StampElement::fill(car),
        StampElement::stroke(rail, 0.04 * f),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;

    #[test]
    fn recipes_are_deterministic() {
        let c = Point::new(100.0, 100.0);
        for shape in StampShape::ALL {
            let a = shape.elements(c, 78.0);
            let b = shape.elements(c, 78.0);
            assert_eq!(a, b, "{shape:?} must be reproducible");
        }
    }

    #[test]
    fn every_shape_produces_primitives() {
        for shape in StampShape::ALL {
            let elements = shape.elements(Point::new(0.0, 0.0), 52.0);
            assert!(!elements.is_empty(), "{shape:?} has no primitives");
        }
    }

    #[test]
    fn non_positive_footprint_yields_nothing() {
        for shape in StampShape::ALL {
            assert!(shape.elements(Point::new(0.0, 0.0), 0.0).is_empty());
            assert!(shape.elements(Point::new(0.0, 0.0), -5.0).is_empty());
        }
    }

    #[test]
    fn circle_recipe_matches_documented_fractions() {
        let c = Point::new(400.0, 300.0);
        let elements = StampShape::Circle.elements(c, 78.0);
        assert_eq!(elements.len(), 2);

        let disc = &elements[0];
        assert_eq!(disc.role, StampRole::Fill);
        let bbox = disc.path.bounding_box();
        let radius = bbox.width() / 2.0;
        assert!((radius - 0.38 * 78.0).abs() < 0.5, "disc radius {radius}");
        assert!((bbox.center() - c).hypot() < 1e-6);

        let StampRole::Stroke { width } = elements[1].role else {
            panic!("second circle element should be the outline");
        };
        assert!((width - 0.12 * 78.0).abs() < 1e-9);
    }

    #[test]
    fn geometry_scales_linearly_with_footprint() {
        let c = Point::new(0.0, 0.0);
        for shape in StampShape::ALL {
            let small = shape.elements(c, 52.0);
            let large = shape.elements(c, 110.0);
            let ratio = 110.0 / 52.0;
            for (s, l) in small.iter().zip(&large) {
                let sb = s.path.bounding_box();
                let lb = l.path.bounding_box();
                assert!(
                    (lb.width() - sb.width() * ratio).abs() < 1e-6,
                    "{shape:?} width scales"
                );
                assert!(
                    (lb.height() - sb.height() * ratio).abs() < 1e-6,
                    "{shape:?} height scales"
                );
            }
        }
    }

    #[test]
    fn shapes_stay_inside_their_bounds_with_margin() {
        let c = Point::new(0.0, 0.0);
        for shape in StampShape::ALL {
            for element in shape.elements(c, 100.0) {
                let bbox = element.path.bounding_box();
                // Recipes are designed into the footprint square; allow the
                // stroke widths to land on top of that later.
                assert!(bbox.min_x() >= -50.0 && bbox.max_x() <= 50.0, "{shape:?}");
                assert!(bbox.min_y() >= -50.0 && bbox.max_y() <= 50.0, "{shape:?}");
            }
        }
    }
}
