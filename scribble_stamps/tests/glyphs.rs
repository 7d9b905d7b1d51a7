// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raster-level checks for the multi-part glyph recipes.
//!
//! The creature glyphs rely on nonzero winding to union overlapping
//! subpaths and to cut interior details. These tests render each glyph
//! with a solid brush and check coverage where subpaths overlap, which
//! the unit tests on the recipes alone cannot see.

use kurbo::{Cap, Join, Point, Stroke};
use peniko::{Brush, Color, Compose};
use scribble_raster::Pixmap;
use scribble_stamps::{StampRole, StampShape};

fn rasterize(shape: StampShape, center: Point, footprint: f64) -> Pixmap {
    let mut pixmap = Pixmap::new(200, 200);
    let brush = Brush::Solid(Color::from_rgba8(0, 0, 0, 255));
    for element in shape.elements(center, footprint) {
        match element.role {
            StampRole::Fill => pixmap.fill_shape(&element.path, &brush, Compose::SrcOver),
            StampRole::Stroke { width } => pixmap.stroke_shape(
                &element.path,
                &Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round),
                &brush,
                Compose::SrcOver,
            ),
        }
    }
    pixmap
}

#[test]
fn rabbit_ears_union_with_the_head() {
    let pixmap = rasterize(StampShape::Rabbit, Point::new(100.0, 100.0), 100.0);

    // (90, 90) sits inside both the left ear and the head; (109, 90) is its
    // mirror image inside the right ear. Both must be covered, and equally.
    let left = pixmap.pixel(90, 90)[3];
    let right = pixmap.pixel(109, 90)[3];
    assert_eq!(left, 255, "left ear base must be opaque");
    assert_eq!(right, 255, "right ear base must be opaque");
    assert_eq!(left, right);

    // The eye cutouts stay transparent inside the filled head.
    assert_eq!(pixmap.pixel(90, 106)[3], 0, "left eye cutout");
    assert_eq!(pixmap.pixel(110, 106)[3], 0, "right eye cutout");
}

#[test]
fn bird_tail_and_beak_union_with_the_body() {
    let pixmap = rasterize(StampShape::Bird, Point::new(100.0, 100.0), 100.0);

    // Inside both the tail triangle and the body disc.
    assert_eq!(pixmap.pixel(71, 100)[3], 255, "tail/body junction");
    // Inside the tail only.
    assert_eq!(pixmap.pixel(62, 95)[3], 255, "tail interior");
    // Inside both the beak triangle and the head disc.
    assert_eq!(pixmap.pixel(133, 86)[3], 255, "beak/head junction");
    // The eye cutout stays transparent inside the head.
    assert_eq!(pixmap.pixel(124, 82)[3], 0, "eye cutout");
}
