// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scribble Stamps: the fixed catalog of tap-to-place vector shapes.
//!
//! A stamp is a single, complete shape placed at one point in one atomic
//! action. The catalog is closed by design: seven shapes, each a pure
//! function from `(center, footprint)` to a list of fill/stroke drawing
//! primitives ([`StampElement`]). Recipes are deterministic; two invocations
//! with identical inputs produce identical geometry. All measurements are
//! fixed fractions of the footprint, so a stamp looks the same at every
//! brush-size class, just bigger or smaller.
//!
//! Stamps carry no paint of their own. Interior details that must stay
//! visible under any single paint (eyes, windows) are expressed as
//! reversed-winding subpaths, which a nonzero-winding fill renders as
//! transparent cutouts.

mod catalog;
mod path;

pub use catalog::{StampElement, StampRole, StampShape};

use kurbo::{Point, Rect};

/// The square bounding box a stamp of the given footprint is designed into.
///
/// Useful for callers that span a gradient across the stamp.
#[must_use]
pub fn stamp_bounds(center: Point, footprint: f64) -> Rect {
    let half = footprint / 2.0;
    Rect::new(
        center.x - half,
        center.y - half,
        center.x + half,
        center.y + half,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_centered_and_sized() {
        let b = stamp_bounds(Point::new(400.0, 300.0), 78.0);
        assert_eq!(b.center(), Point::new(400.0, 300.0));
        assert_eq!(b.width(), 78.0);
        assert_eq!(b.height(), 78.0);
    }
}
