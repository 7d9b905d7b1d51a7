// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scanline decomposition of flattened paths.
//!
//! Curves are flattened to line segments with [`kurbo::flatten`], open
//! subpaths are closed implicitly, and horizontal segments are discarded
//! (they never cross a scanline sampled between their endpoints). The
//! remaining edges carry a winding direction so the fill pass can apply the
//! nonzero rule, which also makes reversed subpaths act as cutouts.

use kurbo::{PathEl, Point};

/// One non-horizontal line segment of a flattened path.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Edge {
    pub(crate) y0: f64,
    pub(crate) y1: f64,
    x0: f64,
    x1: f64,
    /// +1 where the path ran downward (increasing y), -1 upward.
    dir: i32,
}

impl Edge {
    fn from_points(p0: Point, p1: Point) -> Option<Self> {
        if p0.y == p1.y {
            return None;
        }
        let dir = if p1.y > p0.y { 1 } else { -1 };
        let (top, bottom) = if dir == 1 { (p0, p1) } else { (p1, p0) };
        Some(Self {
            y0: top.y,
            y1: bottom.y,
            x0: top.x,
            x1: bottom.x,
            dir,
        })
    }

    /// X coordinate where this edge crosses the horizontal line at `y`.
    fn x_at(&self, y: f64) -> f64 {
        let t = (y - self.y0) / (self.y1 - self.y0);
        self.x0 + t * (self.x1 - self.x0)
    }
}

/// Flattens a path into edges suitable for nonzero scanline filling.
pub(crate) fn collect_edges(path: impl IntoIterator<Item = PathEl>) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut subpath_start: Option<Point> = None;
    let mut current: Option<Point> = None;

    kurbo::flatten(path, crate::TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            // Implicitly close the previous subpath.
            if let (Some(from), Some(start)) = (current, subpath_start) {
                edges.extend(Edge::from_points(from, start));
            }
            subpath_start = Some(p);
            current = Some(p);
        }
        PathEl::LineTo(p) => {
            if let Some(from) = current {
                edges.extend(Edge::from_points(from, p));
            }
            current = Some(p);
        }
        PathEl::ClosePath => {
            if let (Some(from), Some(start)) = (current, subpath_start) {
                edges.extend(Edge::from_points(from, start));
                current = Some(start);
            }
        }
        // flatten only emits MoveTo / LineTo / ClosePath.
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });

    if let (Some(from), Some(start)) = (current, subpath_start) {
        edges.extend(Edge::from_points(from, start));
    }

    edges
}

/// Computes the covered spans of one scanline and hands them to `emit`.
///
/// `yc` is the sampling y coordinate (a pixel-center line). `crossings` is
/// caller-provided scratch so the per-row allocation is reused across rows.
/// Spans are emitted left to right as half-open `[x_start, x_end)` ranges
/// where the winding number is nonzero.
pub(crate) fn spans_for_scanline(
    edges: &[Edge],
    yc: f64,
    crossings: &mut Vec<(f64, i32)>,
    mut emit: impl FnMut(f64, f64),
) {
    crossings.clear();
    for e in edges {
        if e.y0 <= yc && yc < e.y1 {
            crossings.push((e.x_at(yc), e.dir));
        }
    }
    crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut winding = 0;
    let mut span_start = 0.0;
    for &(x, dir) in crossings.iter() {
        let was_inside = winding != 0;
        winding += dir;
        let is_inside = winding != 0;
        if !was_inside && is_inside {
            span_start = x;
        } else if was_inside && !is_inside && x > span_start {
            emit(span_start, x);
        }
    }
}
