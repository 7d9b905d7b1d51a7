// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Shape, Stroke, StrokeOpts};
use peniko::{Brush, Compose};

use crate::TOLERANCE;
use crate::composite::composite_span;
use crate::fill::{Edge, collect_edges, spans_for_scanline};
use crate::paint::ResolvedPaint;

/// A fixed-resolution, straight-alpha RGBA8 pixel buffer.
///
/// The buffer starts fully transparent and its dimensions never change after
/// construction. All drawing goes through [`Pixmap::fill_shape`] and
/// [`Pixmap::stroke_shape`]; whole-buffer state is captured and restored via
/// [`Pixmap::snapshot`] / [`Pixmap::restore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Creates a fully transparent pixmap of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel data, row-major RGBA8 with straight alpha.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the RGBA components of one pixel.
    ///
    /// Out-of-bounds coordinates return transparent black.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Captures an immutable copy of the current pixel content.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            data: self.data.clone().into_boxed_slice(),
        }
    }

    /// Restores pixel content from a snapshot, bit-exactly.
    ///
    /// A snapshot with mismatched dimensions is ignored; snapshots are only
    /// ever taken from the store they are restored into, so a mismatch means
    /// the caller mixed up buffers.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.width != self.width || snapshot.height != self.height {
            return;
        }
        self.data.copy_from_slice(&snapshot.data);
    }

    /// Fills the interior of a shape (nonzero winding) with the given brush.
    ///
    /// Only solid-color and linear-gradient brushes produce output; other
    /// brush kinds are ignored. Degenerate shapes are no-ops.
    pub fn fill_shape(&mut self, shape: &impl Shape, brush: &Brush, compose: Compose) {
        let Some(paint) = ResolvedPaint::from_brush(brush) else {
            return;
        };
        let edges = collect_edges(shape.path_elements(TOLERANCE));
        self.fill_edges(&edges, &paint, compose);
    }

    /// Strokes the outline of a shape with the given stroke style and brush.
    ///
    /// The stroke is expanded to a fill outline via [`kurbo::stroke`], so
    /// caps, joins, and self-intersections behave like a painted line rather
    /// than a union of rectangles. Zero and negative widths are no-ops.
    pub fn stroke_shape(
        &mut self,
        shape: &impl Shape,
        style: &Stroke,
        brush: &Brush,
        compose: Compose,
    ) {
        if style.width <= 0.0 {
            return;
        }
        let outline = kurbo::stroke(
            shape.path_elements(TOLERANCE),
            style,
            &StrokeOpts::default(),
            TOLERANCE,
        );
        self.fill_shape(&outline, brush, compose);
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "row and column bounds are clamped to the buffer before narrowing"
    )]
    fn fill_edges(&mut self, edges: &[Edge], paint: &ResolvedPaint, compose: Compose) {
        if edges.is_empty() || self.width == 0 || self.height == 0 {
            return;
        }

        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for e in edges {
            y_min = y_min.min(e.y0.min(e.y1));
            y_max = y_max.max(e.y0.max(e.y1));
        }
        let row_start = (y_min - 0.5).ceil().max(0.0) as u32;
        let row_end = (y_max - 0.5).ceil().min(f64::from(self.height)) as u32;

        let mut crossings = Vec::new();
        for y in row_start..row_end {
            let yc = f64::from(y) + 0.5;
            spans_for_scanline(edges, yc, &mut crossings, |x_start, x_end| {
                // Pixel x is covered when its center x + 0.5 lies in [x_start, x_end).
                let px0 = (x_start - 0.5).ceil().max(0.0) as u32;
                let px1 = (x_end - 0.5).ceil().min(f64::from(self.width)) as u32;
                if px0 < px1 {
                    let row = y as usize * self.width as usize;
                    let span = &mut self.data[(row + px0 as usize) * 4..(row + px1 as usize) * 4];
                    composite_span(span, px0, y, paint, compose);
                }
            });
        }
    }
}

/// An immutable pixel-content capture of a [`Pixmap`] at a point in time.
///
/// Snapshots are owned values; nothing aliases or mutates them after capture,
/// which is what makes snapshot-based undo bit-exact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    data: Box<[u8]>,
}

impl Snapshot {
    /// Width in pixels of the captured content.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels of the captured content.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Captured pixel data, row-major RGBA8 with straight alpha.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
