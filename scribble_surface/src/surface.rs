// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface itself.

use kurbo::{Cap, Circle, Join, Line, Point, Stroke};
use peniko::Compose;
use scribble_history::History;
use scribble_raster::{Pixmap, Snapshot};
use scribble_stamps::{StampRole, StampShape, stamp_bounds};
use scribble_style::{
    HueCycle, PaintMode, ShapeMode, ToolState, resolve_stamp_brush, resolve_stroke,
};

use crate::event::SurfaceEvent;
use crate::gesture::StrokeGesture;

/// How many undo snapshots are retained.
pub const HISTORY_CAPACITY: usize = 20;

/// The drawing surface: pixel store, tool state, gesture handling, and undo.
///
/// Pointer positions are given in display coordinates. The surface converts
/// them to store coordinates using the store-to-display ratio *at the moment
/// of each event*; the ratio is never cached across a gesture, so layout
/// changes that arrive mid-stroke affect only subsequent points.
///
/// Until the first non-zero [`layout`](Self::layout) call there is no store,
/// and every operation is a silent no-op.
#[derive(Debug)]
pub struct DrawingSurface {
    store: Option<Pixmap>,
    display: (u32, u32),
    tool: ToolState,
    hue: HueCycle,
    history: History<Snapshot>,
    gesture: StrokeGesture,
    events: Vec<SurfaceEvent>,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface {
    /// Creates a surface with no store yet and default tool state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            display: (0, 0),
            tool: ToolState::default(),
            hue: HueCycle::new(),
            history: History::new(HISTORY_CAPACITY),
            gesture: StrokeGesture::default(),
            events: Vec::new(),
        }
    }

    /// Reports the current display size.
    ///
    /// The first call with a non-zero area fixes the store's resolution to
    /// that size, permanently. Later calls only change how coordinates and
    /// brush sizes are scaled; the store's pixel grid never changes.
    pub fn layout(&mut self, width: u32, height: u32) {
        self.display = (width, height);
        if self.store.is_none() && width > 0 && height > 0 {
            self.store = Some(Pixmap::new(width, height));
        }
    }

    /// The pixel store, if a non-zero layout has arrived.
    #[must_use]
    pub fn store(&self) -> Option<&Pixmap> {
        self.store.as_ref()
    }

    /// The most recently reported display size.
    #[must_use]
    pub fn display_size(&self) -> (u32, u32) {
        self.display
    }

    /// Read access to the tool state.
    #[must_use]
    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    /// Mutable access to the tool state. The state's own methods keep it
    /// consistent, so handing it out directly is safe.
    pub fn tool_mut(&mut self) -> &mut ToolState {
        &mut self.tool
    }

    /// The rainbow accumulator's current hue, in degrees.
    #[must_use]
    pub fn hue(&self) -> f64 {
        self.hue.current()
    }

    /// Whether an [`undo`](Self::undo) would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a stroke gesture is in progress.
    #[must_use]
    pub fn is_stroking(&self) -> bool {
        self.gesture.is_active()
    }

    /// Drains the queued notifications, in the order they occurred.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Handles pointer-down: starts a stroke, or places a stamp.
    pub fn pointer_down(&mut self, pos: Point) {
        let Some((sx, sy)) = self.scale() else {
            return;
        };
        let p = Point::new(pos.x * sx, pos.y * sy);
        let size_scale = (sx + sy) / 2.0;
        match self.tool.shape() {
            ShapeMode::Freehand => self.start_stroke(p, size_scale),
            ShapeMode::Stamp(shape) => self.place_stamp(shape, p, size_scale),
        }
    }

    /// Handles pointer-move: extends an active stroke by one segment.
    ///
    /// Each segment is rasterized immediately with round caps and joins, so
    /// the cost per event is independent of how long the stroke already is.
    /// Zero-length segments are skipped.
    pub fn pointer_move(&mut self, pos: Point) {
        if !self.gesture.is_active() {
            return;
        }
        let Some((sx, sy)) = self.scale() else {
            return;
        };
        let p = Point::new(pos.x * sx, pos.y * sy);
        let Some((from, to)) = self.gesture.advance(p) else {
            return;
        };
        let dist = (to - from).hypot();
        if dist == 0.0 {
            return;
        }
        if self.tool.mode() == PaintMode::Rainbow {
            self.hue.advance(dist);
        }
        let style = resolve_stroke(&self.tool, &self.hue);
        let width = self.tool.brush().stroke_width() * (sx + sy) / 2.0;
        let Some(store) = self.store.as_mut() else {
            return;
        };
        store.stroke_shape(
            &Line::new(from, to),
            &round_stroke(width),
            &style.brush,
            style.compose,
        );
    }

    /// Handles pointer-up: ends an active stroke.
    ///
    /// No raster mutation happens here; every segment was already painted as
    /// it arrived.
    pub fn pointer_up(&mut self) {
        if self.gesture.is_active() {
            self.gesture.end();
            self.events.push(SurfaceEvent::StrokeEnded);
        }
    }

    /// Handles pointer-cancel or pointer-leave, exactly like pointer-up.
    /// Whatever was painted so far remains; undo restores to the state
    /// captured at gesture start.
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    /// Restores the most recent snapshot, if any.
    pub fn undo(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        let Some(snapshot) = self.history.pop() else {
            return;
        };
        store.restore(&snapshot);
        self.events.push(SurfaceEvent::HistoryChanged(self.history.can_undo()));
    }

    /// Wipes the drawing and the entire history.
    ///
    /// The pre-clear state is deliberately unrecoverable: an accidental
    /// "undo of a clear" resurrecting a drawing a child meant to discard is
    /// worse than losing the redo path.
    pub fn clear(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        store.clear();
        self.history.clear();
        self.events.push(SurfaceEvent::HistoryChanged(false));
    }

    /// Store-to-display scale, or `None` when painting is impossible.
    fn scale(&self) -> Option<(f64, f64)> {
        let store = self.store.as_ref()?;
        let (dw, dh) = self.display;
        if dw == 0 || dh == 0 {
            return None;
        }
        Some((
            f64::from(store.width()) / f64::from(dw),
            f64::from(store.height()) / f64::from(dh),
        ))
    }

    fn push_snapshot(&mut self) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        self.history.push(store.snapshot());
        self.events.push(SurfaceEvent::HistoryChanged(self.history.can_undo()));
    }

    fn start_stroke(&mut self, p: Point, size_scale: f64) {
        self.push_snapshot();
        self.events.push(SurfaceEvent::StrokeStarted);
        let style = resolve_stroke(&self.tool, &self.hue);
        let radius = self.tool.brush().stroke_width() * size_scale / 2.0;
        if let Some(store) = self.store.as_mut() {
            store.fill_shape(&Circle::new(p, radius), &style.brush, style.compose);
        }
        self.gesture.start(p);
    }

    fn place_stamp(&mut self, shape: StampShape, p: Point, size_scale: f64) {
        let footprint = self.tool.brush().stamp_footprint() * size_scale;
        if footprint <= 0.0 {
            return;
        }
        self.push_snapshot();
        let bounds = stamp_bounds(p, footprint);
        let brush = resolve_stamp_brush(&self.tool, bounds);
        let Some(store) = self.store.as_mut() else {
            return;
        };
        for element in shape.elements(p, footprint) {
            match element.role {
                StampRole::Fill => store.fill_shape(&element.path, &brush, Compose::SrcOver),
                StampRole::Stroke { width } => {
                    store.stroke_shape(&element.path, &round_stroke(width), &brush, Compose::SrcOver);
                }
            }
        }
        self.events.push(SurfaceEvent::StampPlaced);
    }
}

fn round_stroke(width: f64) -> Stroke {
    Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_is_a_noop_before_layout() {
        let mut surface = DrawingSurface::new();
        surface.pointer_down(Point::new(10.0, 10.0));
        surface.pointer_move(Point::new(20.0, 20.0));
        surface.pointer_up();
        surface.undo();
        surface.clear();
        assert!(surface.store().is_none());
        assert!(!surface.can_undo());
        assert!(surface.take_events().is_empty());
    }

    #[test]
    fn zero_area_layout_does_not_allocate() {
        let mut surface = DrawingSurface::new();
        surface.layout(0, 600);
        assert!(surface.store().is_none());
        surface.layout(800, 0);
        assert!(surface.store().is_none());
        surface.layout(800, 600);
        let store = surface.store().unwrap();
        assert_eq!((store.width(), store.height()), (800, 600));
    }

    #[test]
    fn store_resolution_is_fixed_at_first_nonzero_layout() {
        let mut surface = DrawingSurface::new();
        surface.layout(800, 600);
        surface.layout(1600, 1200);
        surface.layout(320, 240);
        let store = surface.store().unwrap();
        assert_eq!((store.width(), store.height()), (800, 600));
        assert_eq!(surface.display_size(), (320, 240));
    }

    #[test]
    fn pointer_events_with_zero_display_are_noops() {
        let mut surface = DrawingSurface::new();
        surface.layout(800, 600);
        surface.layout(0, 0);
        surface.pointer_down(Point::new(10.0, 10.0));
        assert!(!surface.is_stroking());
        assert!(surface.take_events().is_empty());
    }
}
