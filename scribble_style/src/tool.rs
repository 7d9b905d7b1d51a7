// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tool state and the policy that keeps it consistent.

use peniko::Color;
use scribble_stamps::StampShape;

/// Enumerated brush sizes. There is no continuous size control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BrushClass {
    /// 4 logical units wide.
    Thin,
    /// 8 logical units wide.
    #[default]
    Normal,
    /// 14 logical units wide.
    Thick,
}

impl BrushClass {
    /// Freehand stroke width in logical units.
    #[must_use]
    pub fn stroke_width(self) -> f64 {
        match self {
            Self::Thin => 4.0,
            Self::Normal => 8.0,
            Self::Thick => 14.0,
        }
    }

    /// Overall stamp size in logical units.
    #[must_use]
    pub fn stamp_footprint(self) -> f64 {
        match self {
            Self::Thin => 52.0,
            Self::Normal => 78.0,
            Self::Thick => 110.0,
        }
    }
}

/// What a stroke deposits. Exactly one mode is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaintMode {
    /// Paint with the currently selected flat color.
    #[default]
    Solid,
    /// Remove pixels, revealing transparency.
    Erase,
    /// Paint with a hue that cycles along the stroke.
    Rainbow,
}

/// Whether pointer-down starts a stroke or places a single stamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeMode {
    /// Continuous freehand drawing.
    #[default]
    Freehand,
    /// One tap places one complete shape.
    Stamp(StampShape),
}

/// The complete tool state read by the drawing surface on each input event.
///
/// Mutations go through the `select_*` methods, which enforce the one rule
/// the fields cannot express on their own: the eraser never combines with
/// stamp placement. Selecting either one deselects the other.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolState {
    color: Color,
    brush: BrushClass,
    mode: PaintMode,
    shape: ShapeMode,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(0, 0, 0, 255),
            brush: BrushClass::default(),
            mode: PaintMode::default(),
            shape: ShapeMode::default(),
        }
    }
}

impl ToolState {
    /// The active flat color. Ignored while erasing or in rainbow mode.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The active brush-size class.
    #[must_use]
    pub fn brush(&self) -> BrushClass {
        self.brush
    }

    /// The active paint mode.
    #[must_use]
    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    /// Freehand or stamp placement.
    #[must_use]
    pub fn shape(&self) -> ShapeMode {
        self.shape
    }

    /// Picks a flat color, leaving any other mode.
    pub fn select_color(&mut self, color: Color) {
        self.color = color;
        self.mode = PaintMode::Solid;
    }

    /// Switches to the hue-cycling brush.
    pub fn select_rainbow(&mut self) {
        self.mode = PaintMode::Rainbow;
    }

    /// Toggles the eraser. Turning it on leaves stamp mode, since stamps
    /// always paint.
    pub fn toggle_eraser(&mut self) {
        if self.mode == PaintMode::Erase {
            self.mode = PaintMode::Solid;
        } else {
            self.mode = PaintMode::Erase;
            self.shape = ShapeMode::Freehand;
        }
    }

    /// Picks a stamp shape, turning the eraser off if it was on.
    pub fn select_stamp(&mut self, stamp: StampShape) {
        self.shape = ShapeMode::Stamp(stamp);
        if self.mode == PaintMode::Erase {
            self.mode = PaintMode::Solid;
        }
    }

    /// Returns to freehand drawing.
    pub fn select_freehand(&mut self) {
        self.shape = ShapeMode::Freehand;
    }

    /// Changes the brush-size class.
    pub fn select_brush(&mut self, brush: BrushClass) {
        self.brush = brush;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_solid_black_freehand() {
        let state = ToolState::default();
        assert_eq!(state.mode(), PaintMode::Solid);
        assert_eq!(state.shape(), ShapeMode::Freehand);
        assert_eq!(state.brush(), BrushClass::Normal);
        assert_eq!(state.color(), Color::from_rgba8(0, 0, 0, 255));
    }

    #[test]
    fn size_tables() {
        assert_eq!(BrushClass::Thin.stroke_width(), 4.0);
        assert_eq!(BrushClass::Normal.stroke_width(), 8.0);
        assert_eq!(BrushClass::Thick.stroke_width(), 14.0);
        assert_eq!(BrushClass::Thin.stamp_footprint(), 52.0);
        assert_eq!(BrushClass::Normal.stamp_footprint(), 78.0);
        assert_eq!(BrushClass::Thick.stamp_footprint(), 110.0);
    }

    #[test]
    fn selecting_color_leaves_eraser_and_rainbow() {
        let mut state = ToolState::default();
        state.toggle_eraser();
        state.select_color(Color::from_rgba8(255, 0, 0, 255));
        assert_eq!(state.mode(), PaintMode::Solid);

        state.select_rainbow();
        state.select_color(Color::from_rgba8(0, 255, 0, 255));
        assert_eq!(state.mode(), PaintMode::Solid);
    }

    #[test]
    fn eraser_toggles() {
        let mut state = ToolState::default();
        state.toggle_eraser();
        assert_eq!(state.mode(), PaintMode::Erase);
        state.toggle_eraser();
        assert_eq!(state.mode(), PaintMode::Solid);
    }

    #[test]
    fn eraser_and_stamp_are_mutually_exclusive() {
        let mut state = ToolState::default();
        state.select_stamp(StampShape::Rabbit);
        state.toggle_eraser();
        assert_eq!(state.mode(), PaintMode::Erase);
        assert_eq!(state.shape(), ShapeMode::Freehand);

        state.select_stamp(StampShape::Train);
        assert_eq!(state.shape(), ShapeMode::Stamp(StampShape::Train));
        assert_eq!(state.mode(), PaintMode::Solid);
    }

    #[test]
    fn rainbow_combines_with_stamps() {
        let mut state = ToolState::default();
        state.select_rainbow();
        state.select_stamp(StampShape::Circle);
        assert_eq!(state.mode(), PaintMode::Rainbow);
        assert_eq!(state.shape(), ShapeMode::Stamp(StampShape::Circle));
    }
}
