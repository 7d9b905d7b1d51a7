// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution from tool state to concrete paint.

use kurbo::Rect;
use peniko::{Brush, Color, ColorStop, ColorStops, Compose, Extend, Gradient};

use crate::color::hsl;
use crate::hue::HueCycle;
use crate::tool::{PaintMode, ToolState};

/// Hue stops, in degrees, of the fixed stamp rainbow. Spaced unevenly to
/// favor the hues children actually name as rainbow bands.
const STAMP_RAINBOW_HUES: [f64; 7] = [0.0, 35.0, 60.0, 130.0, 210.0, 265.0, 320.0];

/// The concrete paint for one stroke segment or stroke start.
#[derive(Clone, Debug)]
pub struct ResolvedStroke {
    /// What to paint with.
    pub brush: Brush,
    /// How it combines with existing pixels.
    pub compose: Compose,
}

/// Resolves the paint for a stroke segment at the current hue position.
///
/// The eraser wins over everything else: it resolves to an opaque brush
/// combined with [`Compose::DestOut`], so stroked pixels become transparent
/// rather than white. Rainbow resolves to a fully saturated, half-lightness
/// flat color at the accumulator's current hue.
#[must_use]
pub fn resolve_stroke(state: &ToolState, hue: &HueCycle) -> ResolvedStroke {
    match state.mode() {
        PaintMode::Erase => ResolvedStroke {
            brush: Brush::Solid(Color::from_rgba8(0, 0, 0, 255)),
            compose: Compose::DestOut,
        },
        PaintMode::Rainbow => ResolvedStroke {
            brush: Brush::Solid(hsl(hue.current(), 1.0, 0.5)),
            compose: Compose::SrcOver,
        },
        PaintMode::Solid => ResolvedStroke {
            brush: Brush::Solid(state.color()),
            compose: Compose::SrcOver,
        },
    }
}

/// Resolves the paint for a stamp designed into `bounds`.
///
/// Stamps always composite source-over; in rainbow mode the paint is a fixed
/// seven-stop gradient running left to right across the stamp's bounds, a
/// static rainbow rather than a hue that moves along a line. Eraser mode
/// never reaches here (the tool-state policy forbids it), so it falls back
/// to the flat color.
#[must_use]
pub fn resolve_stamp_brush(state: &ToolState, bounds: Rect) -> Brush {
    match state.mode() {
        PaintMode::Rainbow => Brush::Gradient(rainbow_gradient(bounds)),
        PaintMode::Solid | PaintMode::Erase => Brush::Solid(state.color()),
    }
}

fn rainbow_gradient(bounds: Rect) -> Gradient {
    let count = STAMP_RAINBOW_HUES.len();
    let stops: Vec<ColorStop> = STAMP_RAINBOW_HUES
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            #[expect(
                clippy::cast_precision_loss,
                reason = "stop indices are tiny integers"
            )]
            let offset = i as f32 / (count - 1) as f32;
            ColorStop::from((offset, hsl(h, 1.0, 0.5)))
        })
        .collect();
    let y = bounds.center().y;
    let kind = peniko::GradientKind::Linear(peniko::LinearGradientPosition::new(
        (bounds.min_x(), y),
        (bounds.max_x(), y),
    ));
    Gradient {
        kind,
        extend: Extend::Pad,
        stops: ColorStops::from(stops.as_slice()),
        ..Gradient::default()
    }
}
