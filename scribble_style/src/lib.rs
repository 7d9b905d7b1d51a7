// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scribble Style: tool state and paint-style resolution.
//!
//! The UI owns a small, flat [`ToolState`] (active color, brush-size class,
//! paint mode, freehand-vs-stamp). This crate defines that state together
//! with the mutation policy that keeps it consistent (the eraser and stamp
//! placement are mutually exclusive), and resolves it into concrete paint:
//! a [`peniko::Brush`] plus a [`peniko::Compose`] mode.
//!
//! The rainbow mode is stateful in exactly one way: a [`HueCycle`]
//! accumulator that advances with distance drawn, so the color progression
//! along a stroke depends on path length rather than wall-clock time or
//! event rate. Rainbow stamps ignore the accumulator and use a fixed
//! seven-stop gradient instead.

mod color;
mod hue;
mod resolve;
mod tool;

pub use hue::HueCycle;
pub use resolve::{ResolvedStroke, resolve_stamp_brush, resolve_stroke};
pub use tool::{BrushClass, PaintMode, ShapeMode, ToolState};
