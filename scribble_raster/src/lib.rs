// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scribble Raster: the authoritative pixel store and CPU rasterizer.
//!
//! This crate owns the drawing itself: a fixed-resolution, straight-alpha
//! RGBA8 pixel buffer ([`Pixmap`]) plus the rasterization primitives that
//! mutate it. Geometry comes in as [`kurbo`] shapes, paint comes in as a
//! [`peniko::Brush`] (solid colors and linear gradients), and new pixels are
//! combined with existing content using a [`peniko::Compose`] mode:
//!
//! - [`Compose::SrcOver`] for normal painting, and
//! - [`Compose::DestOut`] for erasing, which removes coverage rather than
//!   painting a background color, so erased regions read as transparent.
//!
//! # Position in the stack
//!
//! Higher layers (the drawing surface, gesture handling, tool state) decide
//! *what* to draw; this crate decides *which pixels change*. It has no notion
//! of pointer events, history, or display scaling. The pixel grid allocated
//! at construction time never changes size; callers that need a resizable
//! on-screen view scale at presentation time instead of resampling the store.
//!
//! Filling uses a non-antialiased nonzero-winding scanline pass sampled at
//! pixel centers, which keeps results exactly reproducible across runs and
//! platforms. Stroking expands the path to a fill outline with
//! [`kurbo::stroke`] and then fills it.

mod composite;
mod fill;
mod paint;
mod pixmap;

pub use peniko::Compose;
pub use pixmap::{Pixmap, Snapshot};

/// Flattening tolerance used when converting curves to line segments.
pub(crate) const TOLERANCE: f64 = 0.1;
