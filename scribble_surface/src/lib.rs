// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scribble Surface: the drawing surface that ties the engine together.
//!
//! [`DrawingSurface`] owns the fixed-resolution pixel store, the bounded
//! undo history, the active tool state, and the one-gesture stroke state
//! machine. The UI feeds it pointer events in *display* coordinates and
//! layout sizes; the surface converts to store coordinates with the current
//! store-to-display ratio on every event, so resizes mid-gesture cannot
//! skew a stroke that has already been rasterized.
//!
//! The store's resolution is fixed at the first non-zero layout and never
//! changes afterwards. Display resizes only change how [`Presenter`]
//! stretches the store onto the screen; prior drawing is never resampled.
//!
//! Everything here is synchronous and single-threaded. Callers on
//! multi-threaded platforms must confine a surface to one thread or queue.

mod event;
mod gesture;
mod present;
mod surface;

pub use event::SurfaceEvent;
pub use present::Presenter;
pub use surface::{DrawingSurface, HISTORY_CAPACITY};
