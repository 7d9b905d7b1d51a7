// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications emitted by the surface for the embedding UI.

/// An outbound notification.
///
/// These fire in the order the underlying actions happened and are drained
/// with [`DrawingSurface::take_events`](crate::DrawingSurface::take_events).
/// They carry gesture timing and undo availability only; raster content is
/// never exposed through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The undo history changed; the payload is whether undo is possible now.
    HistoryChanged(bool),
    /// A freehand stroke gesture began.
    StrokeStarted,
    /// A freehand stroke gesture ended (pointer up, cancel, or leave).
    StrokeEnded,
    /// A stamp was placed.
    StampPlaced,
}
