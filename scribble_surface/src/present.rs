// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation of the store onto a variable-size display.

use peniko::Color;
use scribble_raster::Pixmap;

/// Stretches the fixed-resolution store onto a display-sized frame.
///
/// Presentation is nearest-neighbor sampling at display pixel centers over
/// an opaque background color (white by default). The store itself is never
/// resampled or mutated; calling this again after a resize just stretches
/// the same pixels differently.
///
/// Frames are packed `0xAARRGGBB`, one `u32` per display pixel in row-major
/// order, the layout framebuffer windows expect.
#[derive(Clone, Copy, Debug)]
pub struct Presenter {
    background: Color,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(Color::from_rgba8(255, 255, 255, 255))
    }
}

impl Presenter {
    /// Creates a presenter compositing over the given background.
    #[must_use]
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    /// The background the store is composited over.
    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Renders `store` stretched to `width`x`height` into `frame`.
    ///
    /// A zero-area display or a frame shorter than `width * height` pixels
    /// makes this a no-op.
    pub fn present_into(&self, store: &Pixmap, frame: &mut [u32], width: u32, height: u32) {
        let (dw, dh) = (width as usize, height as usize);
        if dw == 0 || dh == 0 || frame.len() < dw * dh {
            return;
        }
        let bg = self.background.to_rgba8();
        let sw = store.width();
        let sh = store.height();
        for dy in 0..dh {
            let sy = nearest(dy, dh, sh);
            let row = &mut frame[dy * dw..(dy + 1) * dw];
            for (dx, out) in row.iter_mut().enumerate() {
                let sx = nearest(dx, dw, sw);
                let px = store.pixel(sx, sy);
                let a = u32::from(px[3]);
                let inv = 255 - a;
                let r = (u32::from(px[0]) * a + u32::from(bg.r) * inv + 127) / 255;
                let g = (u32::from(px[1]) * a + u32::from(bg.g) * inv + 127) / 255;
                let b = (u32::from(px[2]) * a + u32::from(bg.b) * inv + 127) / 255;
                *out = 0xFF00_0000 | (r << 16) | (g << 8) | b;
            }
        }
    }
}

/// Maps display index `d` of `dn` onto a source axis of length `sn` by
/// sampling at the display pixel's center.
fn nearest(d: usize, dn: usize, sn: u32) -> u32 {
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "axis lengths are display dimensions, far below f64 precision limits"
    )]
    let s = ((d as f64 + 0.5) * f64::from(sn) / dn as f64) as u32;
    s.min(sn.saturating_sub(1))
}
