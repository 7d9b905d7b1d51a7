// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pixel combination of new paint with existing buffer content.
//!
//! Only the two compose modes the drawing surface needs are implemented:
//! `SrcOver` (normal painting) and `DestOut` (erasing). Anything else is
//! treated as `SrcOver`, which keeps the API a plain [`peniko::Compose`]
//! without inventing a parallel enum.

use peniko::Compose;

use crate::paint::ResolvedPaint;

/// Composites one horizontal run of pixels starting at `(x0, y)`.
///
/// `span` is the RGBA8 byte range of the run; `x0`/`y` locate it so gradient
/// paints can be sampled at each pixel center.
pub(crate) fn composite_span(
    span: &mut [u8],
    x0: u32,
    y: u32,
    paint: &ResolvedPaint,
    compose: Compose,
) {
    let yc = f64::from(y) + 0.5;
    for (i, px) in span.chunks_exact_mut(4).enumerate() {
        let xc = f64::from(x0) + i as f64 + 0.5;
        let src = paint.sample(xc, yc);
        match compose {
            Compose::DestOut => dest_out(px, src[3]),
            _ => src_over(px, src),
        }
    }
}

/// Standard source-over blending on straight-alpha RGBA8.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "blend results are rounded within [0, 255] before narrowing"
)]
fn src_over(dst: &mut [u8], src: [u8; 4]) {
    let sa = f32::from(src[3]) / 255.0;
    if sa <= 0.0 {
        return;
    }
    if src[3] == 255 {
        dst.copy_from_slice(&src);
        return;
    }
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        dst.fill(0);
        return;
    }
    for c in 0..3 {
        let sc = f32::from(src[c]);
        let dc = f32::from(dst[c]);
        dst[c] = ((sc * sa + dc * da * (1.0 - sa)) / out_a).round() as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Destination-out: reduce existing coverage by the source alpha.
///
/// Fully erased pixels are reset to all zero bytes so that equal content
/// always means equal buffers.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "scaled alpha is rounded within [0, 255] before narrowing"
)]
fn dest_out(dst: &mut [u8], src_alpha: u8) {
    if src_alpha == 0 {
        return;
    }
    if src_alpha == 255 {
        dst.fill(0);
        return;
    }
    let keep = 1.0 - f32::from(src_alpha) / 255.0;
    let out_a = (f32::from(dst[3]) * keep).round() as u8;
    if out_a == 0 {
        dst.fill(0);
    } else {
        dst[3] = out_a;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn src_over_opaque_replaces() {
        let mut dst = [1, 2, 3, 4];
        src_over(&mut dst, [9, 8, 7, 255]);
        assert_eq!(dst, [9, 8, 7, 255]);
    }

    #[test]
    fn src_over_transparent_source_keeps_destination() {
        let mut dst = [10, 20, 30, 40];
        src_over(&mut dst, [200, 200, 200, 0]);
        assert_eq!(dst, [10, 20, 30, 40]);
    }

    #[test]
    fn src_over_onto_empty_takes_source() {
        let mut dst = [0, 0, 0, 0];
        src_over(&mut dst, [100, 50, 25, 128]);
        assert_eq!(dst, [100, 50, 25, 128]);
    }

    #[test]
    fn dest_out_full_alpha_zeroes_pixel() {
        let mut dst = [10, 20, 30, 200];
        dest_out(&mut dst, 255);
        assert_eq!(dst, [0, 0, 0, 0]);
    }

    #[test]
    fn dest_out_partial_alpha_scales_coverage() {
        let mut dst = [10, 20, 30, 200];
        dest_out(&mut dst, 128);
        assert_eq!(dst[3], 100);
        assert_eq!(&dst[..3], &[10, 20, 30]);
    }

    #[test]
    fn dest_out_zero_alpha_is_noop() {
        let mut dst = [10, 20, 30, 200];
        dest_out(&mut dst, 0);
        assert_eq!(dst, [10, 20, 30, 200]);
    }
}
