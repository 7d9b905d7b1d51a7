// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HSL to sRGB conversion for the rainbow paints.

use peniko::Color;

/// Converts an HSL color to an opaque sRGB [`Color`].
///
/// `hue` is in degrees (any finite value; wrapped into `[0, 360)`),
/// `saturation` and `lightness` in `[0, 1]`.
pub(crate) fn hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
    let h = hue.rem_euclid(360.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_u8 = |v: f64| {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is clamped to [0, 255] before the cast"
        )]
        let byte = ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        byte
    };
    Color::from_rgba8(to_u8(r), to_u8(g), to_u8(b), 255)
}
