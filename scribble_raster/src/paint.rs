// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brush resolution and per-pixel paint sampling.
//!
//! [`peniko::Brush`] is the paint vocabulary shared with the style layer.
//! Before a fill pass the brush is resolved once into a representation that
//! is cheap to sample per pixel: solid colors become four bytes, linear
//! gradients become an axis projection plus a straight-sRGB stop ramp.
//! Image brushes and non-linear gradients have no consumer in this project
//! and resolve to `None` (the draw becomes a no-op).

use kurbo::{Point, Vec2};
use peniko::color::Srgb;
use peniko::{Brush, ColorStop, Gradient, GradientKind};

pub(crate) enum ResolvedPaint {
    Solid([u8; 4]),
    Linear {
        origin: Point,
        /// Gradient axis scaled so that `(p - origin) · axis` is the stop offset.
        axis: Vec2,
        stops: Vec<(f32, [f32; 4])>,
    },
}

impl ResolvedPaint {
    pub(crate) fn from_brush(brush: &Brush) -> Option<Self> {
        match brush {
            Brush::Solid(color) => {
                let rgba = color.to_rgba8();
                Some(Self::Solid([rgba.r, rgba.g, rgba.b, rgba.a]))
            }
            Brush::Gradient(gradient) => Self::from_gradient(gradient),
            Brush::Image(_) => None,
        }
    }

    fn from_gradient(gradient: &Gradient) -> Option<Self> {
        let GradientKind::Linear(position) = gradient.kind else {
            return None;
        };
        let stops: Vec<(f32, [f32; 4])> = gradient
            .stops
            .as_slice()
            .iter()
            .map(|stop: &ColorStop| {
                let color = stop.color.to_alpha_color::<Srgb>();
                (stop.offset, color.components)
            })
            .collect();
        if stops.is_empty() {
            return None;
        }
        if stops.len() == 1 {
            return Some(Self::Solid(components_to_rgba8(stops[0].1)));
        }

        let delta = position.end - position.start;
        let len2 = delta.hypot2();
        if len2 <= 0.0 {
            return Some(Self::Solid(components_to_rgba8(stops[0].1)));
        }
        Some(Self::Linear {
            origin: position.start,
            axis: delta / len2,
            stops,
        })
    }

    /// Samples the paint at a pixel center.
    ///
    /// Gradients clamp the projection to `[0, 1]` (pad extension), which is
    /// the only extend mode the drawing surface uses.
    pub(crate) fn sample(&self, x: f64, y: f64) -> [u8; 4] {
        match self {
            Self::Solid(rgba) => *rgba,
            Self::Linear {
                origin,
                axis,
                stops,
            } => {
                let p = Point::new(x, y) - *origin;
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "offset is clamped to [0, 1] before narrowing"
                )]
                let t = p.dot(*axis).clamp(0.0, 1.0) as f32;
                sample_stops(stops, t)
            }
        }
    }
}

impl core::fmt::Debug for ResolvedPaint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Solid(rgba) => f.debug_tuple("Solid").field(rgba).finish(),
            Self::Linear { origin, axis, .. } => f
                .debug_struct("Linear")
                .field("origin", origin)
                .field("axis", axis)
                .finish_non_exhaustive(),
        }
    }
}

fn sample_stops(stops: &[(f32, [f32; 4])], t: f32) -> [u8; 4] {
    let first = &stops[0];
    if t <= first.0 {
        return components_to_rgba8(first.1);
    }
    for pair in stops.windows(2) {
        let (o0, c0) = pair[0];
        let (o1, c1) = pair[1];
        if t <= o1 {
            let span = o1 - o0;
            if span <= 0.0 {
                return components_to_rgba8(c1);
            }
            let f = (t - o0) / span;
            let mut out = [0.0; 4];
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = c0[i] + (c1[i] - c0[i]) * f;
            }
            return components_to_rgba8(out);
        }
    }
    components_to_rgba8(stops[stops.len() - 1].1)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "components are clamped to [0, 1] before narrowing"
)]
fn components_to_rgba8(c: [f32; 4]) -> [u8; 4] {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [to_u8(c[0]), to_u8(c[1]), to_u8(c[2]), to_u8(c[3])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::{Color, Extend, LinearGradientPosition};

    fn two_stop_brush() -> Brush {
        let stops = [
            ColorStop::from((0.0, Color::from_rgba8(0, 0, 0, 255))),
            ColorStop::from((1.0, Color::from_rgba8(255, 255, 255, 255))),
        ];
        Brush::Gradient(Gradient {
            kind: GradientKind::Linear(LinearGradientPosition::new(
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
            )),
            extend: Extend::Pad,
            stops: stops.as_slice().into(),
            ..Gradient::default()
        })
    }

    #[test]
    fn solid_brush_resolves_to_color_bytes() {
        let paint = ResolvedPaint::from_brush(&Brush::Solid(Color::from_rgba8(1, 2, 3, 4)))
            .expect("solid brush resolves");
        assert_eq!(paint.sample(0.0, 0.0), [1, 2, 3, 4]);
    }

    #[test]
    fn linear_gradient_samples_along_axis_only() {
        let paint = ResolvedPaint::from_brush(&two_stop_brush()).expect("gradient resolves");
        assert_eq!(paint.sample(0.0, 0.0), [0, 0, 0, 255]);
        assert_eq!(paint.sample(10.0, 123.0), [255, 255, 255, 255]);
        let mid = paint.sample(5.0, -7.0);
        assert_eq!(mid[0], mid[1]);
        assert!((120..=135).contains(&mid[0]), "midpoint gray: {}", mid[0]);
    }

    #[test]
    fn gradient_pads_outside_axis_range() {
        let paint = ResolvedPaint::from_brush(&two_stop_brush()).expect("gradient resolves");
        assert_eq!(paint.sample(-100.0, 0.0), [0, 0, 0, 255]);
        assert_eq!(paint.sample(100.0, 0.0), [255, 255, 255, 255]);
    }

    #[test]
    fn image_brush_is_unsupported() {
        // Image brushes have no consumer here; resolution declines them.
        let stops: [ColorStop; 0] = [];
        let empty = Brush::Gradient(Gradient {
            kind: GradientKind::Linear(LinearGradientPosition::new(
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
            )),
            extend: Extend::Pad,
            stops: stops.as_slice().into(),
            ..Gradient::default()
        });
        assert!(ResolvedPaint::from_brush(&empty).is_none());
    }
}
