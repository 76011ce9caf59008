//! Layer effects: `(position, layer, ..) -> color`.
//!
//! These may sample the supplied layer at any position, not just the pixel
//! being shaded.

use glam::Vec2;

use crate::math::{mix, smoothstep};
use crate::sampler::Layer;
use crate::types::{Color, TRANSPARENT};

/// Lens extent, in normalized squared distance from the touch point.
pub const LOUPE_THRESHOLD: f32 = 0.05;

/// Magnifying lens centred on `touch`.
///
/// Inside the lens the content is sampled at half the distance from the
/// centre (2× zoom), relaxing back toward 1× as the distance grows, which
/// gives the rim a slight bulge.
pub fn loupe(position: Vec2, layer: &dyn Layer, size: Vec2, touch: Vec2) -> Color {
    let uv = position / size;
    let center = touch / size;
    let delta = uv - center;

    let aspect_ratio = size.x / size.y;
    let distance = delta.x * delta.x + (delta.y * delta.y) / aspect_ratio;

    let mut total_zoom = 1.0;
    if distance < LOUPE_THRESHOLD {
        total_zoom /= 2.0;
        total_zoom += distance * 10.0;
    }

    let new_position = delta * total_zoom + center;
    layer.sample(new_position * size)
}

/// Left-to-right "cross warp" transition out.
///
/// As `amount` rises, each column (leading with the right edge) squeezes its
/// content toward the centre and fades to transparent. At 0 the layer is
/// shown unchanged; at 1 nothing is left.
pub fn crosswarp(position: Vec2, layer: &dyn Layer, size: Vec2, amount: f32) -> Color {
    let uv = position / size;
    let progress = smoothstep(0.0, 1.0, amount * 2.0 + uv.x - 1.0);
    let stretched = (uv - 0.5) * (1.0 - progress) + 0.5;
    mix(layer.sample(stretched * size), TRANSPARENT, progress)
}
