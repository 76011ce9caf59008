//! Color effects: `(position, color, ..) -> color`.
//!
//! None of these read neighbouring pixels.

use glam::{Vec2, Vec3};

use crate::math::{fract, manhattan_distance};
use crate::types::{Color, TRANSPARENT};

/// Side length, in pixels, of the cells `circles` tiles the canvas into.
pub const CIRCLE_CELL_SIZE: f32 = 20.0;

/// Number of wave lines `sinebow` accumulates.
pub const SINEBOW_LINES: usize = 10;

/// Returns the input color unchanged.
pub fn passthrough(_position: Vec2, color: Color) -> Color {
    color
}

/// Opaque red, keeping the original alpha.
pub fn recolor(_position: Vec2, color: Color) -> Color {
    Color::new(1.0, 0.0, 0.0, color.w)
}

/// Red with the alpha channel flipped, so transparent areas become visible.
pub fn invert_alpha(_position: Vec2, color: Color) -> Color {
    Color::new(1.0, 0.0, 0.0, 1.0 - color.w)
}

/// Red = x/y, blue = y/x.
///
/// On the x = 0 or y = 0 axes this divides by zero and the resulting
/// inf/NaN is returned as-is.
pub fn gradient(position: Vec2, color: Color) -> Color {
    Color::new(position.x / position.y, 0.0, position.y / position.x, color.w)
}

/// Hue wheel around the origin, rotating with `time`.
pub fn rainbow(position: Vec2, color: Color, time: f32) -> Color {
    let angle = position.y.atan2(position.x) + time;
    Color::new(angle.sin(), (angle + 2.0).sin(), (angle + 4.0).sin(), color.w)
}

/// Dissolve-in transition. The canvas is tiled into `CIRCLE_CELL_SIZE` cells;
/// a pixel is revealed once its distance from its cell centre plus its
/// normalized x and y drops below `amount * 3`, so the reveal sweeps from the
/// top-left corner as `amount` goes 0 → 1.
pub fn circles(position: Vec2, color: Color, size: Vec2, amount: f32) -> Color {
    let uv = position / size;
    let cell = fract(position / CIRCLE_CELL_SIZE);
    let distance = manhattan_distance(cell, Vec2::splat(0.5));

    if distance + uv.x + uv.y < amount * 3.0 {
        color
    } else {
        TRANSPARENT
    }
}

/// Ten glowing sine lines drifting over time, each with its own phase and hue.
///
/// Coordinates are mapped to -1..1 across the width and the x axis is
/// corrected for aspect ratio. Each line contributes `1 / |distance|`, so a
/// pixel sitting exactly on a line yields an infinite channel.
pub fn sinebow(position: Vec2, color: Color, size: Vec2, time: f32) -> Color {
    let aspect_ratio = size.x / size.y;
    let mut uv = (position / size.x) * 2.0 - 1.0;
    uv.x /= aspect_ratio;

    let mut wave = (uv.x + time).sin();
    wave *= wave * 50.0;

    let mut wave_color = Vec3::ZERO;
    for line in 0..SINEBOW_LINES {
        let i = line as f32;
        let luma = (1.0 / (100.0 * uv.y + wave)).abs();

        // Each line rides its own wave, offset from the previous one.
        let y = (uv.x * time.sin() + i * 0.2 + time).sin();
        uv.y += 0.05 * y;

        let hue = Vec3::new(
            (i * 0.3 + time).sin() * 0.5 + 0.5,
            (i * 0.3 + 2.0 + (time * 0.3).sin() * 2.0).sin() * 0.5 + 0.5,
            (i * 0.3 + 4.0).sin() * 0.5 + 0.5,
        );
        wave_color += hue * luma;
    }

    wave_color.extend(1.0) * color.w
}
