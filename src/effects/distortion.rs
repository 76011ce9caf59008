//! Distortion effects: `(position, ..) -> position`.
//!
//! The returned position is where the host samples the original content for
//! this pixel. These never see color.

use glam::Vec2;

/// Vertical ripple with a fixed 5px amplitude. x is never touched.
pub fn wave(mut position: Vec2, time: f32) -> Vec2 {
    position.y += (time * 5.0 + position.y / 20.0).sin() * 5.0;
    position
}

/// Same ripple as `wave`, but the amplitude grows from 0 at the left edge to
/// 10px at the right edge.
pub fn relative_wave(mut position: Vec2, time: f32, size: Vec2) -> Vec2 {
    let distance = position / size;
    position.y += (time * 5.0 + position.y / 20.0).sin() * distance.x * 10.0;
    position
}
