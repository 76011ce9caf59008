// Small shader-library helpers shared by several effects. Semantics follow the
// usual GPU shading-language builtins so effect code reads like shader code.

use glam::{Vec2, Vec4};

/// `x - floor(x)`, component-wise. Always in [0,1) for finite input.
#[inline]
pub fn fract(v: Vec2) -> Vec2 {
    v - v.floor()
}

/// Hermite interpolation between `edge0` and `edge1`, clamped to [0,1].
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear blend: `a` at t=0, `b` at t=1.
#[inline]
pub fn mix(a: Vec4, b: Vec4, t: f32) -> Vec4 {
    a * (1.0 - t) + b * t
}

/// Taxicab distance `|a.x - b.x| + |a.y - b.y|`.
#[inline]
pub fn manhattan_distance(a: Vec2, b: Vec2) -> f32 {
    let d = (a - b).abs();
    d.x + d.y
}
