use std::sync::Mutex;

use glam::{Vec2, Vec4};
use pixel_effects::effects::{color, distortion, layer};
use pixel_effects::{Color, Layer};

/// Records every position it is asked for and answers with a fixed color.
struct RecordingLayer {
    seen: Mutex<Vec<Vec2>>,
    fill: Color,
}

impl RecordingLayer {
    fn new(fill: Color) -> Self {
        Self { seen: Mutex::new(Vec::new()), fill }
    }

    fn positions(&self) -> Vec<Vec2> {
        self.seen.lock().unwrap().clone()
    }
}

impl Layer for RecordingLayer {
    fn sample(&self, position: Vec2) -> Color {
        self.seen.lock().unwrap().push(position);
        self.fill
    }
}

fn close(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol * b.abs().max(1.0)
}

#[test]
fn gradient_red_times_blue_is_one_off_axis() {
    let c = Vec4::new(0.1, 0.2, 0.3, 0.9);
    for &(x, y) in &[(1.0, 1.0), (3.5, 200.0), (640.0, 0.25), (-4.0, 9.0)] {
        let out = color::gradient(Vec2::new(x, y), c);
        assert!(!out.x.is_nan() && !out.z.is_nan());
        assert!(close(out.x * out.z, 1.0, 1e-5), "({x},{y}) gave {out:?}");
    }
}

#[test]
fn simple_color_effects_hold_for_many_inputs() {
    let colors = [
        Vec4::ZERO,
        Vec4::new(0.5, 0.25, 0.0, 0.5),
        Vec4::new(1.0, 1.0, 1.0, 1.0),
        Vec4::new(0.0, 0.3, 0.1, 0.3),
    ];
    let positions = [Vec2::ZERO, Vec2::new(12.0, 400.0), Vec2::new(-3.0, 7.5)];
    for c in colors {
        for p in positions {
            assert_eq!(color::passthrough(p, c), c);

            let red = color::recolor(p, c);
            assert_eq!((red.x, red.y, red.z, red.w), (1.0, 0.0, 0.0, c.w));

            let inverted = color::invert_alpha(p, c);
            assert!(close(inverted.w, 1.0 - c.w, 1e-6));
            let back = color::invert_alpha(p, inverted);
            assert!(close(back.w, c.w, 1e-6));
        }
    }
}

#[test]
fn wave_never_moves_x_and_repeats_every_two_fifths_pi() {
    let period = std::f32::consts::TAU / 5.0;
    for step in 0..50 {
        let p = Vec2::new(step as f32 * 7.0, step as f32 * 11.0);
        let t = step as f32 * 0.13;
        let a = distortion::wave(p, t);
        let b = distortion::wave(p, t + period);
        assert_eq!(a.x, p.x);
        assert!((a.y - b.y).abs() < 1e-3);
    }
}

#[test]
fn circles_amount_zero_reveals_nothing_and_one_reveals_nearly_all() {
    let size = Vec2::new(120.0, 80.0);
    let c = Vec4::new(0.2, 0.4, 0.6, 1.0);
    let mut revealed_at_one = 0;
    let mut total = 0;
    for y in 0..80 {
        for x in 0..120 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            assert_eq!(color::circles(p, c, size, 0.0), Vec4::ZERO);
            if color::circles(p, c, size, 1.0) == c {
                revealed_at_one += 1;
            }
            total += 1;
        }
    }
    // Only the bottom-right corners of the outermost cells can stay hidden.
    assert!(revealed_at_one as f32 / total as f32 > 0.99);
}

#[test]
fn loupe_samples_once_at_the_lens_formula_position() {
    let size = Vec2::new(300.0, 300.0);
    let touch = Vec2::new(150.0, 150.0);
    let probe = RecordingLayer::new(Vec4::ONE);

    // Touch point itself: delta 0, so the centre maps to itself.
    let out = layer::loupe(touch, &probe, size, touch);
    assert_eq!(out, Vec4::ONE);

    // 15px right of centre: delta 0.05, distance 0.0025, zoom 0.525.
    layer::loupe(Vec2::new(165.0, 150.0), &probe, size, touch);

    let seen = probe.positions();
    assert_eq!(seen.len(), 2);
    assert!((seen[0] - touch).abs().max_element() < 1e-3);
    assert!(close(seen[1].x, 150.0 + 15.0 * 0.525, 1e-4));
    assert!(close(seen[1].y, 150.0, 1e-4));
}

#[test]
fn crosswarp_fades_out_as_amount_rises() {
    let size = Vec2::new(100.0, 100.0);
    let probe = RecordingLayer::new(Vec4::ONE);
    let p = Vec2::new(50.0, 50.0);
    let alphas: Vec<f32> = [0.0, 0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|&a| layer::crosswarp(p, &probe, size, a).w)
        .collect();
    assert_eq!(alphas[0], 1.0);
    assert_eq!(alphas[4], 0.0);
    assert!(alphas.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn sinebow_golden_values() {
    let size = Vec2::new(300.0, 300.0);
    let opaque = Vec4::new(0.0, 0.0, 0.0, 1.0);

    // Dead centre at t=0 sits exactly on the first line: 1/0 propagates.
    let centre = color::sinebow(Vec2::new(150.0, 150.0), opaque, size, 0.0);
    assert_eq!(centre.x, f32::INFINITY);
    assert_eq!(centre.y, f32::INFINITY);
    assert_eq!(centre.z, f32::INFINITY);
    assert_eq!(centre.w, 1.0);

    let above = color::sinebow(Vec2::new(150.0, 120.0), opaque, size, 0.0);
    assert!(close(above.x, 1.342_425, 1e-3), "{above:?}");
    assert!(close(above.y, 0.319_927, 1e-3), "{above:?}");
    assert!(close(above.z, 0.561_557, 1e-3), "{above:?}");
    assert_eq!(above.w, 1.0);

    let wide = color::sinebow(Vec2::new(75.0, 90.0), opaque, Vec2::new(300.0, 200.0), 1.0);
    assert!(close(wide.x, 1.798_459, 1e-3), "{wide:?}");
    assert!(close(wide.y, 0.328_213, 1e-3), "{wide:?}");
    assert!(close(wide.z, 0.388_881, 1e-3), "{wide:?}");
}

#[test]
fn effects_are_deterministic() {
    let size = Vec2::new(64.0, 48.0);
    let p = Vec2::new(17.5, 33.5);
    let c = Vec4::new(0.3, 0.3, 0.3, 0.7);
    assert_eq!(color::rainbow(p, c, 2.5), color::rainbow(p, c, 2.5));
    assert_eq!(color::sinebow(p, c, size, 2.5), color::sinebow(p, c, size, 2.5));
    assert_eq!(distortion::relative_wave(p, 2.5, size), distortion::relative_wave(p, 2.5, size));
}
