use glam::{Vec2, Vec4};
use pixel_effects::render::{pixel_position, render};
use pixel_effects::{Canvas, EffectInputs, Filter, Registry, Shape, content};
use tempfile::TempDir;

fn checker(width: usize, height: usize) -> Canvas {
    let mut canvas = Canvas::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let on = (x / 4 + y / 4) % 2 == 0;
            let c = if on { Vec4::new(1.0, 1.0, 1.0, 1.0) } else { Vec4::new(0.0, 0.0, 0.5, 0.5) };
            canvas.set(x, y, c);
        }
    }
    canvas
}

#[test]
fn every_registered_effect_renders_a_full_frame() {
    let source = checker(40, 30);
    let registry = Registry::builtin();
    let inputs = EffectInputs {
        time: 1.25,
        size: source.size(),
        touch: Vec2::new(20.0, 15.0),
        amount: 0.5,
    };
    for entry in registry.iter() {
        for filter in [Filter::Nearest, Filter::Bilinear] {
            let out = render(&entry.effect, &source, &inputs, filter).unwrap();
            assert_eq!((out.width, out.height), (40, 30), "{}", entry.name);
            assert_eq!(out.pixels.len(), 40 * 30, "{}", entry.name);
        }
    }
}

#[test]
fn repeated_parallel_renders_are_identical() {
    let source = checker(64, 64);
    let registry = Registry::builtin();
    let inputs = EffectInputs { time: 3.0, ..EffectInputs::for_size(source.size()) };
    for name in ["sinebow", "loupe", "relativeWave"] {
        let effect = registry.get(name).unwrap().effect;
        let first = render(&effect, &source, &inputs, Filter::Bilinear).unwrap();
        let second = render(&effect, &source, &inputs, Filter::Bilinear).unwrap();
        // Compare bit patterns so NaN pixels count as equal.
        let bits = |c: &Canvas| c.pixels.iter().map(|p| p.to_array().map(f32::to_bits)).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second), "{name}");
    }
}

#[test]
fn color_effects_see_the_pixel_centre_and_its_own_color() {
    let source = checker(8, 8);
    let registry = Registry::builtin();
    let entry = registry.get("gradient").unwrap();
    assert_eq!(entry.shape(), Shape::Color);
    let out = render(&entry.effect, &source, &EffectInputs::for_size(source.size()), Filter::Nearest)
        .unwrap();
    let p = pixel_position(3, 1);
    let got = out.get(3, 1).unwrap();
    assert!((got.x - p.x / p.y).abs() < 1e-6);
    assert!((got.z - p.y / p.x).abs() < 1e-6);
    assert_eq!(got.w, source.get(3, 1).unwrap().w);
}

#[test]
fn loupe_leaves_far_pixels_untouched() {
    let source = checker(60, 60);
    let registry = Registry::builtin();
    let entry = registry.get("loupe").unwrap();
    let inputs = EffectInputs { touch: Vec2::new(10.0, 10.0), ..EffectInputs::for_size(source.size()) };
    let out = render(&entry.effect, &source, &inputs, Filter::Nearest).unwrap();
    assert_eq!(out.get(55, 55), source.get(55, 55));
    assert_eq!(out.get(40, 5), source.get(40, 5));
}

#[test]
fn circles_transition_endpoints() {
    let source = checker(40, 40);
    let registry = Registry::builtin();
    let entry = registry.get("circles").unwrap();
    let mut inputs = EffectInputs::for_size(source.size());

    inputs.amount = 0.0;
    let hidden = render(&entry.effect, &source, &inputs, Filter::Nearest).unwrap();
    assert!(hidden.pixels.iter().all(|p| *p == Vec4::ZERO));

    inputs.amount = 1.0;
    let shown = render(&entry.effect, &source, &inputs, Filter::Nearest).unwrap();
    assert_eq!(shown, source);
}

#[test]
fn export_writes_a_png_of_the_canvas_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("frame.png");

    let source = content::demo_card(96, 64).unwrap();
    let registry = Registry::builtin();
    let entry = registry.get("recolor").unwrap();
    let frame = render(&entry.effect, &source, &EffectInputs::for_size(source.size()), Filter::Nearest)
        .unwrap();
    content::save_png(&frame, &path).unwrap();

    let reloaded = content::load_image(&path, 96, 64).unwrap();
    assert_eq!((reloaded.width, reloaded.height), (96, 64));
    // Card centre is opaque red after recolor; the corner stays clear.
    assert_eq!(reloaded.get(48, 20).unwrap(), Vec4::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(reloaded.get(0, 0).unwrap().w, 0.0);
}

#[test]
fn loading_a_missing_image_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = content::load_image(&dir.path().join("nope.png"), 10, 10).unwrap_err();
    assert!(matches!(err, pixel_effects::Error::ImageLoad { .. }));
}
