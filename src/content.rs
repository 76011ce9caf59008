// What the effects get applied to: either the built-in demo card or an image
// from disk, held as a premultiplied float canvas. Also writes frames out as PNG.

use std::path::Path;

use glam::{Vec2, Vec3, Vec4};
use image::{RgbaImage, imageops::FilterType};

use crate::draw::glyph5x7;
use crate::error::Error;
use crate::types::Canvas;

const CARD_TOP: Vec3 = Vec3::new(0.36, 0.42, 0.98);
const CARD_BOTTOM: Vec3 = Vec3::new(0.85, 0.35, 0.75);
const CARD_LABEL: &str = "PIXEL EFFECTS";

/// A rounded, vertically graded card with a label, transparent around it.
/// Stands in for the UI element the effects decorate.
pub fn demo_card(width: usize, height: usize) -> Result<Canvas, Error> {
    let mut canvas = Canvas::new(width, height)?;

    let margin = Vec2::new(width as f32, height as f32) * 0.1;
    let min = margin;
    let max = canvas.size() - margin;
    let radius = (max - min).min_element() * 0.15;

    for y in 0..height {
        for x in 0..width {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if !inside_rounded_rect(p, min, max, radius) {
                continue;
            }
            let t = ((p.y - min.y) / (max.y - min.y)).clamp(0.0, 1.0);
            let mut rgb = CARD_TOP.lerp(CARD_BOTTOM, t);
            // Faint ruled lines so distortions have something to bend.
            if y % 16 == 0 {
                rgb *= 0.85;
            }
            canvas.set(x, y, rgb.extend(1.0));
        }
    }

    // Label: 5x7 glyphs scaled to roughly a tenth of the card height.
    let scale = ((max.y - min.y) / 70.0).floor().max(1.0) as usize;
    let advance = 6 * scale;
    let text_w = CARD_LABEL.chars().count() * advance;
    let origin_x = (width.saturating_sub(text_w)) / 2;
    let origin_y = (height.saturating_sub(7 * scale)) / 2;
    for (i, ch) in CARD_LABEL.chars().enumerate() {
        let Some(rows) = glyph5x7(ch) else { continue };
        for (ry, bits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if bits & (1 << (4 - rx)) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        let x = origin_x + i * advance + rx * scale + sx;
                        let y = origin_y + ry * scale + sy;
                        canvas.set(x, y, Vec4::ONE);
                    }
                }
            }
        }
    }

    Ok(canvas)
}

fn inside_rounded_rect(p: Vec2, min: Vec2, max: Vec2, radius: f32) -> bool {
    if p.cmplt(min).any() || p.cmpgt(max).any() {
        return false;
    }
    // Distance past the inner (radius-shrunk) rectangle.
    let inner_min = min + Vec2::splat(radius);
    let inner_max = max - Vec2::splat(radius);
    let outside = (inner_min - p).max(p - inner_max).max(Vec2::ZERO);
    outside.length_squared() <= radius * radius
}

/// Decode an image, resize it to `width`×`height`, and premultiply alpha.
pub fn load_image(path: &Path, width: usize, height: usize) -> Result<Canvas, Error> {
    let mut canvas = Canvas::new(width, height)?;
    let decoded = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded
        .resize_exact(width as u32, height as u32, FilterType::Triangle)
        .to_rgba8();

    for (x, y, px) in rgba.enumerate_pixels() {
        let a = px[3] as f32 / 255.0;
        let rgb = Vec3::new(px[0] as f32, px[1] as f32, px[2] as f32) / 255.0;
        canvas.set(x as usize, y as usize, (rgb * a).extend(a));
    }
    Ok(canvas)
}

/// Un-premultiply and write `canvas` as an 8-bit RGBA PNG.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), Error> {
    let image = to_rgba_image(canvas);
    image.save(path).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}

pub fn to_rgba_image(canvas: &Canvas) -> RgbaImage {
    RgbaImage::from_fn(canvas.width as u32, canvas.height as u32, |x, y| {
        let c = canvas.pixels[y as usize * canvas.width + x as usize];
        let a = c.w.clamp(0.0, 1.0);
        let rgb = if a > 0.0 { c.truncate() / a } else { Vec3::ZERO };
        let q = |v: f32| (v * 255.0).round() as u8;
        image::Rgba([q(rgb.x), q(rgb.y), q(rgb.z), q(a)])
    })
}
