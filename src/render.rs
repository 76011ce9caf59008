// Host-side dispatch: runs one effect over every pixel of a canvas, then
// composites the result for display.
//
// Pixels are independent. Rows are handed to rayon in parallel and each pixel
// only reads the (immutable) source and the shared inputs, never another
// pixel's output.

use glam::{Vec2, Vec3};
use rayon::prelude::*;

use crate::effects::Effect;
use crate::error::Error;
use crate::sampler::{CanvasLayer, Filter, Layer};
use crate::types::{Canvas, EffectInputs, FrameBuffer};

/// Position handed to effects for pixel (x, y): its centre.
#[inline]
pub fn pixel_position(x: usize, y: usize) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Evaluate `effect` for every pixel of `source`, writing into `dst`.
///
/// `filter` controls how distortion and layer effects read `source`.
pub fn apply(
    effect: &Effect,
    source: &Canvas,
    inputs: &EffectInputs,
    filter: Filter,
    dst: &mut Canvas,
) -> Result<(), Error> {
    if !source.same_size(dst) {
        return Err(Error::SizeMismatch {
            src_w: source.width,
            src_h: source.height,
            dst_w: dst.width,
            dst_h: dst.height,
        });
    }
    // Fields are public, so an empty or short canvas can still be built by hand.
    let len = source.width.checked_mul(source.height).unwrap_or(0);
    if len == 0 || source.pixels.len() != len || dst.pixels.len() != len {
        return Err(Error::InvalidSize(source.width, source.height));
    }

    let width = source.width;
    let layer = CanvasLayer::new(source, filter);

    dst.pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row_out)| {
            let row_in = &source.pixels[y * width..(y + 1) * width];
            for (x, out) in row_out.iter_mut().enumerate() {
                let position = pixel_position(x, y);
                *out = match effect {
                    Effect::Color(f) => f(position, row_in[x], inputs),
                    Effect::Distortion(f) => layer.sample(f(position, inputs)),
                    Effect::Layer(f) => f(position, &layer, inputs),
                };
            }
        });

    Ok(())
}

/// Convenience wrapper that allocates the destination.
pub fn render(
    effect: &Effect,
    source: &Canvas,
    inputs: &EffectInputs,
    filter: Filter,
) -> Result<Canvas, Error> {
    let mut dst = Canvas::new(source.width, source.height)?;
    apply(effect, source, inputs, filter, &mut dst)?;
    Ok(dst)
}

/// Premultiplied "over" onto a solid `backdrop` (RGB in 0..1), packed for
/// the window. This is the only place non-finite channels get tamed: NaN
/// becomes 0 and everything is clamped to 0..255.
pub fn composite(canvas: &Canvas, backdrop: Vec3, fb: &mut FrameBuffer) -> Result<(), Error> {
    if canvas.width != fb.width || canvas.height != fb.height {
        return Err(Error::SizeMismatch {
            src_w: canvas.width,
            src_h: canvas.height,
            dst_w: fb.width,
            dst_h: fb.height,
        });
    }

    fb.pixels
        .par_iter_mut()
        .zip(canvas.pixels.par_iter())
        .for_each(|(out, src)| {
            let alpha = src.w.clamp(0.0, 1.0);
            let rgb = src.truncate() + backdrop * (1.0 - alpha);
            *out = pack_rgb(rgb);
        });

    Ok(())
}

/// 0..1 float RGB → 0x00RRGGBB. `as u8` saturates and maps NaN to 0.
#[inline]
pub fn pack_rgb(rgb: Vec3) -> u32 {
    let r = (rgb.x * 255.0).round() as u8 as u32;
    let g = (rgb.y * 255.0).round() as u8 as u32;
    let b = (rgb.z * 255.0).round() as u8 as u32;
    (r << 16) | (g << 8) | b
}
