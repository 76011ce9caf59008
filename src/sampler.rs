//! Read-only access to host-composited content.
//!
//! Layer effects receive a `&dyn Layer` and may sample it anywhere. The same
//! sampler is shared by every pixel invocation of a frame, so implementations
//! must be `Sync` and must not mutate anything on `sample`.

use glam::Vec2;

use crate::types::{Canvas, Color, TRANSPARENT};

/// A layer an effect can read from at arbitrary positions.
pub trait Layer: Sync {
    /// Color at `position` (canvas pixel space). Positions outside the layer
    /// return transparent black.
    fn sample(&self, position: Vec2) -> Color;
}

/// Texel lookup mode for `CanvasLayer`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Filter {
    /// Pixel containing the position.
    #[default]
    Nearest,
    /// Weighted blend of the four texel centres around the position.
    Bilinear,
}

/// A `Layer` backed by a `Canvas`.
pub struct CanvasLayer<'a> {
    canvas: &'a Canvas,
    filter: Filter,
}

impl<'a> CanvasLayer<'a> {
    pub fn new(canvas: &'a Canvas, filter: Filter) -> Self {
        Self { canvas, filter }
    }

    #[inline]
    fn texel(&self, x: i64, y: i64) -> Color {
        if x < 0 || y < 0 {
            return TRANSPARENT;
        }
        self.canvas.get(x as usize, y as usize).unwrap_or(TRANSPARENT)
    }
}

impl Layer for CanvasLayer<'_> {
    fn sample(&self, position: Vec2) -> Color {
        if !position.is_finite() {
            return TRANSPARENT;
        }
        match self.filter {
            Filter::Nearest => {
                let p = position.floor();
                self.texel(p.x as i64, p.y as i64)
            }
            Filter::Bilinear => {
                // Texel centres sit at +0.5, so shift before splitting.
                let p = position - Vec2::splat(0.5);
                let base = p.floor();
                // All four taps outside the canvas; also keeps the casts below small.
                let extent = self.canvas.size();
                if base.cmplt(Vec2::splat(-1.0)).any() || base.cmpge(extent).any() {
                    return TRANSPARENT;
                }
                let t = p - base;
                let (x0, y0) = (base.x as i64, base.y as i64);

                let c00 = self.texel(x0, y0);
                let c10 = self.texel(x0 + 1, y0);
                let c01 = self.texel(x0, y0 + 1);
                let c11 = self.texel(x0 + 1, y0 + 1);

                let top = c00 * (1.0 - t.x) + c10 * t.x;
                let bottom = c01 * (1.0 - t.x) + c11 * t.x;
                top * (1.0 - t.y) + bottom * t.y
            }
        }
    }
}
