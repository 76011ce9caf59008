// Core per-frame types shared by the effects and the host.

use glam::{Vec2, Vec4};

use crate::error::Error;

/// RGBA, premultiplied alpha, channels nominally in [0,1].
/// Effects may push channels outside that range (or to inf/NaN); only the
/// presentation step clamps.
pub type Color = Vec4;

/// Fully transparent black.
pub const TRANSPARENT: Color = Vec4::ZERO;

/// Packed pixels ready for minifb.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,     // how wide the frame is on screen (pixels)
    pub height: usize,    // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>, // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// Floating-point RGBA surface. This is what effects read from and write to.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>, // row-major, length = width * height
}

impl Canvas {
    /// A transparent canvas. Zero-sized canvases are rejected because every
    /// effect that normalizes by size would divide by zero on every pixel.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSize(width, height));
        }
        Ok(Self { width, height, pixels: vec![TRANSPARENT; width * height] })
    }

    /// Canvas extent as the `size` argument effects expect.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    pub fn same_size(&self, other: &Canvas) -> bool {
        self.width == other.width && self.height == other.height
    }
}

/// Extra arguments the host binds to effects, in their declared order.
/// Each effect reads only the fields its registry entry declares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectInputs {
    /// Seconds since the effect's epoch.
    pub time: f32,
    /// Canvas extent in pixels.
    pub size: Vec2,
    /// Most recent pointer location, same space as pixel positions.
    pub touch: Vec2,
    /// Transition progress, 0..1.
    pub amount: f32,
}

impl EffectInputs {
    /// Inputs for a canvas of `size` with the pointer resting at its centre.
    pub fn for_size(size: Vec2) -> Self {
        Self { time: 0.0, size, touch: size * 0.5, amount: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(matches!(Canvas::new(0, 10), Err(Error::InvalidSize(0, 10))));
        assert!(matches!(Canvas::new(10, 0), Err(Error::InvalidSize(10, 0))));
    }

    #[test]
    fn get_and_set_ignore_out_of_bounds() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.set(5, 5, Vec4::ONE);
        assert!(canvas.pixels.iter().all(|p| *p == TRANSPARENT));
        canvas.set(1, 0, Vec4::ONE);
        assert_eq!(canvas.get(1, 0), Some(Vec4::ONE));
        assert_eq!(canvas.get(2, 0), None);
    }

    #[test]
    fn default_touch_sits_at_centre() {
        let inputs = EffectInputs::for_size(Vec2::new(300.0, 200.0));
        assert_eq!(inputs.touch, Vec2::new(150.0, 100.0));
        assert_eq!(inputs.amount, 0.0);
    }
}
