//! The pixel effect library.
//!
//! Every effect is a pure function invoked once per output pixel. There are
//! three call contracts:
//!
//! * **color**: `(position, color, ..) -> color`, reads only the current pixel
//! * **distortion**: `(position, ..) -> position`, the host re-samples the
//!   source at the returned position
//! * **layer**: `(position, layer, ..) -> color`, may sample the layer anywhere
//!
//! Effects hold no state, allocate nothing and never trap numeric edge cases:
//! a division by zero comes back as inf/NaN in the output.

pub mod color;
pub mod distortion;
pub mod layer;

use glam::Vec2;

use crate::sampler::Layer;
use crate::types::{Color, EffectInputs};

/// Signature shared by all color effects once bound to host inputs.
pub type ColorFn = fn(Vec2, Color, &EffectInputs) -> Color;
/// Signature shared by all distortion effects once bound to host inputs.
pub type DistortionFn = fn(Vec2, &EffectInputs) -> Vec2;
/// Signature shared by all layer effects once bound to host inputs.
pub type LayerFn = fn(Vec2, &dyn Layer, &EffectInputs) -> Color;

/// Which call contract an effect follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Color,
    Distortion,
    Layer,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Color => "color",
            Shape::Distortion => "distortion",
            Shape::Layer => "layer",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An effect implementation tagged with its call contract.
#[derive(Clone, Copy)]
pub enum Effect {
    Color(ColorFn),
    Distortion(DistortionFn),
    Layer(LayerFn),
}

impl Effect {
    pub fn shape(&self) -> Shape {
        match self {
            Effect::Color(_) => Shape::Color,
            Effect::Distortion(_) => Shape::Distortion,
            Effect::Layer(_) => Shape::Layer,
        }
    }
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect::{:?}", self.shape())
    }
}
