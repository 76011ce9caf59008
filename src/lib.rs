//! Per-pixel shader effects and the software host that drives them.
//!
//! The effect library (`effects`) is a set of pure functions evaluated once
//! per output pixel. Everything else in this crate is host: it owns the
//! canvas, the clock, the pointer and the transition progress, and feeds them
//! to effects as explicit arguments.

pub mod clock;
pub mod content;
pub mod draw;
pub mod effects;
pub mod error;
pub mod math;
pub mod registry;
pub mod render;
pub mod sampler;
pub mod types;

pub use effects::{Effect, Shape};
pub use error::Error;
pub use registry::{EffectEntry, Param, Registry};
pub use sampler::{CanvasLayer, Filter, Layer};
pub use types::{Canvas, Color, EffectInputs, FrameBuffer};
