// Host-owned animation state. Effects never see these structs, only the
// `time` and `amount` values they produce each frame.

use std::time::{Duration, Instant};

use crate::math::smoothstep;

/// Seconds since an effect-specific epoch.
pub struct EffectClock {
    epoch: Instant,
}

impl EffectClock {
    pub fn new(now: Instant) -> Self {
        Self { epoch: now }
    }

    /// Start counting from zero again, e.g. when the gallery switches effect.
    pub fn restart(&mut self, now: Instant) {
        self.epoch = now;
    }

    pub fn elapsed(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.epoch).as_secs_f32()
    }
}

/// Drives a transition's `amount` between 0 and 1.
///
/// Progress is tracked linearly and eased with smoothstep on read.
pub struct Transition {
    progress: f32,
    forward: bool,
    duration: Duration,
    auto_reverse: bool,
}

impl Transition {
    pub fn new(duration: Duration, auto_reverse: bool) -> Self {
        Self { progress: 0.0, forward: false, duration, auto_reverse }
    }

    /// Eased transition amount, 0..1.
    pub fn amount(&self) -> f32 {
        smoothstep(0.0, 1.0, self.progress)
    }

    /// Head toward 1 if we were heading toward 0, and vice versa.
    pub fn toggle(&mut self) {
        self.forward = !self.forward;
    }

    pub fn is_settled(&self) -> bool {
        (self.forward && self.progress >= 1.0) || (!self.forward && self.progress <= 0.0)
    }

    /// Advance by `dt`. Returns the new eased amount.
    pub fn step(&mut self, dt: Duration) -> f32 {
        let delta = if self.duration.is_zero() {
            1.0
        } else {
            dt.as_secs_f32() / self.duration.as_secs_f32()
        };

        if self.forward {
            self.progress = (self.progress + delta).min(1.0);
        } else {
            self.progress = (self.progress - delta).max(0.0);
        }

        if self.auto_reverse && self.is_settled() {
            self.forward = !self.forward;
        }
        self.amount()
    }
}
