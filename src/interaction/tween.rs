//! Small interpolation state machines driven by the frame tick

use bevy::prelude::*;

/// Values a [`Tween`] can interpolate.
pub trait Interpolate: Copy {
    fn interpolate(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Vec3 {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

/// Cubic ease-in-out on [0, 1].
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Eased transition from `from` to `to`; `progress` runs from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub progress: f32,
}

impl<T: Interpolate> Tween<T> {
    /// A finished tween resting at `value`.
    pub fn settled(value: T) -> Self {
        Self {
            from: value,
            to: value,
            progress: 1.0,
        }
    }

    pub fn value(&self) -> T {
        self.from.interpolate(self.to, ease_in_out_cubic(self.progress))
    }

    /// Start a new transition from wherever the tween currently is.
    pub fn retarget(&mut self, to: T) {
        self.from = self.value();
        self.to = to;
        self.progress = 0.0;
    }

    /// Move the destination without restarting, for targets that move.
    pub fn track(&mut self, to: T) {
        self.to = to;
    }

    pub fn tick(&mut self, delta_secs: f32, duration_secs: f32) {
        if duration_secs <= 0.0 {
            self.progress = 1.0;
            return;
        }
        let step = (delta_secs / duration_secs).max(0.0);
        self.progress = (self.progress + step).min(1.0);
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}
