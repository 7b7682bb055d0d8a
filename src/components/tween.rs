//! Scale tween for overlay text.
//!
//! [`TweenScale`] animates an entity's [`Scale`](super::scale::Scale) once
//! from `from` to `to` with one of the [`Easing`] curves, then stops. See
//! [`crate::systems::tween`] for the update system.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Maps linear progress `t` in `[0, 1]` onto the animated range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Starts fast, decelerates (cubic).
    CubicOut,
}

#[derive(Component, Clone, Debug)]
pub struct TweenScale {
    pub from: Vector2,
    pub to: Vector2,
    /// Duration in seconds.
    pub duration: f32,
    pub easing: Easing,
    /// Seconds since the tween started.
    pub time: f32,
    /// False once `duration` has elapsed.
    pub playing: bool,
}

impl TweenScale {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenScale {
            from,
            to,
            duration,
            easing: Easing::Linear,
            time: 0.0,
            playing: true,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Normalized progress in `[0, 1]`. Zero-length tweens are complete.
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            (self.time / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}
