//! One-shot real-time delay.
//!
//! A [`Timer`] counts unscaled seconds, so pausing the level does not hold
//! back a click sound before a scene change. When it expires,
//! [`crate::systems::timer::update_timers`] triggers a
//! [`TimerEvent`](crate::events::timer::TimerEvent) carrying `signal` and
//! despawns the timer entity. There is no way to cancel a timer.
use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
    pub signal: String,
}
impl Timer {
    pub fn new(duration: f32, signal: impl Into<String>) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal: signal.into(),
        }
    }

    /// Advance by `dt` real seconds. Returns true once the delay is over.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.duration
    }
}
