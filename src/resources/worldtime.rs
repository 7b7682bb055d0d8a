//! Simulation clocks.
//!
//! [`WorldTime`] carries the per-frame variable delta (scaled by
//! `time_scale`) and the unscaled real delta used by UI delays. [`FixedTime`]
//! accumulates scaled time and tells the main loop how many fixed physics
//! steps to run this frame.
use bevy_ecs::prelude::Resource;

/// Upper bound of fixed steps per frame, so a long stall cannot snowball.
pub const MAX_FIXED_STEPS_PER_FRAME: u32 = 5;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    /// Scaled frame delta in seconds.
    pub delta: f32,
    /// Unscaled frame delta in seconds.
    pub real_delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            real_delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale;
        self
    }

    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }
}

/// Fixed-timestep accumulator for physics-driven movement.
#[derive(Resource, Clone, Copy, Debug)]
pub struct FixedTime {
    /// Length of one fixed step in seconds.
    pub step: f32,
    pub accumulator: f32,
}

impl FixedTime {
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(f32::EPSILON),
            accumulator: 0.0,
        }
    }

    /// Add `dt` and return how many whole steps are now due.
    ///
    /// Leftover time stays in the accumulator. Anything beyond
    /// [`MAX_FIXED_STEPS_PER_FRAME`] steps is dropped.
    pub fn accumulate(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_FIXED_STEPS_PER_FRAME {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == MAX_FIXED_STEPS_PER_FRAME && self.accumulator >= self.step {
            self.accumulator %= self.step;
        }
        steps
    }
}

impl Default for FixedTime {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_partial_steps() {
        let mut ft = FixedTime::new(0.1);
        assert_eq!(ft.accumulate(0.05), 0);
        assert_eq!(ft.accumulate(0.06), 1);
        assert!((ft.accumulator - 0.01).abs() < 1e-5);
    }

    #[test]
    fn caps_steps_after_stall() {
        let mut ft = FixedTime::new(0.1);
        assert_eq!(ft.accumulate(10.0), MAX_FIXED_STEPS_PER_FRAME);
        assert!(ft.accumulator < 0.1);
    }

    #[test]
    fn paused_time_runs_no_steps() {
        let mut ft = FixedTime::new(0.1);
        assert_eq!(ft.accumulate(0.0), 0);
    }
}
