//! Smoothed look-ahead camera follow parameters and state.
//!
//! The camera aims at `player + offset + facing * look_ahead` and eases
//! toward it with exponential smoothing. Inside `dead_zone` it holds still so
//! it does not shiver around the target.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraFollow {
    /// Fixed offset from the player pivot.
    pub offset: Vector2,
    /// Horizontal distance the camera leads in the facing direction.
    pub look_ahead: f32,
    /// Distance under which the camera does not move.
    pub dead_zone: f32,
    /// Fraction of the remaining distance covered per second.
    pub smoothing: f32,
    /// Horizontal input needed to flip `facing`.
    pub facing_threshold: f32,
    /// +1 facing right, -1 facing left.
    pub facing: f32,
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self {
            offset: Vector2 { x: 0.0, y: -24.0 },
            look_ahead: 40.0,
            dead_zone: 0.5,
            smoothing: 5.0,
            facing_threshold: 0.1,
            facing: 1.0,
        }
    }
}

impl CameraFollow {
    /// Flip the facing sign when horizontal input is strong enough.
    pub fn update_facing(&mut self, input_x: f32) {
        if input_x.abs() > self.facing_threshold {
            self.facing = input_x.signum();
        }
    }

    pub fn target(&self, player: Vector2) -> Vector2 {
        Vector2 {
            x: player.x + self.offset.x + self.facing * self.look_ahead,
            y: player.y + self.offset.y,
        }
    }

    /// Next camera position after `dt` seconds.
    pub fn step(&self, current: Vector2, target: Vector2, dt: f32) -> Vector2 {
        let delta = target - current;
        if delta.length() <= self.dead_zone {
            return current;
        }
        let t = (self.smoothing * dt).clamp(0.0, 1.0);
        current + delta.scale_by(t)
    }
}
