//! Kinematic body component.
//!
//! [`RigidBody`] stores the velocity that the fixed-step movement system
//! integrates into [`MapPosition`](super::mapposition::MapPosition). There is
//! no acceleration or friction: the player controller sets the velocity
//! directly every step.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// World units per second.
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }
}
