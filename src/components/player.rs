//! Player movement state.
//!
//! The level scene spawns exactly one entity with [`Player`] and
//! [`PlayerMovement`]; despawning the scene drops it and the next spawn
//! starts fresh. The fixed-step controller feeds the current input vector
//! through [`PlayerMovement::apply_input`], which reports walking edges so
//! the footstep sound starts and stops once per movement segment.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Input magnitude above which the player counts as walking.
pub const WALK_THRESHOLD: f32 = 0.01;

/// Marker for the player entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

/// Transition of the walking flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkEdge {
    Started,
    Stopped,
}

#[derive(Component, Clone, Debug)]
pub struct PlayerMovement {
    /// Last input vector, components in `[-1, 1]`.
    pub input: Vector2,
    pub walking: bool,
    /// World units per second at full input.
    pub speed: f32,
    /// Effect played when the player starts walking.
    pub footstep_fx: Option<String>,
}

impl PlayerMovement {
    pub fn new(speed: f32) -> Self {
        Self {
            input: Vector2 { x: 0.0, y: 0.0 },
            walking: false,
            speed,
            footstep_fx: None,
        }
    }

    pub fn with_footsteps(mut self, fx: impl Into<String>) -> Self {
        self.footstep_fx = Some(fx.into());
        self
    }

    /// Store `input` and return the walking edge it caused, if any.
    pub fn apply_input(&mut self, input: Vector2) -> Option<WalkEdge> {
        self.input = input;
        let walking = input.length() > WALK_THRESHOLD;
        let edge = match (self.walking, walking) {
            (false, true) => Some(WalkEdge::Started),
            (true, false) => Some(WalkEdge::Stopped),
            _ => None,
        };
        self.walking = walking;
        edge
    }

    /// Velocity for the current input. No acceleration curve.
    pub fn velocity(&self) -> Vector2 {
        self.input.scale_by(self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(x: f32) -> Vector2 {
        Vector2 { x, y: 0.0 }
    }

    #[test]
    fn one_start_and_one_stop_per_segment() {
        let mut pm = PlayerMovement::new(100.0);
        let edges: Vec<_> = [0.0, 0.5, 0.5, 0.0]
            .into_iter()
            .filter_map(|x| pm.apply_input(horizontal(x)))
            .collect();
        assert_eq!(edges, vec![WalkEdge::Started, WalkEdge::Stopped]);
    }

    #[test]
    fn noise_below_threshold_is_not_walking() {
        let mut pm = PlayerMovement::new(100.0);
        assert_eq!(pm.apply_input(horizontal(0.005)), None);
        assert!(!pm.walking);
    }

    #[test]
    fn velocity_is_input_times_speed() {
        let mut pm = PlayerMovement::new(80.0);
        pm.apply_input(Vector2 { x: 0.5, y: -1.0 });
        let v = pm.velocity();
        assert_eq!((v.x, v.y), (40.0, -80.0));
    }
}
