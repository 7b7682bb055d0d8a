//! World-space position component.
//!
//! [`MapPosition`] is the pivot of an entity in level coordinates. The camera
//! transforms it to the screen; UI uses
//! [`ScreenPosition`](super::screenposition::ScreenPosition) instead.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }
}
