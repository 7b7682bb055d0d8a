//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems agree on a
//! single world/screen transform. `target` is the world point drawn at
//! `offset` on screen; [`crate::systems::camera::camera_follow_system`]
//! moves it.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

#[derive(Resource, Clone, Copy, Debug)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera looking at `target`, drawn at the center of a `w` x `h` screen.
    pub fn centered(target: Vector2, w: f32, h: f32) -> Self {
        Camera2DRes(Camera2D {
            offset: Vector2 {
                x: w * 0.5,
                y: h * 0.5,
            },
            target,
            rotation: 0.0,
            zoom: 1.0,
        })
    }
}
