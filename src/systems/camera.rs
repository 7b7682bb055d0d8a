//! Camera follow system.
//!
//! Runs every frame with the variable delta, after the fixed steps have moved
//! the player.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerMovement};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::camerafollow::CameraFollow;
use crate::resources::worldtime::WorldTime;

pub fn camera_follow_system(
    player: Query<(&MapPosition, &PlayerMovement), With<Player>>,
    mut follow: ResMut<CameraFollow>,
    mut camera: ResMut<Camera2DRes>,
    time: Res<WorldTime>,
) {
    let Some((position, movement)) = player.iter().next() else {
        return;
    };
    follow.update_facing(movement.input.x);
    let target = follow.target(position.pos);
    let next = follow.step(camera.0.target, target, time.delta);
    // Leave the resource untouched inside the dead zone.
    if next.x != camera.0.target.x || next.y != camera.0.target.y {
        camera.0.target = next;
    }
}
