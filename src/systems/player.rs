//! Fixed-step player controller.
//!
//! Reads [`InputState`], stores the direction on [`PlayerMovement`], sets the
//! velocity directly and starts or stops the footstep sound on walking
//! edges only.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::player::{Player, PlayerMovement, WalkEdge};
use crate::components::rigidbody::RigidBody;
use crate::resources::audiosession::AudioSession;
use crate::resources::input::InputState;

pub fn player_movement_system(
    mut query: Query<(&mut PlayerMovement, &mut RigidBody), With<Player>>,
    input: Res<InputState>,
    mut audio: ResMut<AudioSession>,
) {
    let direction = input.direction();
    for (mut movement, mut body) in query.iter_mut() {
        match movement.apply_input(direction) {
            Some(WalkEdge::Started) => {
                debug!("player started walking");
                audio.play_effect(movement.footstep_fx.as_deref());
            }
            Some(WalkEdge::Stopped) => {
                debug!("player stopped walking");
                audio.stop_effect(movement.footstep_fx.as_deref());
            }
            None => {}
        }
        body.set_velocity(movement.velocity());
    }
}
