//! Input system.
//!
//! [`update_input_state`] reads the keyboard from Raylib each frame, writes
//! [`InputState`] and triggers an [`InputEvent`] for every action that went
//! down this frame.
use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let mut poll = |state: &mut BoolState, action: InputAction| {
        let active = state.bindings().any(|k| rl.is_key_down(k));
        let pressed = state.bindings().any(|k| rl.is_key_pressed(k));
        state.set(active, pressed);
        if pressed {
            commands.trigger(InputEvent { action });
        }
    };

    let input = &mut *input;
    poll(&mut input.up, InputAction::Up);
    poll(&mut input.down, InputAction::Down);
    poll(&mut input.left, InputAction::Left);
    poll(&mut input.right, InputAction::Right);
    poll(&mut input.confirm, InputAction::Confirm);
    poll(&mut input.back, InputAction::Back);
    poll(&mut input.pause, InputAction::Pause);
}
