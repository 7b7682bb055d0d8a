//! Input action events.
//!
//! [`InputEvent`] is triggered by [`crate::systems::input::update_input_state`]
//! on the frame a key goes down. The menu and the level react to these
//! instead of polling [`InputState`](crate::resources::input::InputState).

use bevy_ecs::prelude::*;

/// Logical input actions, abstracted from physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    /// Enter or Space.
    Confirm,
    /// Escape.
    Back,
    /// P.
    Pause,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
}
