//! Timer expiration events.
//!
//! When a [`Timer`](crate::components::timer::Timer) component reaches its
//! duration, a [`TimerEvent`] is triggered. The `signal` names the action
//! to perform; see [`crate::systems::transition::timer_observer`].

use bevy_ecs::prelude::*;

/// Well-known timer signals.
pub mod signals {
    /// Menu "Play": click finished, start loading the level.
    pub const BEGIN_LOAD: &str = "begin_load";
    /// Loading hold finished, switch to the pending scene.
    pub const ACTIVATE_SCENE: &str = "activate_scene";
    /// Menu "Quit": click finished, leave the game.
    pub const QUIT: &str = "quit";
    /// Level left: click finished, go back to the menu.
    pub const LEAVE_LEVEL: &str = "leave_level";
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity whose timer expired.
    pub entity: Entity,
    /// The signal name configured on the timer.
    pub signal: String,
}
