//! Game state polling and run conditions.
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use bevy_ecs::prelude::*;

/// Fire [`GameStateChangedEvent`] when a transition was requested.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if next_state.pending().is_some() {
        commands.trigger(GameStateChangedEvent {});
    }
}

/// Run condition: gameplay systems only tick once setup is done.
pub fn state_is_playing(state: Res<GameState>) -> bool {
    state.get() == GameStates::Playing
}
