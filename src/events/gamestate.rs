//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers
//! [`observe_gamestate_change_event`], which applies the transition to
//! [`GameState`] and runs the enter hook stored in
//! [`crate::resources::systemsstore::SystemsStore`].
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Apply whatever [`NextGameState`] holds.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: ResMut<NextGameState>,
    mut game_state: ResMut<GameState>,
    systems_store: Res<SystemsStore>,
) {
    let Some(new_state) = next_game_state.take() else {
        debug!("No state change pending.");
        return;
    };
    info!("Transitioning from {:?} to {:?}", game_state.get(), new_state);
    game_state.set(new_state);
    run_enter_hook(new_state, &mut commands, &systems_store);
}

fn run_enter_hook(state: GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(hook) = state.enter_hook() else {
        return;
    };
    if !systems_store.run(hook, commands) {
        warn!("{:?} entered without its '{}' hook", state, hook);
    }
}
