//! High-level game state resources.
//!
//! [`GameState`] is the authoritative state; [`NextGameState`] holds a
//! transition requested by a system. `check_pending_state` notices the
//! request and `observe_gamestate_change_event` applies it, running the enter
//! hook registered for the new state. Scenes (menu, level) live inside
//! `Playing` and switch through [`crate::game::switch_scene`] instead.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
///
/// The game only ever moves forward: `None -> Setup -> Playing -> Quitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    Setup,
    Playing,
    Quitting,
}

impl GameStates {
    /// Name of the one-shot system run when entering this state.
    pub fn enter_hook(self) -> Option<&'static str> {
        match self {
            GameStates::None => None,
            GameStates::Setup => Some("setup"),
            GameStates::Playing => Some("enter_play"),
            GameStates::Quitting => Some("quit_game"),
        }
    }
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> GameStates {
        self.current
    }

    /// Update the current state immediately, without running hooks.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Requested transition, applied on the next state check.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NextGameState {
    next: Option<GameStates>,
}

impl NextGameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The state waiting to be entered, if any.
    pub fn pending(&self) -> Option<GameStates> {
        self.next
    }

    /// Request a transition to `next`. A later request replaces an earlier one.
    pub fn set(&mut self, next: GameStates) {
        self.next = Some(next);
    }

    /// Consume the request.
    pub fn take(&mut self) -> Option<GameStates> {
        self.next.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_consumed_once() {
        let mut next = NextGameState::new();
        assert_eq!(next.pending(), None);
        next.set(GameStates::Setup);
        next.set(GameStates::Playing);
        assert_eq!(next.take(), Some(GameStates::Playing));
        assert_eq!(next.take(), None);
    }

    #[test]
    fn every_reachable_state_has_a_hook() {
        assert_eq!(GameStates::None.enter_hook(), None);
        for state in [GameStates::Setup, GameStates::Playing, GameStates::Quitting] {
            assert!(state.enter_hook().is_some());
        }
    }
}
