//! Per-frame keyboard input resource.
//!
//! Captures the keys the game cares about and exposes them to systems via
//! [`InputState`]. WASD and the arrow keys both move; Enter or Space
//! confirms; Escape leaves the level; P pauses.
use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, Vector2};

#[derive(Debug, Clone, Copy)]
/// Key state with its primary and alternate bindings.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    pub key_binding: KeyboardKey,
    pub alt_binding: Option<KeyboardKey>,
}

impl BoolState {
    fn bound(key: KeyboardKey, alt: Option<KeyboardKey>) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: key,
            alt_binding: alt,
        }
    }

    /// Every key that drives this state.
    pub fn bindings(&self) -> impl Iterator<Item = KeyboardKey> {
        std::iter::once(self.key_binding).chain(self.alt_binding)
    }

    pub fn set(&mut self, active: bool, just_pressed: bool) {
        self.active = active;
        self.just_pressed = just_pressed;
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub confirm: BoolState,
    pub back: BoolState,
    pub pause: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            up: BoolState::bound(KeyboardKey::KEY_W, Some(KeyboardKey::KEY_UP)),
            down: BoolState::bound(KeyboardKey::KEY_S, Some(KeyboardKey::KEY_DOWN)),
            left: BoolState::bound(KeyboardKey::KEY_A, Some(KeyboardKey::KEY_LEFT)),
            right: BoolState::bound(KeyboardKey::KEY_D, Some(KeyboardKey::KEY_RIGHT)),
            confirm: BoolState::bound(KeyboardKey::KEY_ENTER, Some(KeyboardKey::KEY_SPACE)),
            back: BoolState::bound(KeyboardKey::KEY_ESCAPE, None),
            pause: BoolState::bound(KeyboardKey::KEY_P, None),
        }
    }
}

impl InputState {
    /// Movement direction from the held keys, at most unit length.
    pub fn direction(&self) -> Vector2 {
        let axis = |neg: &BoolState, pos: &BoolState| {
            (pos.active as i32 - neg.active as i32) as f32
        };
        let v = Vector2 {
            x: axis(&self.left, &self.right),
            y: axis(&self.up, &self.down),
        };
        let len = v.length();
        if len > 1.0 { v.scale_by(1.0 / len) } else { v }
    }
}
