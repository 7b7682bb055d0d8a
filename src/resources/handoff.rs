//! Cross-scene player position hand-off.
//!
//! The level scene writes the player's position here right before it is torn
//! down and reads it back, at most once, the next time it is spawned. The
//! value lives only in memory.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Debug, Clone, Copy)]
pub struct PositionHandoff {
    position: Vector2,
    valid: bool,
}

impl Default for PositionHandoff {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            valid: false,
        }
    }
}

impl PositionHandoff {
    /// Record `pos` and mark it as pending restore.
    pub fn save(&mut self, pos: Vector2) {
        self.position = pos;
        self.valid = true;
    }

    /// Whether a saved position is waiting to be restored.
    pub fn is_pending(&self) -> bool {
        self.valid
    }

    /// Return the saved position once, clearing it.
    pub fn take(&mut self) -> Option<Vector2> {
        if !self.valid {
            return None;
        }
        self.valid = false;
        Some(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_handoff_yields_nothing() {
        let mut h = PositionHandoff::default();
        assert!(!h.is_pending());
        assert!(h.take().is_none());
    }

    #[test]
    fn take_is_at_most_once() {
        let mut h = PositionHandoff::default();
        h.save(Vector2 { x: 3.0, y: 4.0 });
        let pos = h.take().unwrap();
        assert_eq!((pos.x, pos.y), (3.0, 4.0));
        assert!(h.take().is_none());
    }

    #[test]
    fn later_save_overwrites() {
        let mut h = PositionHandoff::default();
        h.save(Vector2 { x: 1.0, y: 1.0 });
        h.save(Vector2 { x: 9.0, y: -2.0 });
        let pos = h.take().unwrap();
        assert_eq!((pos.x, pos.y), (9.0, -2.0));
    }
}
