//! Cross-system scene signals.
//!
//! [`WorldSignals`] carries the few world-wide facts that observers and
//! one-shot systems share without entity queries:
//! - the scene [`crate::game::switch_scene`] builds next
//! - a scene being loaded but not yet activated
//! - whether a delayed scene change is in flight
//! - whether the main loop should end

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    scene: Option<String>,
    pending_scene: Option<String>,
    transition_pending: bool,
    quit_requested: bool,
}

impl WorldSignals {
    /// Name of the current (or about to be built) scene.
    pub fn scene(&self) -> Option<&str> {
        self.scene.as_deref()
    }

    pub fn set_scene(&mut self, scene: impl Into<String>) {
        self.scene = Some(scene.into());
    }

    pub fn in_scene(&self, scene: &str) -> bool {
        self.scene() == Some(scene)
    }

    /// Record the scene a Play selection is loading.
    pub fn set_pending_scene(&mut self, scene: impl Into<String>) {
        self.pending_scene = Some(scene.into());
    }

    pub fn pending_scene(&self) -> Option<&str> {
        self.pending_scene.as_deref()
    }

    pub fn take_pending_scene(&mut self) -> Option<String> {
        self.pending_scene.take()
    }

    /// True between a click that schedules a scene change and the switch.
    pub fn transition_pending(&self) -> bool {
        self.transition_pending
    }

    pub fn begin_transition(&mut self) {
        self.transition_pending = true;
    }

    pub fn end_transition(&mut self) {
        self.transition_pending = false;
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
