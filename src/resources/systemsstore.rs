//! Registry of one-shot systems addressed by name.
//!
//! State enter hooks, the scene switcher and the hand-off restore are
//! registered under string keys in `main` and run by the observers and
//! systems that need them.

use bevy_ecs::prelude::{Commands, Resource};
use bevy_ecs::system::SystemId;
use log::warn;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.map.get(name.as_ref())
    }

    /// Queue the system registered as `name`. Returns false (and warns) when
    /// nothing is registered under that name.
    pub fn run(&self, name: &str, commands: &mut Commands) -> bool {
        match self.get(name) {
            Some(id) => {
                commands.run_system(*id);
                true
            }
            None => {
                warn!("no system registered as '{}'", name);
                false
            }
        }
    }
}
