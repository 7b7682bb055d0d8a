//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive scene switches. The
//! observers and registered systems spawned in `main` carry it; everything a
//! scene spawns does not.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across scene changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
