//! Draw order for world shapes.

use bevy_ecs::prelude::Component;

/// Higher values are drawn later (on top). The NPC stands in front of the
/// scenery and the player in front of the NPC.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ZIndex(pub i32);
