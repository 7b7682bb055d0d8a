//! Menu events.

use crate::components::menu::{MenuAction, SliderTarget};
use bevy_ecs::prelude::*;

/// A menu button was confirmed.
#[derive(Event, Debug, Clone)]
pub struct MenuSelectionEvent {
    pub menu: Entity,
    pub item_id: String,
    pub action: MenuAction,
}

/// A slider moved. `value` is the raw, unclamped slider position.
#[derive(Event, Debug, Clone, Copy)]
pub struct SliderChangedEvent {
    pub menu: Entity,
    pub target: SliderTarget,
    pub value: f32,
}
