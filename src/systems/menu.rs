//! Menu systems.
//!
//! Slider values are filled from the audio session when the menu is spawned
//! (see [`crate::game::spawn_menu_scene`]).
//!
//! - [`menu_controller_observer`] turns key presses into focus moves, slider
//!   drags and button confirmations
//! - [`slider_changed_observer`] routes a drag to the matching audio setter
//! - [`menu_selection_observer`] clicks and schedules the delayed action of a
//!   confirmed button

use crate::components::menu::{Menu, MenuAction, MenuItemKind, SliderTarget};
use crate::components::timer::Timer;
use crate::events::input::{InputAction, InputEvent};
use crate::events::menu::{MenuSelectionEvent, SliderChangedEvent};
use crate::events::timer::signals;
use crate::resources::audiosession::AudioSession;
use crate::resources::worldsignals::WorldSignals;
use crate::systems::transition::CLICK_DELAY;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Handles key presses for every active menu.
pub fn menu_controller_observer(
    trigger: On<InputEvent>,
    mut query: Query<(Entity, &mut Menu)>,
    mut commands: Commands,
) {
    let action = trigger.event().action;
    for (entity, mut menu) in query.iter_mut() {
        if !menu.active {
            continue;
        }
        match action {
            InputAction::Up => menu.select_previous(),
            InputAction::Down => menu.select_next(),
            InputAction::Left | InputAction::Right => {
                let step = if action == InputAction::Left {
                    -menu.slider_step
                } else {
                    menu.slider_step
                };
                if let Some(MenuItemKind::Slider { target, value }) =
                    menu.selected().map(|item| item.kind.clone())
                {
                    commands.trigger(SliderChangedEvent {
                        menu: entity,
                        target,
                        value: value + step,
                    });
                }
            }
            InputAction::Confirm => {
                let Some(item) = menu.selected() else {
                    continue;
                };
                if let MenuItemKind::Button(menu_action) = &item.kind {
                    let event = MenuSelectionEvent {
                        menu: entity,
                        item_id: item.id.clone(),
                        action: menu_action.clone(),
                    };
                    menu.active = false;
                    commands.trigger(event);
                }
            }
            InputAction::Back | InputAction::Pause => {}
        }
    }
}

/// Apply a slider drag: the setter clamps and persists, the slider shows
/// the stored value.
pub fn slider_changed_observer(
    trigger: On<SliderChangedEvent>,
    mut audio: ResMut<AudioSession>,
    mut menus: Query<&mut Menu>,
) {
    let event = *trigger.event();
    let stored = match event.target {
        SliderTarget::Music => audio.set_music_volume(event.value),
        SliderTarget::Effects => audio.set_effects_volume(event.value),
    };
    debug!("slider {:?} -> {}", event.target, stored);
    match menus.get_mut(event.menu) {
        Ok(mut menu) => menu.set_slider_value(event.target, stored),
        Err(_) => warn!("slider_changed_observer: menu {:?} is gone", event.menu),
    }
}

/// Click, then run the button's action after a short real-time delay so
/// the click is audible.
pub fn menu_selection_observer(
    trigger: On<MenuSelectionEvent>,
    mut commands: Commands,
    menus: Query<&Menu>,
    mut audio: ResMut<AudioSession>,
    mut world_signals: ResMut<WorldSignals>,
) {
    let event = trigger.event();
    let click = menus
        .get(event.menu)
        .ok()
        .and_then(|menu| menu.click_fx.as_deref());
    audio.play_effect(click);
    world_signals.begin_transition();

    match &event.action {
        MenuAction::Play(scene) => {
            info!("menu '{}': loading scene '{}'", event.item_id, scene);
            world_signals.set_pending_scene(scene.clone());
            commands.spawn(Timer::new(CLICK_DELAY, signals::BEGIN_LOAD));
        }
        MenuAction::Quit => {
            info!("menu '{}': quitting", event.item_id);
            commands.spawn(Timer::new(CLICK_DELAY, signals::QUIT));
        }
    }
}
