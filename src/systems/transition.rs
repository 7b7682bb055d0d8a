//! Scene transitions and the player position hand-off.
//!
//! Leaving the level saves the player position into [`PositionHandoff`],
//! resets time scaling, clicks, and goes back to the menu after
//! [`CLICK_DELAY`] real seconds. The next time the level is spawned,
//! [`restore_player_position`] puts the player back, once.
//!
//! Every delayed step is a [`Timer`] entity whose [`TimerEvent`] lands in
//! [`timer_observer`].

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::timer::Timer;
use crate::events::input::{InputAction, InputEvent};
use crate::events::timer::{TimerEvent, signals};
use crate::game::{LEVEL_SCENE, MENU_SCENE, UI_CLICK_FX, preload_scene};
use crate::resources::audiosession::AudioSession;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::camerafollow::CameraFollow;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::handoff::PositionHandoff;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

/// Real seconds between a click and the action it triggers.
pub const CLICK_DELAY: f32 = 0.25;
/// Real seconds a loaded scene is held before it is activated.
pub const LOAD_HOLD: f32 = 0.5;

/// Escape in the level: save the player position and head back to the menu.
#[allow(clippy::too_many_arguments)]
pub fn leave_level_observer(
    trigger: On<InputEvent>,
    player: Query<&MapPosition, With<Player>>,
    mut handoff: ResMut<PositionHandoff>,
    mut time: ResMut<WorldTime>,
    mut audio: ResMut<AudioSession>,
    mut world_signals: ResMut<WorldSignals>,
    mut commands: Commands,
) {
    if trigger.event().action != InputAction::Back
        || !world_signals.in_scene(LEVEL_SCENE)
        || world_signals.transition_pending()
    {
        return;
    }
    match player.iter().next() {
        Some(position) => {
            debug!("saving player position ({}, {})", position.pos.x, position.pos.y);
            handoff.save(position.pos);
        }
        None => warn!("leave_level_observer: no player to save"),
    }
    time.time_scale = 1.0;
    audio.play_effect(Some(UI_CLICK_FX));
    world_signals.begin_transition();
    commands.spawn(Timer::new(CLICK_DELAY, signals::LEAVE_LEVEL));
}

/// P in the level toggles between paused and normal speed.
pub fn pause_observer(
    trigger: On<InputEvent>,
    mut time: ResMut<WorldTime>,
    world_signals: Res<WorldSignals>,
) {
    if trigger.event().action != InputAction::Pause
        || !world_signals.in_scene(LEVEL_SCENE)
        || world_signals.transition_pending()
    {
        return;
    }
    time.time_scale = if time.is_paused() { 1.0 } else { 0.0 };
    info!("time scale -> {}", time.time_scale);
}

fn switch_to(
    scene: &str,
    world_signals: &mut WorldSignals,
    commands: &mut Commands,
    systems_store: &SystemsStore,
) {
    world_signals.set_scene(scene);
    systems_store.run("switch_scene", commands);
}

/// Perform the action named by an expired timer.
pub fn timer_observer(
    trigger: On<TimerEvent>,
    mut commands: Commands,
    mut world_signals: ResMut<WorldSignals>,
    mut next_state: ResMut<NextGameState>,
    mut audio: ResMut<AudioSession>,
    systems_store: Res<SystemsStore>,
) {
    match trigger.event().signal.as_str() {
        signals::BEGIN_LOAD => {
            let Some(scene) = world_signals.pending_scene().map(str::to_owned) else {
                warn!("begin_load without a pending scene");
                world_signals.end_transition();
                return;
            };
            info!("loading scene '{}'", scene);
            preload_scene(&scene, &mut audio);
            commands.spawn(Timer::new(LOAD_HOLD, signals::ACTIVATE_SCENE));
        }
        signals::ACTIVATE_SCENE => match world_signals.take_pending_scene() {
            Some(scene) => switch_to(&scene, &mut world_signals, &mut commands, &systems_store),
            None => warn!("activate_scene without a pending scene"),
        },
        signals::LEAVE_LEVEL => {
            switch_to(MENU_SCENE, &mut world_signals, &mut commands, &systems_store)
        }
        signals::QUIT => next_state.set(GameStates::Quitting),
        other => warn!("unknown timer signal '{}'", other),
    }
}

/// Move the freshly spawned player to the saved position, if one is pending.
///
/// Consumes the hand-off, so calling it again is a no-op. Without a player
/// entity the hand-off is left pending.
pub fn restore_player_position(
    mut handoff: ResMut<PositionHandoff>,
    mut player: Query<&mut MapPosition, With<Player>>,
    follow: Option<Res<CameraFollow>>,
    camera: Option<ResMut<Camera2DRes>>,
) {
    if !handoff.is_pending() {
        return;
    }
    let Some(mut position) = player.iter_mut().next() else {
        warn!("restore_player_position: no player in scene");
        return;
    };
    let Some(saved) = handoff.take() else {
        return;
    };
    info!("restoring player to ({}, {})", saved.x, saved.y);
    position.pos = saved;
    if let (Some(follow), Some(mut camera)) = (follow, camera) {
        camera.0.target = follow.target(saved);
    }
}
