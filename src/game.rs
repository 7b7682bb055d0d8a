//! Game setup and scene management.
//!
//! State hooks (`setup`, `enter_play`, `quit_game`) and the scene switcher
//! are registered in [`SystemsStore`] by `main` and run as one-shot
//! systems. Two scenes exist:
//!
//! - **menu**: Play / Music / Effects / Quit
//! - **level**: the player, the reactive NPC and some scenery
//!
//! Scene entities are everything without [`Persistent`]; switching scenes
//! despawns them all and spawns the new set.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::{Color, Vector2};

use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::menu::{Menu, MenuAction, MenuItem, SliderTarget};
use crate::components::persistent::Persistent;
use crate::components::player::{Player, PlayerMovement};
use crate::components::reactivenpc::ReactiveNpc;
use crate::components::rigidbody::RigidBody;
use crate::components::screenposition::ScreenPosition;
use crate::components::shape::Shape;
use crate::components::zindex::ZIndex;
use crate::resources::audiosession::AudioSession;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::camerafollow::CameraFollow;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

pub const MENU_SCENE: &str = "menu";
pub const LEVEL_SCENE: &str = "level";

pub const UI_CLICK_FX: &str = "click";
pub const FOOTSTEP_FX: &str = "footsteps";
pub const VICTORY_FX: &str = "victory";
pub const MENU_THEME: &str = "menu_theme";
pub const LEVEL_THEME: &str = "level_theme";

/// Where the player appears when no hand-off is pending.
pub const PLAYER_SPAWN: Vector2 = Vector2 { x: 80.0, y: 200.0 };
pub const NPC_SPAWN: Vector2 = Vector2 { x: 520.0, y: 200.0 };
const NPC_TRIGGER_RADIUS: f32 = 36.0;

/// Queue the audio assets a scene needs. The audio thread loads them in the
/// background.
pub fn preload_scene(scene: &str, audio: &mut AudioSession) {
    match scene {
        MENU_SCENE => audio.load_music(MENU_THEME, "./assets/audio/menu_theme.ogg"),
        LEVEL_SCENE => audio.load_music(LEVEL_THEME, "./assets/audio/level_theme.ogg"),
        other => warn!("preload_scene: unknown scene '{}'", other),
    }
}

/// Setup hook: load shared effects and the first scene's assets, then play.
pub fn setup(mut audio: ResMut<AudioSession>, mut next_state: ResMut<NextGameState>) {
    audio.load_effect(UI_CLICK_FX, "./assets/audio/click.wav");
    audio.load_effect(FOOTSTEP_FX, "./assets/audio/footsteps.wav");
    audio.load_effect(VICTORY_FX, "./assets/audio/victory.wav");
    preload_scene(MENU_SCENE, &mut audio);
    next_state.set(GameStates::Playing);
}

/// Playing hook: open the menu.
pub fn enter_play(
    mut commands: Commands,
    mut world_signals: ResMut<WorldSignals>,
    systems_store: Res<SystemsStore>,
) {
    world_signals.set_scene(MENU_SCENE);
    systems_store.run("switch_scene", &mut commands);
}

/// Quitting hook: tell the main loop to stop.
pub fn quit_game(mut world_signals: ResMut<WorldSignals>) {
    info!("Quitting game");
    world_signals.request_quit();
}

/// Tear down the current scene and build the one named by
/// `WorldSignals["scene"]`.
#[allow(clippy::too_many_arguments)]
pub fn switch_scene(
    mut commands: Commands,
    scene_entities: Query<Entity, Without<Persistent>>,
    mut world_signals: ResMut<WorldSignals>,
    mut audio: ResMut<AudioSession>,
    mut time: ResMut<WorldTime>,
    mut camera: ResMut<Camera2DRes>,
    follow: Res<CameraFollow>,
    config: Res<GameConfig>,
    systems_store: Res<SystemsStore>,
) {
    for entity in scene_entities.iter() {
        commands.entity(entity).try_despawn();
    }
    world_signals.end_transition();
    time.time_scale = 1.0;

    let scene = world_signals.scene().unwrap_or(MENU_SCENE).to_string();
    info!("Switching to scene '{}'", scene);

    match scene.as_str() {
        MENU_SCENE => {
            spawn_menu_scene(&mut commands, &audio);
            audio.play_music(MENU_THEME, true);
        }
        LEVEL_SCENE => {
            spawn_level_scene(&mut commands, config.player_speed);
            camera.0.target = follow.target(PLAYER_SPAWN);
            audio.play_music(LEVEL_THEME, true);
            systems_store.run("restore_player_position", &mut commands);
        }
        other => warn!("switch_scene: unknown scene '{}'", other),
    }
}

/// Spawn the title and the menu. Sliders start at the session volumes, so
/// the menu is usable as soon as the spawn is applied.
pub fn spawn_menu_scene(commands: &mut Commands, audio: &AudioSession) {
    commands.spawn((
        ScreenPosition::new(480.0, 60.0),
        DynamicText::new("MOSSGATE", 48.0, Color::LIME),
    ));
    commands.spawn(
        Menu::new(
            vec![
                MenuItem::button("play", "Play", MenuAction::Play(LEVEL_SCENE.into())),
                MenuItem::slider("music", "Music", SliderTarget::Music),
                MenuItem::slider("effects", "Effects", SliderTarget::Effects),
                MenuItem::button("quit", "Quit", MenuAction::Quit),
            ],
            Vector2 { x: 380.0, y: 180.0 },
        )
        .with_click_fx(UI_CLICK_FX)
        .with_colors(Color::RAYWHITE, Color::GOLD)
        .with_slider_value(SliderTarget::Music, audio.music_volume())
        .with_slider_value(SliderTarget::Effects, audio.effects_volume()),
    );
}

pub fn spawn_level_scene(commands: &mut Commands, player_speed: f32) {
    // Ground strip and a few stones.
    commands.spawn((
        MapPosition::new(320.0, 240.0),
        Shape::new(1200.0, 40.0, Color::DARKGREEN),
        ZIndex(-10),
    ));
    for (x, w, h) in [(200.0, 30.0, 18.0), (360.0, 50.0, 24.0), (700.0, 40.0, 30.0)] {
        commands.spawn((
            MapPosition::new(x, 200.0),
            Shape::new(w, h, Color::GRAY),
            ZIndex(-5),
        ));
    }

    let overlay = commands
        .spawn((
            ScreenPosition::new(480.0, 80.0),
            DynamicText::new("You found the keeper!", 32.0, Color::GOLD).hidden(),
        ))
        .id();

    commands.spawn((
        MapPosition::from_vec(NPC_SPAWN),
        Shape::new(18.0, 30.0, Color::ORANGE),
        ZIndex(0),
        ReactiveNpc::new(NPC_TRIGGER_RADIUS, NPC_SPAWN.y)
            .with_jump(10.0, 7.0)
            .with_victory_fx(VICTORY_FX)
            .with_overlay(overlay),
    ));

    commands.spawn((
        Player,
        PlayerMovement::new(player_speed).with_footsteps(FOOTSTEP_FX),
        MapPosition::from_vec(PLAYER_SPAWN),
        RigidBody::new(),
        Shape::new(16.0, 28.0, Color::SKYBLUE),
        ZIndex(1),
    ));
}
