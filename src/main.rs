//! Mossgate main entry point.
//!
//! A small 2D puzzle-adventure built with:
//! - **raylib** for windowing, drawing, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the preference store, open the window
//! 2. Insert process-wide resources (audio session, hand-off, camera)
//! 3. Register observers and one-shot systems, enter the Setup state
//! 4. Every frame:
//!    - read input
//!    - run as many fixed physics steps as the accumulated time allows
//!    - camera, NPC, timers, tweens, audio bridge
//!    - render
//! 5. Shut the audio thread down on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use mossgate::components::persistent::Persistent;
use mossgate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use mossgate::game;
use mossgate::resources::audio::{setup_audio, shutdown_audio};
use mossgate::resources::audiosession::AudioSession;
use mossgate::resources::camera2d::Camera2DRes;
use mossgate::resources::camerafollow::CameraFollow;
use mossgate::resources::gameconfig::GameConfig;
use mossgate::resources::gamestate::{GameState, GameStates, NextGameState};
use mossgate::resources::handoff::PositionHandoff;
use mossgate::resources::input::InputState;
use mossgate::resources::preferences::Preferences;
use mossgate::resources::systemsstore::SystemsStore;
use mossgate::resources::worldsignals::WorldSignals;
use mossgate::resources::worldtime::{FixedTime, WorldTime};
use mossgate::systems::audio::{
    flush_audio_session, forward_audio_cmds, poll_audio_messages, track_audio_messages,
    update_bevy_audio_cmds, update_bevy_audio_messages,
};
use mossgate::systems::camera::camera_follow_system;
use mossgate::systems::gameconfig::apply_gameconfig_changes;
use mossgate::systems::gamestate::{check_pending_state, state_is_playing};
use mossgate::systems::input::update_input_state;
use mossgate::systems::menu::{
    menu_controller_observer, menu_selection_observer, slider_changed_observer,
};
use mossgate::systems::movement::movement;
use mossgate::systems::npc::reactive_npc_system;
use mossgate::systems::player::player_movement_system;
use mossgate::systems::render::render_system;
use mossgate::systems::time::{fixed_steps_due, update_world_time};
use mossgate::systems::timer::update_timers;
use mossgate::systems::transition::{
    leave_level_observer, pause_observer, restore_player_position, timer_observer,
};
use mossgate::systems::tween::tween_scale_system;

/// Mossgate, a small 2D puzzle-adventure.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Path of the preference store (overrides the config file).
    #[arg(long, value_name = "PATH")]
    preferences: Option<PathBuf>,

    /// Forget stored volumes before starting.
    #[arg(long)]
    reset_preferences: bool,
}

/// Register a one-shot system that survives scene switches.
fn register_persistent<M>(
    world: &mut World,
    store: &mut SystemsStore,
    name: &str,
    system: impl IntoSystem<(), (), M> + 'static,
) {
    let id = world.register_system(system);
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(name, id);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(path) = cli.preferences {
        config.preferences_path = path;
    }
    if cli.reset_preferences {
        match Preferences::clear(&config.preferences_path) {
            Ok(()) => log::info!("Preferences reset"),
            Err(e) => log::warn!("{}", e),
        }
    }

    log::info!("Starting Mossgate");
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Mossgate")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape leaves the level, it must not close the window
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(FixedTime::new(config.fixed_timestep));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(PositionHandoff::default());
    world.insert_resource(CameraFollow::default());
    world.insert_resource(Camera2DRes::centered(
        game::PLAYER_SPAWN,
        window_width as f32,
        window_height as f32,
    ));
    world.insert_resource(AudioSession::new(Preferences::open(
        &config.preferences_path,
    )));
    world.insert_resource(config);

    setup_audio(&mut world);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));

    // Registered systems are entities; mark them Persistent so scene
    // switches leave them alone.
    let mut systems_store = SystemsStore::new();
    register_persistent(&mut world, &mut systems_store, "setup", game::setup);
    register_persistent(&mut world, &mut systems_store, "enter_play", game::enter_play);
    register_persistent(&mut world, &mut systems_store, "quit_game", game::quit_game);
    register_persistent(&mut world, &mut systems_store, "switch_scene", game::switch_scene);
    register_persistent(
        &mut world,
        &mut systems_store,
        "restore_player_position",
        restore_player_position,
    );
    world.insert_resource(systems_store);

    world.spawn((Observer::new(menu_controller_observer), Persistent));
    world.spawn((Observer::new(slider_changed_observer), Persistent));
    world.spawn((Observer::new(menu_selection_observer), Persistent));
    world.spawn((Observer::new(leave_level_observer), Persistent));
    world.spawn((Observer::new(pause_observer), Persistent));
    world.spawn((Observer::new(timer_observer), Persistent));
    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});

    let mut pre_update = Schedule::default();
    pre_update.add_systems(
        (apply_gameconfig_changes, update_input_state, check_pending_state).chain(),
    );

    let mut fixed = Schedule::default();
    fixed.add_systems((player_movement_system, movement).chain());

    let mut update = Schedule::default();
    update.add_systems(update_timers);
    update.add_systems(camera_follow_system.run_if(state_is_playing));
    update.add_systems(reactive_npc_system.run_if(state_is_playing));
    update.add_systems(tween_scale_system);
    update.add_systems(
        // audio systems must be together and after gameplay
        (
            flush_audio_session,
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            track_audio_messages,
        )
            .chain()
            .after(reactive_npc_system)
            .after(update_timers),
    );
    update.add_systems(
        render_system
            .after(camera_follow_system)
            .after(reactive_npc_system)
            .after(tween_scale_system),
    );

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().quit_requested()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        pre_update.run(&mut world);
        for _ in 0..fixed_steps_due(&mut world) {
            fixed.run(&mut world);
        }
        update.run(&mut world);

        world.clear_trackers();
    }
    shutdown_audio(&mut world);
}
