//! Gameplay integration tests: player movement, camera, NPC, hand-off.
//!
//! Every test builds a bare `World` with the resources the systems under test
//! need and runs them through a one-system `Schedule`, no window required.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use mossgate::components::dynamictext::DynamicText;
use mossgate::components::mapposition::MapPosition;
use mossgate::components::player::{Player, PlayerMovement};
use mossgate::components::reactivenpc::{NpcState, ReactiveNpc};
use mossgate::components::rigidbody::RigidBody;
use mossgate::components::scale::Scale;
use mossgate::components::timer::Timer;
use mossgate::components::tween::TweenScale;
use mossgate::events::audio::AudioCmd;
use mossgate::events::input::{InputAction, InputEvent};
use mossgate::events::timer::signals;
use mossgate::resources::audiosession::AudioSession;
use mossgate::resources::camera2d::Camera2DRes;
use mossgate::resources::camerafollow::CameraFollow;
use mossgate::resources::handoff::PositionHandoff;
use mossgate::resources::input::InputState;
use mossgate::resources::worldsignals::WorldSignals;
use mossgate::resources::worldtime::{FixedTime, WorldTime};
use mossgate::systems::camera::camera_follow_system;
use mossgate::systems::movement::movement;
use mossgate::systems::npc::reactive_npc_system;
use mossgate::systems::player::player_movement_system;
use mossgate::systems::transition::{leave_level_observer, pause_observer, restore_player_position};
use mossgate::systems::tween::tween_scale_system;

const EPSILON: f32 = 1e-4;
const STEP: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        delta,
        real_delta: delta,
        ..Default::default()
    });
    world.insert_resource(FixedTime::new(STEP));
    world.insert_resource(InputState::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(PositionHandoff::default());
    world.insert_resource(CameraFollow::default());
    world.insert_resource(Camera2DRes::centered(Vector2 { x: 0.0, y: 0.0 }, 640.0, 360.0));
    let mut audio = AudioSession::default();
    audio.drain();
    world.insert_resource(audio);
    world.init_resource::<Messages<AudioCmd>>();
    world
}

fn tick_camera(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_follow_system);
    schedule.run(world);
}

fn tick_npc(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(reactive_npc_system);
    schedule.run(world);
}

fn tick_tween(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(tween_scale_system);
    schedule.run(world);
}

fn tick_restore(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(restore_player_position);
    schedule.run(world);
}

fn fixed_step(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((player_movement_system, movement).chain());
    schedule.run(world);
}

fn spawn_player(world: &mut World, pos: Vector2) -> Entity {
    world
        .spawn((
            Player,
            PlayerMovement::new(100.0).with_footsteps("footsteps"),
            MapPosition::from_vec(pos),
            RigidBody::new(),
        ))
        .id()
}

fn hold_right(world: &mut World, held: bool) {
    world.resource_mut::<InputState>().right.set(held, false);
}

fn drain_audio(world: &mut World) -> Vec<AudioCmd> {
    world.resource_mut::<AudioSession>().drain()
}

fn count(cmds: &[AudioCmd], wanted: &AudioCmd) -> usize {
    cmds.iter().filter(|c| *c == wanted).count()
}

// ==================== PLAYER ====================

#[test]
fn footsteps_start_and_stop_only_on_edges() {
    let mut world = make_world(STEP);
    spawn_player(&mut world, Vector2 { x: 0.0, y: 0.0 });
    let footsteps = AudioCmd::PlayFx {
        id: "footsteps".into(),
    };

    let mut cmds = Vec::new();
    for held in [false, true, true, true, false, false, true] {
        hold_right(&mut world, held);
        fixed_step(&mut world);
        cmds.extend(drain_audio(&mut world));
    }

    let stop = AudioCmd::StopFx {
        id: "footsteps".into(),
    };
    assert_eq!(count(&cmds, &footsteps), 2);
    assert_eq!(count(&cmds, &stop), 1);
    assert_eq!(cmds[0], footsteps);
    assert_eq!(cmds[1], stop);
}

#[test]
fn stopping_walk_leaves_other_effects_playing() {
    let mut world = make_world(STEP);
    spawn_player(&mut world, Vector2 { x: 0.0, y: 0.0 });

    hold_right(&mut world, true);
    fixed_step(&mut world);
    world
        .resource_mut::<AudioSession>()
        .play_effect(Some("victory"));
    hold_right(&mut world, false);
    fixed_step(&mut world);

    let cmds = drain_audio(&mut world);
    assert_eq!(count(&cmds, &AudioCmd::StopAllFx), 0);
    assert!(!cmds.iter().any(|c| matches!(c, AudioCmd::StopFx { id } if id == "victory")));
    assert_eq!(
        world.resource::<AudioSession>().current_effect(),
        Some("victory")
    );
}

#[test]
fn player_moves_speed_times_step_per_fixed_step() {
    let mut world = make_world(STEP);
    let player = spawn_player(&mut world, Vector2 { x: 10.0, y: 5.0 });

    hold_right(&mut world, true);
    fixed_step(&mut world);
    fixed_step(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq(pos.x, 10.0 + 2.0 * 100.0 * STEP));
    assert!(approx_eq(pos.y, 5.0));
}

#[test]
fn releasing_input_stops_the_player_at_once() {
    let mut world = make_world(STEP);
    let player = spawn_player(&mut world, Vector2 { x: 0.0, y: 0.0 });

    hold_right(&mut world, true);
    fixed_step(&mut world);
    hold_right(&mut world, false);
    fixed_step(&mut world);
    let after_release = world.get::<MapPosition>(player).unwrap().pos;
    fixed_step(&mut world);

    assert_eq!(world.get::<MapPosition>(player).unwrap().pos, after_release);
    assert_eq!(
        world.get::<RigidBody>(player).unwrap().velocity,
        Vector2 { x: 0.0, y: 0.0 }
    );
}

#[test]
fn diagonal_input_is_not_faster() {
    let mut world = make_world(STEP);
    let player = spawn_player(&mut world, Vector2 { x: 0.0, y: 0.0 });
    {
        let mut input = world.resource_mut::<InputState>();
        input.right.set(true, false);
        input.down.set(true, false);
    }
    fixed_step(&mut world);

    let moved = world.get::<MapPosition>(player).unwrap().pos.length();
    assert!(approx_eq(moved, 100.0 * STEP));
}

// ==================== CAMERA ====================

#[test]
fn camera_moves_toward_look_ahead_target() {
    let mut world = make_world(0.1);
    spawn_player(&mut world, Vector2 { x: 100.0, y: 100.0 });

    tick_camera(&mut world);

    let follow = *world.resource::<CameraFollow>();
    let target = follow.target(Vector2 { x: 100.0, y: 100.0 });
    let camera = world.resource::<Camera2DRes>().0.target;
    // Half of the way with smoothing 5 and dt 0.1.
    assert!(approx_eq(camera.x, target.x * 0.5));
    assert!(approx_eq(camera.y, target.y * 0.5));
}

#[test]
fn camera_holds_still_inside_dead_zone() {
    let mut world = make_world(0.1);
    spawn_player(&mut world, Vector2 { x: 100.0, y: 100.0 });
    let target = world
        .resource::<CameraFollow>()
        .target(Vector2 { x: 100.0, y: 100.0 });
    let parked = Vector2 {
        x: target.x + 0.3,
        y: target.y,
    };
    world.resource_mut::<Camera2DRes>().0.target = parked;

    tick_camera(&mut world);

    assert_eq!(world.resource::<Camera2DRes>().0.target, parked);
}

#[test]
fn camera_keeps_facing_after_input_stops() {
    let mut world = make_world(0.1);
    spawn_player(&mut world, Vector2 { x: 0.0, y: 0.0 });

    world.resource_mut::<InputState>().left.set(true, false);
    fixed_step(&mut world);
    tick_camera(&mut world);
    assert_eq!(world.resource::<CameraFollow>().facing, -1.0);

    world.resource_mut::<InputState>().left.set(false, false);
    fixed_step(&mut world);
    tick_camera(&mut world);
    assert_eq!(world.resource::<CameraFollow>().facing, -1.0);
}

// ==================== NPC ====================

fn spawn_npc(world: &mut World, pos: Vector2) -> (Entity, Entity) {
    let overlay = world
        .spawn(DynamicText::new("Found!", 32.0, raylib::prelude::Color::GOLD).hidden())
        .id();
    let npc = world
        .spawn((
            MapPosition::from_vec(pos),
            ReactiveNpc::new(20.0, pos.y)
                .with_victory_fx("victory")
                .with_overlay(overlay),
        ))
        .id();
    (npc, overlay)
}

#[test]
fn npc_stays_idle_while_player_is_far() {
    let mut world = make_world(STEP);
    spawn_player(&mut world, Vector2 { x: 0.0, y: 0.0 });
    let (npc, overlay) = spawn_npc(&mut world, Vector2 { x: 100.0, y: 0.0 });
    world.resource_mut::<AudioSession>().play_music("level_theme", true);
    drain_audio(&mut world);

    tick_npc(&mut world);

    assert_eq!(world.get::<ReactiveNpc>(npc).unwrap().state, NpcState::Idle);
    assert!(!world.get::<DynamicText>(overlay).unwrap().visible);
    assert!(drain_audio(&mut world).is_empty());
}

#[test]
fn npc_reaction_fires_exactly_once() {
    let mut world = make_world(STEP);
    spawn_player(&mut world, Vector2 { x: 0.0, y: 0.0 });
    let (npc, overlay) = spawn_npc(&mut world, Vector2 { x: 20.0, y: 0.0 });
    world.resource_mut::<AudioSession>().play_music("level_theme", true);
    drain_audio(&mut world);

    let mut cmds = Vec::new();
    for _ in 0..5 {
        tick_npc(&mut world);
        cmds.extend(drain_audio(&mut world));
    }

    assert_eq!(
        world.get::<ReactiveNpc>(npc).unwrap().state,
        NpcState::Triggered
    );
    assert_eq!(
        cmds,
        vec![
            AudioCmd::StopMusic {
                id: "level_theme".into()
            },
            AudioCmd::PlayFx {
                id: "victory".into()
            },
        ]
    );
    assert!(world.resource::<AudioSession>().current_music().is_none());
    assert!(world.get::<DynamicText>(overlay).unwrap().visible);
    assert!(world.get::<TweenScale>(overlay).is_some());
}

#[test]
fn npc_does_not_untrigger_when_player_leaves() {
    let mut world = make_world(STEP);
    let player = spawn_player(&mut world, Vector2 { x: 0.0, y: 0.0 });
    let (npc, _) = spawn_npc(&mut world, Vector2 { x: 10.0, y: 0.0 });

    tick_npc(&mut world);
    world.get_mut::<MapPosition>(player).unwrap().pos = Vector2 { x: -500.0, y: 0.0 };
    tick_npc(&mut world);

    assert_eq!(
        world.get::<ReactiveNpc>(npc).unwrap().state,
        NpcState::Triggered
    );
}

#[test]
fn npc_hops_but_never_below_rest() {
    let mut world = make_world(STEP);
    spawn_player(&mut world, Vector2 { x: 0.0, y: 50.0 });
    let (npc, _) = spawn_npc(&mut world, Vector2 { x: 5.0, y: 50.0 });

    let mut highest = 50.0_f32;
    for _ in 0..240 {
        tick_npc(&mut world);
        let y = world.get::<MapPosition>(npc).unwrap().pos.y;
        assert!(y <= 50.0 + EPSILON, "hop went below rest: {y}");
        highest = highest.min(y);
    }
    let jump_height = world.get::<ReactiveNpc>(npc).unwrap().jump_height;
    assert!(highest < 50.0);
    assert!(highest >= 50.0 - jump_height - EPSILON);
}

#[test]
fn npc_overlay_scales_in_to_full_size() {
    let mut world = make_world(0.1);
    spawn_player(&mut world, Vector2 { x: 0.0, y: 0.0 });
    let (_, overlay) = spawn_npc(&mut world, Vector2 { x: 0.0, y: 0.0 });

    tick_npc(&mut world);
    assert_eq!(world.get::<Scale>(overlay).unwrap().scale.x, 0.0);

    let mut last = 0.0;
    for _ in 0..10 {
        tick_tween(&mut world);
        let s = world.get::<Scale>(overlay).unwrap().scale.x;
        assert!(s >= last);
        last = s;
    }
    assert!(approx_eq(last, 1.0));
}

// ==================== HAND-OFF ====================

#[test]
fn restore_moves_player_and_consumes_handoff() {
    let mut world = make_world(STEP);
    let player = spawn_player(&mut world, Vector2 { x: 80.0, y: 200.0 });
    world
        .resource_mut::<PositionHandoff>()
        .save(Vector2 { x: 300.0, y: 150.0 });

    tick_restore(&mut world);
    assert_eq!(
        world.get::<MapPosition>(player).unwrap().pos,
        Vector2 { x: 300.0, y: 150.0 }
    );
    assert!(!world.resource::<PositionHandoff>().is_pending());

    world.get_mut::<MapPosition>(player).unwrap().pos = Vector2 { x: 1.0, y: 2.0 };
    tick_restore(&mut world);
    assert_eq!(
        world.get::<MapPosition>(player).unwrap().pos,
        Vector2 { x: 1.0, y: 2.0 }
    );
}

#[test]
fn restore_without_player_keeps_handoff_pending() {
    let mut world = make_world(STEP);
    world
        .resource_mut::<PositionHandoff>()
        .save(Vector2 { x: 3.0, y: 4.0 });

    tick_restore(&mut world);

    assert!(world.resource::<PositionHandoff>().is_pending());
}

#[test]
fn restore_snaps_camera_to_player() {
    let mut world = make_world(STEP);
    spawn_player(&mut world, Vector2 { x: 0.0, y: 0.0 });
    let saved = Vector2 { x: 400.0, y: 120.0 };
    world.resource_mut::<PositionHandoff>().save(saved);

    tick_restore(&mut world);

    let expected = world.resource::<CameraFollow>().target(saved);
    assert_eq!(world.resource::<Camera2DRes>().0.target, expected);
}

// ==================== LEAVING / PAUSE ====================

fn level_world() -> World {
    let mut world = make_world(STEP);
    world.resource_mut::<WorldSignals>().set_scene("level");
    world.add_observer(leave_level_observer);
    world.add_observer(pause_observer);
    world.flush();
    world
}

#[test]
fn leaving_saves_position_and_unpauses() {
    let mut world = level_world();
    spawn_player(&mut world, Vector2 { x: 222.0, y: 111.0 });
    world.resource_mut::<WorldTime>().time_scale = 0.0;

    world.trigger(InputEvent {
        action: InputAction::Back,
    });
    world.flush();

    assert_eq!(
        world.resource_mut::<PositionHandoff>().take(),
        Some(Vector2 { x: 222.0, y: 111.0 })
    );
    assert_eq!(world.resource::<WorldTime>().time_scale, 1.0);
    assert!(world.resource::<WorldSignals>().transition_pending());
    assert_eq!(
        drain_audio(&mut world),
        vec![AudioCmd::PlayFx { id: "click".into() }]
    );
    let mut timers = world.query::<&Timer>();
    let pending: Vec<_> = timers.iter(&world).map(|t| t.signal.clone()).collect();
    assert_eq!(pending, vec![signals::LEAVE_LEVEL.to_string()]);
}

#[test]
fn leaving_twice_schedules_one_transition() {
    let mut world = level_world();
    spawn_player(&mut world, Vector2 { x: 0.0, y: 0.0 });

    for _ in 0..3 {
        world.trigger(InputEvent {
            action: InputAction::Back,
        });
        world.flush();
    }

    let mut timers = world.query::<&Timer>();
    assert_eq!(timers.iter(&world).count(), 1);
}

#[test]
fn pause_toggles_time_scale_in_level_only() {
    let mut world = level_world();

    world.trigger(InputEvent {
        action: InputAction::Pause,
    });
    assert!(world.resource::<WorldTime>().is_paused());
    world.trigger(InputEvent {
        action: InputAction::Pause,
    });
    assert!(!world.resource::<WorldTime>().is_paused());

    world.resource_mut::<WorldSignals>().set_scene("menu");
    world.trigger(InputEvent {
        action: InputAction::Pause,
    });
    assert!(!world.resource::<WorldTime>().is_paused());
}
