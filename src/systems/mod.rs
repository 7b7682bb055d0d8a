//! Game systems.
//!
//! Submodules overview
//! - [`audio`] – audio thread and the bridge systems around it
//! - [`camera`] – smoothed look-ahead camera follow
//! - [`gameconfig`] – apply window settings when the config changes
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`menu`] – menu navigation, sliders and button actions
//! - [`movement`] – integrate positions from velocities, once per fixed step
//! - [`npc`] – reactive NPC trigger and hop
//! - [`player`] – input to velocity, footstep edges
//! - [`render`] – draw world and UI using Raylib
//! - [`time`] – update simulation time and the fixed-step accumulator
//! - [`timer`] – real-time delays
//! - [`transition`] – leaving the level, pausing, timer actions, hand-off restore
//! - [`tween`] – eased scale animation

pub mod audio;
pub mod camera;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod menu;
pub mod movement;
pub mod npc;
pub mod player;
pub mod render;
pub mod time;
pub mod timer;
pub mod transition;
pub mod tween;
