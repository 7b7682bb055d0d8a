//! ECS resources made available to systems.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `audiosession` – process-wide music/effects channels and volumes
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `camerafollow` – look-ahead and smoothing parameters for the camera
//! - `gameconfig` – window and gameplay settings from `config.ini`
//! - `gamestate` – authoritative and pending high-level game state
//! - `handoff` – player position carried from one level visit to the next
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `preferences` – persisted float settings
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `worldsignals` – current/pending scene, transition and quit flags
//! - `worldtime` – simulation time, real time and the fixed-step accumulator
pub mod audio;
pub mod audiosession;
pub mod camera2d;
pub mod camerafollow;
pub mod gameconfig;
pub mod gamestate;
pub mod handoff;
pub mod input;
pub mod preferences;
pub mod systemsstore;
pub mod worldsignals;
pub mod worldtime;
