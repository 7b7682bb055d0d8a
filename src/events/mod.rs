//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`input`] – logical key presses
//! - [`menu`] – button selections and slider drags
//! - [`timer`] – real-time delays expiring
pub mod audio;
pub mod gamestate;
pub mod input;
pub mod menu;
pub mod timer;
