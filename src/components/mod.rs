//! ECS components for entities.
//!
//! Submodules overview:
//! - [`dynamictext`] – text drawn with the default font, optionally hidden
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`menu`] – main menu rows: buttons and volume sliders
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`player`] – player marker and movement state with walking edges
//! - [`reactivenpc`] – one-shot proximity celebration
//! - [`rigidbody`] – velocity integrated by the fixed-step movement system
//! - [`scale`] – draw-time scale factor
//! - [`screenposition`] – screen-space position for UI elements
//! - [`shape`] – flat rectangle stand-in for sprites
//! - [`timer`] – real-time one-shot delay
//! - [`tween`] – eased scale animation
//! - [`zindex`] – draw order hint

pub mod dynamictext;
pub mod mapposition;
pub mod menu;
pub mod persistent;
pub mod player;
pub mod reactivenpc;
pub mod rigidbody;
pub mod scale;
pub mod screenposition;
pub mod shape;
pub mod timer;
pub mod tween;
pub mod zindex;
