//! Proximity-triggered NPC celebration.
//!
//! A [`ReactiveNpc`] waits in [`NpcState::Idle`] until the player comes
//! within `trigger_radius`, then switches to [`NpcState::Triggered`] for
//! good: music stops, a victory effect plays, the overlay text scales in and
//! the NPC keeps hopping. See [`crate::systems::npc`].

use bevy_ecs::prelude::{Component, Entity};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NpcState {
    #[default]
    Idle,
    /// Terminal.
    Triggered,
}

#[derive(Component, Clone, Debug)]
pub struct ReactiveNpc {
    pub trigger_radius: f32,
    pub state: NpcState,
    /// Seconds spent in `Triggered`.
    pub progress: f32,
    /// Peak height of a hop in world units.
    pub jump_height: f32,
    /// Angular speed of the hop wave; one hop takes `2π / jump_speed` seconds.
    pub jump_speed: f32,
    /// Ground level; hops never go below it.
    pub rest_y: f32,
    pub victory_fx: Option<String>,
    /// Text revealed on trigger.
    pub overlay: Option<Entity>,
    /// Seconds the overlay takes to scale in.
    pub overlay_duration: f32,
}

impl ReactiveNpc {
    pub fn new(trigger_radius: f32, rest_y: f32) -> Self {
        Self {
            trigger_radius,
            state: NpcState::Idle,
            progress: 0.0,
            jump_height: 8.0,
            jump_speed: 6.0,
            rest_y,
            victory_fx: None,
            overlay: None,
            overlay_duration: 0.4,
        }
    }

    pub fn with_jump(mut self, height: f32, speed: f32) -> Self {
        self.jump_height = height;
        self.jump_speed = speed;
        self
    }

    pub fn with_victory_fx(mut self, fx: impl Into<String>) -> Self {
        self.victory_fx = Some(fx.into());
        self
    }

    pub fn with_overlay(mut self, overlay: Entity) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn is_triggered(&self) -> bool {
        self.state == NpcState::Triggered
    }

    /// Arm-once check. Returns true only on the Idle → Triggered transition.
    pub fn try_trigger(&mut self, distance_to_player: f32) -> bool {
        if self.state == NpcState::Idle && distance_to_player <= self.trigger_radius {
            self.state = NpcState::Triggered;
            self.progress = 0.0;
            return true;
        }
        false
    }

    /// Vertical position for the current progress (screen y grows downward).
    pub fn hop_y(&self) -> f32 {
        let lift = (self.progress * self.jump_speed).sin() * self.jump_height;
        self.rest_y - lift.max(0.0)
    }

    /// Seconds per hop.
    pub fn hop_period(&self) -> f32 {
        std::f32::consts::TAU / self.jump_speed
    }
}
