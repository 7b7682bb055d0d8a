//! Time update system.
//!
//! Updates the shared [`WorldTime`] resource once per frame and feeds the
//! [`FixedTime`] accumulator.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::{FixedTime, WorldTime};

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds. It is stored as
/// `real_delta`; `delta` and `elapsed` get the scaled value.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.real_delta = dt;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Number of fixed physics steps to run this frame.
///
/// Consumes the scaled delta of the current frame, so a paused game runs
/// none. Returns 0 when no [`FixedTime`] resource exists.
pub fn fixed_steps_due(world: &mut World) -> u32 {
    let delta = world.resource::<WorldTime>().delta;
    match world.get_resource_mut::<FixedTime>() {
        Some(mut fixed) => fixed.accumulate(delta),
        None => 0,
    }
}
