//! Fixed-step position integration.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::FixedTime;

/// Advance every body by one fixed step: `pos += velocity * step`.
pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, fixed: Res<FixedTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.pos = position.pos + rigidbody.velocity.scale_by(fixed.step);
    }
}
