//! Real-time delay countdown.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Tick every [`Timer`] with the unscaled delta; fire and despawn the expired ones.
pub fn update_timers(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        if timer.tick(time.real_delta) {
            debug!("timer '{}' expired", timer.signal);
            commands.trigger(TimerEvent {
                entity,
                signal: timer.signal.clone(),
            });
            commands.entity(entity).try_despawn();
        }
    }
}
