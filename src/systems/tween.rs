//! Tween animation system.
//!
//! [`tween_scale_system`] animates [`Scale`] from [`TweenScale`] components,
//! reading the scaled delta from [`WorldTime`], so a paused level freezes the
//! overlay mid-grow.

use crate::components::scale::Scale;
use crate::components::tween::{Easing, TweenScale};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use raylib::math::Vector2;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0].
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
    }
}

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

pub fn tween_scale_system(time: Res<WorldTime>, mut query: Query<(&mut Scale, &mut TweenScale)>) {
    for (mut scale, mut tween) in query.iter_mut() {
        if !tween.playing {
            continue;
        }
        tween.time = (tween.time + time.delta).min(tween.duration.max(0.0));
        if tween.time >= tween.duration {
            tween.playing = false;
        }
        scale.scale = lerp_v2(tween.from, tween.to, ease(tween.easing, tween.progress()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easings_hit_endpoints() {
        for e in [Easing::Linear, Easing::CubicOut] {
            assert!(ease(e, 0.0).abs() < 1e-6);
            assert!((ease(e, 1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(ease(Easing::CubicOut, 0.25) > 0.5);
        assert!(ease(Easing::CubicOut, 0.5) > ease(Easing::Linear, 0.5));
    }

    #[test]
    fn tween_stops_at_target() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.3,
            ..Default::default()
        });
        let e = world
            .spawn((
                Scale::uniform(0.0),
                TweenScale::new(Vector2 { x: 0.0, y: 0.0 }, Vector2 { x: 1.0, y: 1.0 }, 0.4)
                    .with_easing(Easing::CubicOut),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(tween_scale_system);

        schedule.run(&mut world);
        assert!(world.get::<TweenScale>(e).unwrap().playing);
        let mid = world.get::<Scale>(e).unwrap().scale.x;
        assert!(mid > 0.75 && mid < 1.0);

        schedule.run(&mut world);
        assert!(!world.get::<TweenScale>(e).unwrap().playing);
        assert_eq!(world.get::<Scale>(e).unwrap().scale.x, 1.0);
    }

    #[test]
    fn paused_time_holds_the_tween() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.0));
        let e = world
            .spawn((
                Scale::uniform(0.0),
                TweenScale::new(Vector2 { x: 0.0, y: 0.0 }, Vector2 { x: 1.0, y: 1.0 }, 0.4),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(tween_scale_system);
        schedule.run(&mut world);
        assert_eq!(world.get::<Scale>(e).unwrap().scale.x, 0.0);
    }
}
