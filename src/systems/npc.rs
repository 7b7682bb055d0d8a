//! Reactive NPC behavior.
//!
//! Polls the distance to the player each frame. The first time it drops to
//! the trigger radius the NPC celebrates: music stops, the victory effect
//! plays and the overlay text scales in. From then on it hops forever.
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector2;

use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::reactivenpc::ReactiveNpc;
use crate::components::scale::Scale;
use crate::components::tween::{Easing, TweenScale};
use crate::resources::audiosession::AudioSession;
use crate::resources::worldtime::WorldTime;

pub fn reactive_npc_system(
    player: Query<&MapPosition, (With<Player>, Without<ReactiveNpc>)>,
    mut npcs: Query<(Entity, &mut ReactiveNpc, &mut MapPosition), Without<Player>>,
    mut texts: Query<&mut DynamicText>,
    mut audio: ResMut<AudioSession>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    let player_pos = player.iter().next().map(|p| p.pos);

    for (entity, mut npc, mut position) in npcs.iter_mut() {
        if npc.is_triggered() {
            npc.progress += time.delta;
            position.pos.y = npc.hop_y();
            continue;
        }

        let Some(player_pos) = player_pos else {
            continue;
        };
        let distance = (player_pos - position.pos).length();
        if !npc.try_trigger(distance) {
            continue;
        }

        info!("NPC {:?} triggered at distance {:.1}", entity, distance);
        audio.stop_music();
        audio.play_effect(npc.victory_fx.as_deref());

        let Some(overlay) = npc.overlay else {
            warn!("NPC {:?} has no overlay text to reveal", entity);
            continue;
        };
        match texts.get_mut(overlay) {
            Ok(mut text) => {
                text.show();
                commands.entity(overlay).insert((
                    Scale::uniform(0.0),
                    TweenScale::new(
                        Vector2 { x: 0.0, y: 0.0 },
                        Vector2 { x: 1.0, y: 1.0 },
                        npc.overlay_duration,
                    )
                    .with_easing(Easing::CubicOut),
                ));
            }
            Err(_) => warn!("NPC {:?} overlay {:?} is not a text entity", entity, overlay),
        }
    }
}
