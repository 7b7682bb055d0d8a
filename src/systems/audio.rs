//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`] messages, emitting [`AudioMessage`] responses.
//! - [`flush_audio_session`] moves commands queued on the
//!   [`AudioSession`] into the ECS message queue.
//! - [`forward_audio_cmds`] sends them over the channel to the thread.
//! - [`poll_audio_messages`] non-blockingly drains the thread's replies and
//!   [`track_audio_messages`] feeds them back to the session.
//!
//! Raylib audio calls stay on a single thread while the game thread talks to
//! it through lock-free channels.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use crate::resources::audiosession::AudioSession;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Move the session outbox into `Messages<AudioCmd>`.
pub fn flush_audio_session(mut session: ResMut<AudioSession>, mut writer: MessageWriter<AudioCmd>) {
    if session.pending().is_empty() {
        return;
    }
    writer.write_batch(session.drain());
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Option<Res<AudioBridge>>, mut reader: MessageReader<AudioCmd>) {
    let Some(bridge) = bridge else {
        // Without an audio thread the commands are dropped.
        reader.clear();
        return;
    };
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Drain any pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(
    bridge: Option<Res<AudioBridge>>,
    mut writer: MessageWriter<AudioMessage>,
) {
    if let Some(bridge) = bridge {
        writer.write_batch(bridge.rx_msg.try_iter());
    }
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Let the session forget channels the audio thread reports as idle.
pub fn track_audio_messages(
    mut reader: MessageReader<AudioMessage>,
    mut session: ResMut<AudioSession>,
) {
    for msg in reader.read() {
        session.observe(msg);
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns every `Music` and `Sound` handle, reacts to [`AudioCmd`] inputs and
/// reports state changes as [`AudioMessage`]s. Music streams are pumped
/// between command batches. Returns after [`AudioCmd::Shutdown`].
///
/// When no audio device is available the thread keeps draining commands so
/// the game runs silently.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("[audio] device unavailable, running silent: {}", e);
            for cmd in rx_cmd.iter() {
                if matches!(cmd, AudioCmd::Shutdown) {
                    break;
                }
            }
            return;
        }
    };

    info!("[audio] thread starting (id={:?})", std::thread::current().id());

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();
    let mut fx_playing: FxHashSet<String> = FxHashSet::default();
    let mut music_volume = 1.0_f32;
    let mut fx_volume = 1.0_f32;

    'run: loop {
        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        debug!("[audio] loaded id='{}' path='{}'", id, path);
                        music.set_volume(music_volume);
                        musics.insert(id.clone(), music);
                        let _ = tx_evt.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        warn!("[audio] load failed id='{}' path='{}' error='{}'", id, path, e);
                        let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("[audio] play start id='{}' looped={}", id, want_loop);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                    } else {
                        warn!("[audio] play failed id='{}' reason='not loaded'", id);
                        let _ = tx_evt.send(AudioMessage::MusicStopped { id });
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("[audio] stop id='{}'", id);
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                        let _ = tx_evt.send(AudioMessage::MusicStopped { id });
                    }
                }
                AudioCmd::MusicVolume { vol } => {
                    debug!("[audio] music volume={}", vol);
                    music_volume = vol;
                    for music in musics.values() {
                        music.set_volume(vol);
                    }
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("[audio] fx loaded id='{}' path='{}'", id, path);
                        sound.set_volume(fx_volume);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        warn!("[audio] fx load failed id='{}' path='{}' error='{}'", id, path, e);
                        let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        debug!("[audio] fx play id='{}'", id);
                        sound.play();
                        fx_playing.insert(id);
                    } else {
                        warn!("[audio] fx play failed id='{}' reason='not loaded'", id);
                        let _ = tx_evt.send(AudioMessage::FxFinished { id });
                    }
                }
                AudioCmd::StopFx { id } => {
                    if fx_playing.remove(&id) {
                        if let Some(sound) = sounds.get(&id) {
                            debug!("[audio] fx stop id='{}'", id);
                            sound.stop();
                        }
                        let _ = tx_evt.send(AudioMessage::FxFinished { id });
                    }
                }
                AudioCmd::StopAllFx => {
                    for id in fx_playing.drain() {
                        if let Some(sound) = sounds.get(&id) {
                            sound.stop();
                        }
                        let _ = tx_evt.send(AudioMessage::FxFinished { id });
                    }
                }
                AudioCmd::FxVolume { vol } => {
                    debug!("[audio] fx volume={}", vol);
                    fx_volume = vol;
                    for sound in sounds.values() {
                        sound.set_volume(vol);
                    }
                }
                AudioCmd::Shutdown => {
                    info!("[audio] shutdown requested");
                    musics.clear();
                    playing.clear();
                    looped.clear();
                    sounds.clear();
                    fx_playing.clear();
                    break 'run;
                }
            }
        }
        // 2) Pump streaming + detect ends
        //    `update_stream()` must be called regularly while playing.
        //    If a track ended and isn't looped, emit Finished exactly once.
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else {
                    let len = music.get_time_length();
                    let played = music.get_time_played();
                    if played >= len - 0.01 {
                        ended.push(id.clone());
                    }
                }
            }
        }
        for id in ended.iter() {
            if looped.contains(id) {
                if let Some(music) = musics.get(id) {
                    debug!("[audio] restarting looped id='{}'", id);
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            } else {
                debug!("[audio] finished id='{}'", id);
                playing.remove(id);
                let _ = tx_evt.send(AudioMessage::MusicFinished { id: id.clone() });
            }
        }

        let fx_ended: Vec<String> = fx_playing
            .iter()
            .filter(|id| !sounds.get(*id).map(|s| s.is_playing()).unwrap_or(false))
            .cloned()
            .collect();
        for id in fx_ended {
            fx_playing.remove(&id);
            let _ = tx_evt.send(AudioMessage::FxFinished { id });
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    } // 'run

    info!("[audio] thread exiting (id={:?})", std::thread::current().id());

    // On exit, musics and sounds drop before `audio`, satisfying lifetimes
}
