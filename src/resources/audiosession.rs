//! Process-wide audio session.
//!
//! [`AudioSession`] is inserted once at start-up and survives every scene
//! switch. It owns the two playback channels the game uses (one music track,
//! one effects channel), the persisted volume levels, and an outbox of
//! [`AudioCmd`]s that [`crate::systems::audio::flush_audio_session`] forwards
//! to the audio thread each frame.
//!
//! Volumes are kept in `[MIN_VOLUME, 1]`. The floor keeps the decibel
//! conversion `20 * log10(v)` finite.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::preferences::{EFFECTS_VOLUME_KEY, MUSIC_VOLUME_KEY, Preferences};
use bevy_ecs::prelude::Resource;
use log::{debug, warn};

/// Lowest storable volume (-80 dB).
pub const MIN_VOLUME: f32 = 0.0001;
/// Volume used when nothing was persisted yet.
pub const DEFAULT_VOLUME: f32 = 0.7;

/// Clamp a requested volume into `[MIN_VOLUME, 1]`. NaN maps to the floor.
pub fn clamp_volume(v: f32) -> f32 {
    if v.is_nan() {
        return MIN_VOLUME;
    }
    v.clamp(MIN_VOLUME, 1.0)
}

/// Convert a linear gain to decibels.
pub fn linear_to_db(v: f32) -> f32 {
    20.0 * clamp_volume(v).log10()
}

#[derive(Resource, Debug)]
pub struct AudioSession {
    music_volume: f32,
    effects_volume: f32,
    current_music: Option<String>,
    current_effect: Option<String>,
    prefs: Preferences,
    outbox: Vec<AudioCmd>,
}

impl AudioSession {
    /// Build the session from stored preferences and queue the initial gains.
    pub fn new(prefs: Preferences) -> Self {
        let music_volume = clamp_volume(prefs.get_float(MUSIC_VOLUME_KEY, DEFAULT_VOLUME));
        let effects_volume = clamp_volume(prefs.get_float(EFFECTS_VOLUME_KEY, DEFAULT_VOLUME));
        debug!(
            "Audio session: music={} effects={} (prefs at {:?})",
            music_volume,
            effects_volume,
            prefs.path()
        );
        Self {
            music_volume,
            effects_volume,
            current_music: None,
            current_effect: None,
            prefs,
            outbox: vec![
                AudioCmd::MusicVolume { vol: music_volume },
                AudioCmd::FxVolume {
                    vol: effects_volume,
                },
            ],
        }
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    pub fn effects_volume(&self) -> f32 {
        self.effects_volume
    }

    pub fn music_volume_db(&self) -> f32 {
        linear_to_db(self.music_volume)
    }

    pub fn effects_volume_db(&self) -> f32 {
        linear_to_db(self.effects_volume)
    }

    /// Id of the music track currently playing, if any.
    pub fn current_music(&self) -> Option<&str> {
        self.current_music.as_deref()
    }

    /// Id of the last effect started that has not finished yet, if any.
    pub fn current_effect(&self) -> Option<&str> {
        self.current_effect.as_deref()
    }

    /// Clamp, persist and apply a new music volume. Returns the stored value.
    pub fn set_music_volume(&mut self, v: f32) -> f32 {
        self.music_volume = clamp_volume(v);
        if let Err(e) = self.prefs.set_float(MUSIC_VOLUME_KEY, self.music_volume) {
            warn!("{}", e);
        }
        self.outbox.push(AudioCmd::MusicVolume {
            vol: self.music_volume,
        });
        self.music_volume
    }

    /// Clamp, persist and apply a new effects volume. Returns the stored value.
    pub fn set_effects_volume(&mut self, v: f32) -> f32 {
        self.effects_volume = clamp_volume(v);
        if let Err(e) = self.prefs.set_float(EFFECTS_VOLUME_KEY, self.effects_volume) {
            warn!("{}", e);
        }
        self.outbox.push(AudioCmd::FxVolume {
            vol: self.effects_volume,
        });
        self.effects_volume
    }

    pub fn load_music(&mut self, id: impl Into<String>, path: impl Into<String>) {
        self.outbox.push(AudioCmd::LoadMusic {
            id: id.into(),
            path: path.into(),
        });
    }

    pub fn load_effect(&mut self, id: impl Into<String>, path: impl Into<String>) {
        self.outbox.push(AudioCmd::LoadFx {
            id: id.into(),
            path: path.into(),
        });
    }

    /// Start `id` on the music channel, stopping whatever else was playing.
    pub fn play_music(&mut self, id: impl Into<String>, looped: bool) {
        let id = id.into();
        if let Some(previous) = self.current_music.take()
            && previous != id
        {
            self.outbox.push(AudioCmd::StopMusic { id: previous });
        }
        self.outbox.push(AudioCmd::PlayMusic {
            id: id.clone(),
            looped,
        });
        self.current_music = Some(id);
    }

    /// Halt the music channel. Does nothing when no music is playing.
    pub fn stop_music(&mut self) {
        if let Some(id) = self.current_music.take() {
            self.outbox.push(AudioCmd::StopMusic { id });
        }
    }

    /// Overlay a one-shot effect. `None` or an empty id is a no-op.
    pub fn play_effect(&mut self, clip: Option<&str>) {
        match clip {
            Some(id) if !id.is_empty() => {
                self.outbox.push(AudioCmd::PlayFx { id: id.to_string() });
                self.current_effect = Some(id.to_string());
            }
            _ => debug!("play_effect called without a clip, ignoring"),
        }
    }

    /// Halt one effect, leaving any other overlaid effect playing.
    pub fn stop_effect(&mut self, clip: Option<&str>) {
        match clip {
            Some(id) if !id.is_empty() => {
                if self.current_effect.as_deref() == Some(id) {
                    self.current_effect = None;
                }
                self.outbox.push(AudioCmd::StopFx { id: id.to_string() });
            }
            _ => debug!("stop_effect called without a clip, ignoring"),
        }
    }

    /// Halt every effect on the effects channel.
    pub fn stop_effects(&mut self) {
        self.current_effect = None;
        self.outbox.push(AudioCmd::StopAllFx);
    }

    /// Keep the channel handles in sync with what the audio thread reports.
    pub fn observe(&mut self, msg: &AudioMessage) {
        match msg {
            AudioMessage::MusicFinished { id }
            | AudioMessage::MusicStopped { id }
            | AudioMessage::MusicLoadFailed { id, .. } => {
                if self.current_music.as_deref() == Some(id.as_str()) {
                    self.current_music = None;
                }
            }
            AudioMessage::FxFinished { id } | AudioMessage::FxLoadFailed { id, .. } => {
                if self.current_effect.as_deref() == Some(id.as_str()) {
                    self.current_effect = None;
                }
            }
            _ => {}
        }
    }

    /// Take every queued command, oldest first.
    pub fn drain(&mut self) -> Vec<AudioCmd> {
        std::mem::take(&mut self.outbox)
    }

    /// Commands queued since the last [`AudioSession::drain`].
    pub fn pending(&self) -> &[AudioCmd] {
        &self.outbox
    }
}

impl Default for AudioSession {
    fn default() -> Self {
        Self::new(Preferences::in_memory())
    }
}
