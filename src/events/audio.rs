//! Messages exchanged with the audio thread.
//!
//! Ids are the clip names used by [`crate::game`] (`"click"`, `"level_theme"`,
//! ...). Volumes are linear gains already clamped by the audio session.
use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    /// Linear gain applied to every music track, loaded now or later.
    MusicVolume { vol: f32 },
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    StopFx { id: String },
    StopAllFx,
    /// Linear gain applied to every sound effect, loaded now or later.
    FxVolume { vol: f32 },
    Shutdown,
}

/// Events sent *back* from the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    MusicFinished { id: String }, // reached end for non looping
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    FxFinished { id: String },
}
