//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`] and the message queues. Call
//! [`shutdown_audio`] during teardown to stop the thread and free audio
//! resources. If the thread cannot be spawned the game runs without a bridge
//! and the audio systems skip forwarding.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{error, info};

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the `audio` thread and register the bridge and message queues.
///
/// The message queues are inserted even when spawning fails, so
/// [`crate::resources::audiosession::AudioSession`] keeps working.
pub fn setup_audio(world: &mut World) {
    world.insert_resource(Messages::<AudioMessage>::default());
    world.insert_resource(Messages::<AudioCmd>::default());

    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();
    let spawned = std::thread::Builder::new()
        .name("audio".into())
        .spawn(move || audio_thread(rx_cmd, tx_msg));

    match spawned {
        Ok(handle) => world.insert_resource(AudioBridge {
            tx_cmd,
            rx_msg,
            handle,
        }),
        Err(e) => error!("Failed to spawn audio thread, running silent: {}", e),
    }
}

/// Ask the audio thread to stop and wait for it.
///
/// Does nothing when no bridge was set up.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        if bridge.handle.join().is_err() {
            error!("Audio thread panicked");
        } else {
            info!("Audio thread joined");
        }
    }
}
