//! Game configuration change detection system.
//!
//! Re-applies window settings whenever [`GameConfig`] is inserted or
//! modified.

use crate::resources::gameconfig::GameConfig;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::ffi;

pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() || config.is_added() {
        unsafe {
            if config.vsync {
                ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            } else {
                ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            }
        }
        rl.set_target_fps(config.target_fps);
        debug!(
            "GameConfig applied: vsync={} target_fps={}",
            config.vsync, config.target_fps
        );
    }
}
