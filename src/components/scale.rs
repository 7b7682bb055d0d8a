use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Draw-time scale factor. Text overlays grow from 0 to 1 through a
/// [`TweenScale`](super::tween::TweenScale).
#[derive(Component, Clone, Debug, Copy)]
pub struct Scale {
    pub scale: Vector2,
}
impl Scale {
    pub fn new(sx: f32, sy: f32) -> Self {
        Self {
            scale: Vector2 { x: sx, y: sy },
        }
    }
    pub fn uniform(s: f32) -> Self {
        Self::new(s, s)
    }
}
impl Default for Scale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}
