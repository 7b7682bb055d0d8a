//! Flat-colored rectangle drawn at an entity's
//! [`MapPosition`](super::mapposition::MapPosition).
//!
//! The pivot sits at the bottom-center of the rectangle (the character's
//! feet), matching how sprites anchor their origin.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

#[derive(Component, Clone, Copy, Debug)]
pub struct Shape {
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Shape {
    pub fn new(width: f32, height: f32, color: Color) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    /// Top-left corner of the rectangle for a pivot at `pos`.
    pub fn top_left(&self, pos: Vector2) -> Vector2 {
        Vector2 {
            x: pos.x - self.width * 0.5,
            y: pos.y - self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_is_bottom_center() {
        let shape = Shape::new(10.0, 20.0, Color::WHITE);
        let tl = shape.top_left(Vector2 { x: 100.0, y: 50.0 });
        assert_eq!((tl.x, tl.y), (95.0, 30.0));
    }
}
