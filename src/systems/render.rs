//! Rendering.
//!
//! Draws the world pass (shapes at [`MapPosition`], camera space, sorted by
//! [`ZIndex`]) and then the screen pass (texts at [`ScreenPosition`], the
//! menu and the pause banner).
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::menu::{Menu, MenuItemKind};
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::shape::Shape;
use crate::components::zindex::ZIndex;
use crate::resources::audiosession::linear_to_db;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::worldtime::WorldTime;

const BACKGROUND: Color = Color {
    r: 34,
    g: 45,
    b: 38,
    a: 255,
};
const SLIDER_WIDTH: f32 = 160.0;
const SLIDER_HEIGHT: f32 = 8.0;

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    camera: Option<Res<Camera2DRes>>,
    time: Res<WorldTime>,
    shapes: Query<(&Shape, &MapPosition, Option<&ZIndex>)>,
    texts: Query<(&DynamicText, &ScreenPosition, Option<&Scale>)>,
    menus: Query<&Menu>,
) {
    let mut to_draw: Vec<(Shape, Vector2, ZIndex)> = shapes
        .iter()
        .map(|(s, p, z)| (*s, p.pos, z.copied().unwrap_or_default()))
        .collect();
    to_draw.sort_by_key(|(_, _, z)| *z);

    let screen_w = rl.get_screen_width();
    let screen_h = rl.get_screen_height();
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND);

    if let Some(camera) = camera {
        let mut d2 = d.begin_mode2D(camera.0);
        for (shape, pos, _z) in to_draw.iter() {
            let tl = shape.top_left(*pos);
            d2.draw_rectangle_v(
                tl,
                Vector2 {
                    x: shape.width,
                    y: shape.height,
                },
                shape.color,
            );
        }
    }

    for (text, pos, scale) in texts.iter() {
        if !text.visible {
            continue;
        }
        let s = scale.map(|s| s.scale.y).unwrap_or(1.0);
        let size = (text.font_size * s).round() as i32;
        if size <= 0 {
            continue;
        }
        // Pivot at the horizontal center of the text.
        let half_width = (text.content.len() as f32 * size as f32 * 0.3) as i32;
        d.draw_text(
            &text.content,
            pos.pos.x as i32 - half_width,
            pos.pos.y as i32,
            size,
            text.color,
        );
    }

    for menu in menus.iter() {
        draw_menu(&mut d, menu);
    }

    if time.is_paused() {
        let label = "PAUSED";
        d.draw_text(label, screen_w / 2 - 48, screen_h / 2 - 16, 32, Color::RAYWHITE);
    }
}

fn draw_menu(d: &mut RaylibDrawHandle, menu: &Menu) {
    let font_size = menu.font_size as i32;
    for (i, item) in menu.items.iter().enumerate() {
        let pos = menu.item_position(i);
        let color = if i == menu.selected_index {
            menu.selected_color
        } else {
            menu.normal_color
        };
        match &item.kind {
            MenuItemKind::Button(_) => {
                d.draw_text(&item.label, pos.x as i32, pos.y as i32, font_size, color);
            }
            MenuItemKind::Slider { value, .. } => {
                let label = format!("{} {:>6.1} dB", item.label, linear_to_db(*value));
                d.draw_text(&label, pos.x as i32, pos.y as i32, font_size, color);
                let bar = Vector2 {
                    x: pos.x,
                    y: pos.y + menu.font_size + 2.0,
                };
                d.draw_rectangle_v(
                    bar,
                    Vector2 {
                        x: SLIDER_WIDTH,
                        y: SLIDER_HEIGHT,
                    },
                    Color::DARKGRAY,
                );
                d.draw_rectangle_v(
                    bar,
                    Vector2 {
                        x: SLIDER_WIDTH * value.clamp(0.0, 1.0),
                        y: SLIDER_HEIGHT,
                    },
                    color,
                );
            }
        }
    }
}
