//! Main menu component.
//!
//! A [`Menu`] is a vertical list of [`MenuItem`]s drawn in screen space. Up
//! and down move the focus, left and right drag a focused slider, and the
//! confirm key activates a focused button. Once a button fires the menu stops
//! listening: the delayed action it started always runs to completion.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// What a button does when confirmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Load and enter the named scene.
    Play(String),
    Quit,
}

/// Which audio setter a slider is wired to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderTarget {
    Music,
    Effects,
}

#[derive(Clone, Debug)]
pub enum MenuItemKind {
    Button(MenuAction),
    Slider { target: SliderTarget, value: f32 },
}

#[derive(Clone, Debug)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub kind: MenuItemKind,
}

impl MenuItem {
    pub fn button(id: impl Into<String>, label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: MenuItemKind::Button(action),
        }
    }

    pub fn slider(id: impl Into<String>, label: impl Into<String>, target: SliderTarget) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: MenuItemKind::Slider { target, value: 0.0 },
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct Menu {
    pub items: Vec<MenuItem>,
    pub selected_index: usize,
    /// False once a button has been confirmed.
    pub active: bool,
    /// Slider change per left/right press.
    pub slider_step: f32,
    pub origin: Vector2,
    pub font_size: f32,
    pub item_spacing: f32,
    pub normal_color: Color,
    pub selected_color: Color,
    pub click_fx: Option<String>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>, origin: Vector2) -> Self {
        Self {
            items,
            selected_index: 0,
            active: true,
            slider_step: 0.05,
            origin,
            font_size: 20.0,
            item_spacing: 32.0,
            normal_color: Color::WHITE,
            selected_color: Color::YELLOW,
            click_fx: None,
        }
    }

    pub fn with_click_fx(mut self, fx: impl Into<String>) -> Self {
        self.click_fx = Some(fx.into());
        self
    }

    pub fn with_colors(mut self, normal: Color, selected: Color) -> Self {
        self.normal_color = normal;
        self.selected_color = selected;
        self
    }

    pub fn with_slider_value(mut self, target: SliderTarget, value: f32) -> Self {
        self.set_slider_value(target, value);
        self
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.items.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = (self.selected_index + self.items.len() - 1) % self.items.len();
        }
    }

    pub fn selected(&self) -> Option<&MenuItem> {
        self.items.get(self.selected_index)
    }

    /// Screen position of row `index`.
    pub fn item_position(&self, index: usize) -> Vector2 {
        Vector2 {
            x: self.origin.x,
            y: self.origin.y + index as f32 * self.item_spacing,
        }
    }

    /// Overwrite the value of every slider wired to `target`.
    pub fn set_slider_value(&mut self, target: SliderTarget, new_value: f32) {
        for item in self.items.iter_mut() {
            if let MenuItemKind::Slider { target: t, value } = &mut item.kind
                && *t == target
            {
                *value = new_value;
            }
        }
    }

    pub fn slider_value(&self, target: SliderTarget) -> Option<f32> {
        self.items.iter().find_map(|item| match item.kind {
            MenuItemKind::Slider { target: t, value } if t == target => Some(value),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::new(
            vec![
                MenuItem::button("play", "Play", MenuAction::Play("level".into())),
                MenuItem::slider("music", "Music", SliderTarget::Music),
                MenuItem::button("quit", "Quit", MenuAction::Quit),
            ],
            Vector2 { x: 0.0, y: 0.0 },
        )
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut m = menu();
        m.select_previous();
        assert_eq!(m.selected().unwrap().id, "quit");
        m.select_next();
        assert_eq!(m.selected().unwrap().id, "play");
    }

    #[test]
    fn slider_values_by_target() {
        let mut m = menu();
        assert_eq!(m.slider_value(SliderTarget::Effects), None);
        m.set_slider_value(SliderTarget::Music, 0.4);
        assert_eq!(m.slider_value(SliderTarget::Music), Some(0.4));
    }

    #[test]
    fn rows_are_spaced_vertically() {
        let m = menu();
        let p = m.item_position(2);
        assert_eq!((p.x, p.y), (0.0, 64.0));
    }
}
