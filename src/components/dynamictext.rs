use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Debug)]
/// Text drawn with raylib's default font, in screen or world space.
///
/// Hidden text keeps its entity alive so a behavior can reveal it later.
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in pixels before [`Scale`](super::scale::Scale) is applied.
    pub font_size: f32,
    /// Color of the text.
    pub color: Color,
    /// Whether the render pass draws it.
    pub visible: bool,
}

impl DynamicText {
    pub fn new(content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
            visible: true,
        }
    }

    /// Start hidden; reveal with [`DynamicText::show`].
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn show(&mut self) {
        self.visible = true;
    }
}
