//! Draw list produced by the overlay each frame
//!
//! The overlay never touches the GPU. It records rectangles and text runs
//! in NDC, in painter's order, and the UI renderer turns them into quads.

use super::controls::NdcRect;

/// Plain white, used for all text
pub const TEXT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// A single overlay primitive
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// Solid rectangle
    Rect {
        rect: NdcRect,
        color: [f32; 4],
        alpha: f32,
    },
    /// Text run anchored at its top-left corner
    Text {
        text: String,
        left: f32,
        top: f32,
        color: [f32; 4],
        alpha: f32,
    },
}

/// Ordered list of overlay primitives
#[derive(Debug, Default, Clone)]
pub struct UiDrawList {
    commands: Vec<UiCommand>,
}

impl UiDrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a rectangle
    pub fn rect(&mut self, rect: NdcRect, color: [f32; 4], alpha: f32) {
        self.commands.push(UiCommand::Rect { rect, color, alpha });
    }

    /// Queues a white text run
    pub fn text(&mut self, text: impl Into<String>, left: f32, top: f32, alpha: f32) {
        self.commands.push(UiCommand::Text {
            text: text.into(),
            left,
            top,
            color: TEXT_COLOR,
            alpha,
        });
    }

    pub fn commands(&self) -> &[UiCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over the text runs only
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            UiCommand::Text { text, .. } => Some(text.as_str()),
            UiCommand::Rect { .. } => None,
        })
    }
}
