//! Focusable controls laid out in normalized device coordinates

use super::scene::Action;

/// Axis-aligned rectangle described by its center and size in NDC
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcRect {
    pub cx: f32,
    pub cy: f32,
    pub w: f32,
    pub h: f32,
}

impl NdcRect {
    pub const fn new(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self { cx, cy, w, h }
    }

    pub fn left(&self) -> f32 {
        self.cx - self.w / 2.0
    }

    pub fn right(&self) -> f32 {
        self.cx + self.w / 2.0
    }

    pub fn top(&self) -> f32 {
        self.cy + self.h / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.cy - self.h / 2.0
    }

    /// Inclusive containment test (edges count as inside)
    pub fn contains(&self, pos: [f32; 2]) -> bool {
        pos[0] >= self.left() && pos[0] <= self.right() && pos[1] >= self.bottom() && pos[1] <= self.top()
    }

    /// Returns a copy moved vertically by `dy`
    pub fn offset_y(&self, dy: f32) -> Self {
        Self {
            cy: self.cy + dy,
            ..*self
        }
    }

    /// Returns a copy grown by `margin` on each axis
    pub fn grow(&self, margin: f32) -> Self {
        Self {
            w: self.w + margin,
            h: self.h + margin,
            ..*self
        }
    }
}

/// Clickable button bound to an [`Action`]
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: NdcRect,
    pub label: String,
    pub action: Action,
    pub color: [f32; 3],
}

impl Button {
    pub fn new(rect: NdcRect, label: impl Into<String>, action: Action, color: [f32; 3]) -> Self {
        Self {
            rect,
            label: label.into(),
            action,
            color,
        }
    }

    pub fn contains(&self, pos: [f32; 2]) -> bool {
        self.rect.contains(pos)
    }
}

/// Horizontal slider over a closed value range
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub rect: NdcRect,
    pub label: String,
    pub min: f32,
    pub max: f32,
    value: f32,
    pub dragging: bool,
}

impl Slider {
    /// Creates a slider; the initial value is clamped into range
    pub fn new(rect: NdcRect, label: impl Into<String>, min: f32, max: f32, value: f32) -> Self {
        Self {
            rect,
            label: label.into(),
            min,
            max,
            value: value.clamp(min, max),
            dragging: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Position of the value inside the range, in `[0, 1]`
    pub fn normalized(&self) -> f32 {
        (self.value - self.min) / (self.max - self.min)
    }

    /// Sets the value from a normalized position, clamping `t` to `[0, 1]`
    pub fn set_from_norm(&mut self, t: f32) {
        self.value = self.min + t.clamp(0.0, 1.0) * (self.max - self.min);
    }

    /// Moves the value by a normalized delta
    pub fn nudge(&mut self, delta_norm: f32) {
        self.set_from_norm(self.normalized() + delta_norm);
    }

    /// Sets the value from a pointer x position over the track
    ///
    /// `rect` is the track as drawn, which may be offset from `self.rect`
    /// while a panel slides in.
    pub fn drag_to(&mut self, x: f32, rect: &NdcRect) {
        self.set_from_norm((x - rect.left()) / (rect.right() - rect.left()));
    }

    /// X coordinate of the knob on the given track
    pub fn knob_x(&self, rect: &NdcRect) -> f32 {
        rect.left() + self.normalized() * rect.w
    }

    pub fn contains(&self, pos: [f32; 2]) -> bool {
        self.rect.contains(pos)
    }
}
