//! Raw input state

use super::events::KeyCode;

/// Raw input state snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub mouse: MouseState,
    pub keyboard: KeyboardState,
}

/// Mouse input state
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Window coordinates (physical pixels)
    pub window_pos: Option<[f32; 2]>,
    pub left: ButtonState,
    /// Cursor position of every left press this frame, in arrival order
    ///
    /// A press and its release can land in the same frame (touchpad taps),
    /// which leaves `left` at `JustReleased`; the press survives here.
    pub left_presses: Vec<Option<[f32; 2]>>,
}

/// Button press state with edge detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    /// Pressed this frame (edge)
    JustPressed,
    /// Held down (multiple frames)
    Pressed,
    /// Released this frame (edge)
    JustReleased,
}

impl ButtonState {
    /// Advance state for next frame (transitions edges to steady states)
    pub fn advance(self) -> Self {
        match self {
            Self::JustPressed => Self::Pressed,
            Self::JustReleased => Self::Released,
            state => state,
        }
    }

    /// Returns true if button is currently down (just pressed or held)
    pub fn is_down(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }
}

/// Keyboard input state
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Keys pressed this frame, in arrival order (auto-repeat excluded)
    pub pressed: Vec<KeyCode>,
}

impl InputState {
    /// Creates a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all button states for next frame
    pub fn advance_frame(&mut self) {
        self.mouse.left = self.mouse.left.advance();

        // Clear per-frame state
        self.mouse.left_presses.clear();
        self.keyboard.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edges_settle() {
        assert_eq!(ButtonState::JustPressed.advance(), ButtonState::Pressed);
        assert_eq!(ButtonState::JustReleased.advance(), ButtonState::Released);
        assert_eq!(ButtonState::Pressed.advance(), ButtonState::Pressed);
        assert!(ButtonState::JustPressed.is_down());
        assert!(!ButtonState::JustReleased.is_down());
    }

    #[test]
    fn test_advance_clears_pressed_keys() {
        let mut state = InputState::new();
        state.keyboard.pressed.push(KeyCode::Enter);
        state.mouse.left = ButtonState::JustPressed;
        state.mouse.left_presses.push(Some([1.0, 2.0]));
        state.advance_frame();
        assert!(state.keyboard.pressed.is_empty());
        assert!(state.mouse.left_presses.is_empty());
        assert_eq!(state.mouse.left, ButtonState::Pressed);
    }
}
