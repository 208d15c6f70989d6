//! Raw input collection from winit events

use super::events::KeyCode;
use super::state::{ButtonState, InputState};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::PhysicalKey;

/// Collects raw input from winit events and maintains InputState
pub struct InputCollector {
    state: InputState,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
        }
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Some([position.x as f32, position.y as f32]));
            }

            WindowEvent::CursorLeft { .. } => self.cursor_moved(None),

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.left_button(*state),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && let PhysicalKey::Code(code) = event.physical_key
                {
                    self.state.keyboard.pressed.push(KeyCode::from(code));
                }
            }

            _ => {}
        }
    }

    fn cursor_moved(&mut self, pos: Option<[f32; 2]>) {
        self.state.mouse.window_pos = pos;
    }

    fn left_button(&mut self, state: ElementState) {
        let mouse = &mut self.state.mouse;
        match state {
            ElementState::Pressed => {
                mouse.left = ButtonState::JustPressed;
                mouse.left_presses.push(mouse.window_pos);
            }
            ElementState::Released => mouse.left = ButtonState::JustReleased,
        }
    }

    /// Advance to next frame (transitions edge states to steady states)
    pub fn advance_frame(&mut self) {
        self.state.advance_frame();
    }

    /// Get current input state
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Borrow state mutably
    pub fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a window position in pixels to NDC (y up)
pub fn to_ndc(pos: [f32; 2], size: [u32; 2]) -> [f32; 2] {
    let w = size[0].max(1) as f32;
    let h = size[1].max(1) as f32;
    [pos[0] / w * 2.0 - 1.0, 1.0 - pos[1] / h * 2.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ndc_corners() {
        assert_eq!(to_ndc([0.0, 0.0], [800, 600]), [-1.0, 1.0]);
        assert_eq!(to_ndc([800.0, 600.0], [800, 600]), [1.0, -1.0]);
        assert_eq!(to_ndc([400.0, 300.0], [800, 600]), [0.0, 0.0]);
    }

    #[test]
    fn test_tap_within_one_frame_keeps_press() {
        let mut collector = InputCollector::new();
        collector.cursor_moved(Some([400.0, 300.0]));
        collector.left_button(ElementState::Pressed);
        collector.left_button(ElementState::Released);

        let mouse = &collector.state().mouse;
        assert_eq!(mouse.left, ButtonState::JustReleased);
        assert_eq!(mouse.left_presses, vec![Some([400.0, 300.0])]);

        collector.advance_frame();
        let mouse = &collector.state().mouse;
        assert_eq!(mouse.left, ButtonState::Released);
        assert!(mouse.left_presses.is_empty());
    }

    #[test]
    fn test_held_press_settles() {
        let mut collector = InputCollector::new();
        collector.left_button(ElementState::Pressed);
        collector.advance_frame();
        assert_eq!(collector.state().mouse.left, ButtonState::Pressed);
        assert!(collector.state().mouse.left.is_down());

        collector.left_button(ElementState::Released);
        assert!(!collector.state().mouse.left.is_down());
    }

    #[test]
    fn test_double_press_in_one_frame() {
        let mut collector = InputCollector::new();
        collector.cursor_moved(Some([1.0, 1.0]));
        collector.left_button(ElementState::Pressed);
        collector.left_button(ElementState::Released);
        collector.cursor_moved(None);
        collector.left_button(ElementState::Pressed);
        assert_eq!(collector.state().mouse.left_presses, vec![Some([1.0, 1.0]), None]);
    }

    #[test]
    fn test_to_ndc_zero_size() {
        let ndc = to_ndc([0.0, 0.0], [0, 0]);
        assert!(ndc[0].is_finite() && ndc[1].is_finite());
    }
}
