//! Input collection
//!
//! ```text
//! winit events → InputCollector → InputState ─┐
//! gilrs        → GamepadInput   → GamepadSnapshot ─┴→ MenuOverlay
//! ```
//!
//! The collector keeps edge-detected button state and the keys pressed
//! this frame; call `advance_frame` once the frame has consumed them.

mod collector;
mod events;
mod gamepad;
mod state;

// Re-export public API
pub use collector::{InputCollector, to_ndc};
pub use events::KeyCode;
pub use gamepad::{DPad, GamepadInput, snapshot_from};
pub use state::{ButtonState, InputState, KeyboardState, MouseState};
