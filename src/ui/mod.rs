//! Menu UI: scene state machine, focusable controls and animated layers
//!
//! Everything here is plain data driven by the demo loop; no GPU or window
//! types leak in, so the whole module is unit-testable.

pub mod controls;
pub mod draw;
pub mod easing;
pub mod focus;
pub mod fps;
pub mod overlay;
pub mod scene;
pub mod transition;

pub use controls::{Button, NdcRect, Slider};
pub use draw::{UiCommand, UiDrawList};
pub use focus::{ButtonGroup, FocusTarget};
pub use fps::FpsCounter;
pub use overlay::{GamepadSnapshot, MenuOverlay, NavKey};
pub use scene::{Action, FocusLayer, Scene, SceneState};
pub use transition::Transitions;
