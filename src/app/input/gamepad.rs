//! Gamepad polling through gilrs
//!
//! Produces one [`GamepadSnapshot`] per frame from the first connected pad.
//! The stick Y axis is flipped so that down is positive, matching window
//! coordinates. D-pad buttons override the stick at full deflection.

use gilrs::{Axis, Button, Gamepad, Gilrs};
use tracing::{debug, info, warn};

use crate::ui::GamepadSnapshot;

/// D-pad buttons held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DPad {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Combines stick (gilrs convention, up positive) and d-pad into a snapshot
pub fn snapshot_from(stick: [f32; 2], dpad: DPad, south: bool) -> GamepadSnapshot {
    let mut x = stick[0];
    let mut y = -stick[1];
    if dpad.left {
        x = -1.0;
    } else if dpad.right {
        x = 1.0;
    }
    if dpad.up {
        y = -1.0;
    } else if dpad.down {
        y = 1.0;
    }
    GamepadSnapshot {
        stick: [x, y],
        south,
    }
}

/// Polls the first connected gamepad
pub struct GamepadInput {
    gilrs: Option<Gilrs>,
}

impl GamepadInput {
    /// Opens the gamepad backend; failure disables gamepad input
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => {
                let count = gilrs.gamepads().count();
                info!(connected = count, "Gamepad backend ready");
                Some(gilrs)
            }
            Err(e) => {
                warn!(error = %e, "Gamepad backend unavailable, gamepad input disabled");
                None
            }
        };
        Self { gilrs }
    }

    /// Drains pending events and samples the first connected pad
    pub fn poll(&mut self) -> Option<GamepadSnapshot> {
        let gilrs = self.gilrs.as_mut()?;
        while let Some(event) = gilrs.next_event() {
            debug!(id = %event.id, event = ?event.event, "Gamepad event");
        }
        let (_, pad) = gilrs.gamepads().find(|(_, pad)| pad.is_connected())?;
        Some(sample(&pad))
    }
}

impl Default for GamepadInput {
    fn default() -> Self {
        Self::new()
    }
}

fn sample(pad: &Gamepad<'_>) -> GamepadSnapshot {
    let stick = [pad.value(Axis::LeftStickX), pad.value(Axis::LeftStickY)];
    let dpad = DPad {
        up: pad.is_pressed(Button::DPadUp),
        down: pad.is_pressed(Button::DPadDown),
        left: pad.is_pressed(Button::DPadLeft),
        right: pad.is_pressed(Button::DPadRight),
    };
    snapshot_from(stick, dpad, pad.is_pressed(Button::South))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stick_y_flipped() {
        let snap = snapshot_from([0.2, 0.8], DPad::default(), false);
        assert_eq!(snap.stick, [0.2, -0.8]);
    }

    #[test]
    fn test_dpad_overrides_stick() {
        let dpad = DPad {
            down: true,
            left: true,
            ..DPad::default()
        };
        let snap = snapshot_from([0.3, 0.3], dpad, true);
        assert_eq!(snap.stick, [-1.0, 1.0]);
        assert!(snap.south);
    }
}
