//! Debug UI health check

use crate::app::debug_ui::DebugUIState;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that debug window state and frame timing behave
pub struct DebugUICheck;

impl DebugUICheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DebugUICheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for DebugUICheck {
    fn name(&self) -> &'static str {
        "Debug UI"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates debug window toggling and frame timing")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        let mut ui_state = DebugUIState::default();

        // The window only opens on request, in every build
        if ui_state.show_window {
            details.push("  ✗ Debug window should start hidden".to_string());
            return CheckResult::fail("Incorrect default state").with_details(details.join("\n"));
        }
        details.push("  ✓ Debug window starts hidden".to_string());

        #[cfg(debug_assertions)]
        {
            ui_state.toggle_window();
            if !ui_state.show_window {
                details.push("  ✗ Backquote toggle did not open the window".to_string());
                return CheckResult::fail("Toggle functionality broken")
                    .with_details(details.join("\n"));
            }
            ui_state.toggle_window();
            if ui_state.show_window {
                details.push("  ✗ Second toggle did not close the window".to_string());
                return CheckResult::fail("Toggle functionality broken")
                    .with_details(details.join("\n"));
            }
            details.push("  ✓ Toggle functionality works".to_string());
        }

        if ui_state.fps() != 0.0 {
            details.push("  ✗ Initial FPS should be 0.0".to_string());
            return CheckResult::fail("Incorrect initial FPS").with_details(details.join("\n"));
        }

        for _ in 0..3 {
            std::thread::sleep(std::time::Duration::from_millis(17));
            ui_state.update_frame_time();
        }

        let fps = ui_state.fps();
        if fps <= 0.0 {
            details.push("  ✗ FPS calculation failed".to_string());
            return CheckResult::fail("Frame timing broken").with_details(details.join("\n"));
        }
        if !(30.0..=120.0).contains(&fps) {
            details.push(format!("  ⚠ FPS looks off: {fps:.1} (expected ~60)"));
            details.push("    Likely system load or timer precision".to_string());
        } else {
            details.push(format!(
                "  ✓ Frame timing: {fps:.1} FPS, last {:.2}ms",
                ui_state.last_frame_ms()
            ));
        }

        CheckResult::pass("Debug window state operational").with_details(details.join("\n"))
    }
}
