//! Menu overlay state machine health check

use std::collections::{HashSet, VecDeque};

use crate::app::UiConfig;
use crate::health::check::{CheckResult, SystemCheck};
use crate::ui::{Action, MenuOverlay, NavKey, Scene, SceneState};

/// Walks every scene state reachable from the home screen
pub struct UiStateCheck;

impl UiStateCheck {
    pub fn new() -> Self {
        Self
    }

    /// States reachable from home through actions and pause toggles
    fn reachable_states() -> Vec<SceneState> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([SceneState::new()]);
        let mut order = Vec::new();

        while let Some(state) = queue.pop_front() {
            if !seen.insert(state) {
                continue;
            }
            order.push(state);
            if state.quit_requested() {
                continue;
            }
            for action in Action::ALL {
                let mut next = state;
                next.apply(action);
                queue.push_back(next);
            }
            let mut toggled = state;
            if toggled.toggle_pause() {
                queue.push_back(toggled);
            }
        }
        order
    }
}

impl Default for UiStateCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for UiStateCheck {
    fn name(&self) -> &'static str {
        "UI State"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates scene transitions and focus bounds of the menu overlay")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        let states = Self::reachable_states();
        for state in &states {
            if state.pause_menu_open && state.scene != Scene::Playing {
                details.push(format!("  ✗ Pause panel open outside play: {state:?}"));
                return CheckResult::fail("Unreachable state reached")
                    .with_details(details.join("\n"));
            }
        }
        details.push(format!("  ✓ {} reachable scene states", states.len()));

        // Drive a full overlay through home -> playing -> pause -> options
        let mut overlay = MenuOverlay::new(UiConfig::default());
        let script = [
            NavKey::Enter,
            NavKey::Escape,
            NavKey::Down,
            NavKey::Enter,
            NavKey::Right,
            NavKey::Up,
        ];
        for (step, key) in script.into_iter().enumerate() {
            overlay.handle_key(key, step as f64);
            overlay.update(1.0 / 60.0);

            let len = overlay.focus_list().len();
            let in_bounds = match overlay.focus_index() {
                Some(index) => index < len,
                None => len == 0,
            };
            if !in_bounds {
                details.push(format!(
                    "  ✗ Focus {:?} out of bounds for {len} controls after {key:?}",
                    overlay.focus_index()
                ));
                return CheckResult::fail("Focus index escaped the focus list")
                    .with_details(details.join("\n"));
            }
        }

        let state = overlay.state();
        if state.scene != Scene::Playing || !state.paused || !state.show_options {
            details.push(format!("  ✗ Unexpected state after script: {state:?}"));
            return CheckResult::fail("Keyboard navigation broken")
                .with_details(details.join("\n"));
        }
        details.push("  ✓ Keyboard navigation: home, play, pause, options".to_string());
        details.push(format!(
            "  ✓ Options sliders: scale {:.2}, speed {:.2}",
            overlay.triangle_scale(),
            overlay.triangle_speed()
        ));

        CheckResult::pass("Overlay state machine consistent").with_details(details.join("\n"))
    }
}
