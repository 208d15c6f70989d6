//! Configuration system health check

use crate::app::{AppConfig, UiConfig};
use crate::health::check::{CheckResult, SystemCheck};

/// Tuning values the overlay cannot work with
fn ui_problems(ui: &UiConfig) -> Vec<&'static str> {
    let mut problems = Vec::new();
    if !(0.0..1.0).contains(&ui.gamepad_deadzone) {
        problems.push("gamepad_deadzone outside [0, 1)");
    }
    if ui.slider_step <= 0.0 || ui.slider_step > 1.0 {
        problems.push("slider_step outside (0, 1]");
    }
    if ui.fade_rate <= 0.0 || ui.overlay_rate <= 0.0 {
        problems.push("transition rates must be positive");
    }
    if ui.nav_repeat_delay < 0.0 || ui.gamepad_repeat < 0.0 || ui.activate_debounce < 0.0 {
        problems.push("negative navigation delay");
    }
    problems
}

/// Checks that configuration can be loaded for all profiles
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Creates a new config check with default profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    /// Creates a config check with custom profiles
    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates profile loading, environment overrides and UI tuning")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut all_success = true;
        let mut has_warnings = false;

        // Test loading each profile
        for profile in &self.profiles {
            match AppConfig::load(profile) {
                Ok(config) => {
                    details.push(format!(
                        "  ✓ Profile '{}': loaded (window: {}x{}, vsync: {}, font: {}px)",
                        profile,
                        config.window.width,
                        config.window.height,
                        config.window.vsync,
                        config.text.font_size
                    ));
                    for problem in ui_problems(&config.ui) {
                        details.push(format!("  ✗ Profile '{}': {}", profile, problem));
                        all_success = false;
                    }
                }
                Err(e) => {
                    details.push(format!("  ✗ Profile '{}': failed to load - {}", profile, e));
                    all_success = false;
                }
            }
        }

        // Test loading from environment
        match AppConfig::load_from_env() {
            Ok(config) => {
                details.push(format!(
                    "  ✓ Environment config: profile '{}' loaded",
                    config.profile
                ));
            }
            Err(e) => {
                details.push(format!("  ⚠ Environment config: {}", e));
                has_warnings = true;
            }
        }

        let details_str = details.join("\n");

        if !all_success {
            CheckResult::fail("One or more config profiles failed to load or validate")
                .with_details(details_str)
        } else if has_warnings {
            CheckResult::warn("Config loaded with warnings").with_details(details_str)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ui_tuning_is_valid() {
        assert!(ui_problems(&UiConfig::default()).is_empty());
    }

    #[test]
    fn test_bad_ui_tuning_is_reported() {
        let ui = UiConfig {
            gamepad_deadzone: 1.5,
            slider_step: 0.0,
            ..UiConfig::default()
        };
        assert_eq!(ui_problems(&ui).len(), 2);
    }
}
