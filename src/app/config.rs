//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width
    pub width: f64,
    /// Window height
    pub height: f64,
    /// Whether the window should be fullscreen
    pub fullscreen: bool,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// Whether the window should be decorated (has title bar, borders, etc.)
    pub decorated: bool,
    /// Whether to enable vsync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello GPU".to_string(),
            width: 800.0,
            height: 600.0,
            fullscreen: false,
            resizable: true,
            decorated: true,
            vsync: true,
        }
    }
}

/// Menu navigation and animation tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Minimum seconds between two focus moves
    pub nav_repeat_delay: f64,
    /// Stick deflection below which the gamepad is ignored
    pub gamepad_deadzone: f32,
    /// Minimum seconds between two gamepad navigation steps
    pub gamepad_repeat: f64,
    /// Seconds after a navigation step during which activation is ignored
    pub activate_debounce: f64,
    /// Normalized slider change per Left/Right step
    pub slider_step: f32,
    /// Home and menu fade rate, per second
    pub fade_rate: f32,
    /// Pause panel and options slide rate, per second
    pub overlay_rate: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            nav_repeat_delay: 0.25,
            gamepad_deadzone: 0.5,
            gamepad_repeat: 0.25,
            activate_debounce: 0.2,
            slider_step: 0.02,
            fade_rate: 6.0,
            overlay_rate: 8.0,
        }
    }
}

/// Glyph atlas settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Preferred font file; system fonts are tried when it is missing
    pub font_path: Option<PathBuf>,
    /// Rasterization size in pixels
    pub font_size: f32,
    /// Empty pixels around each glyph
    pub padding: u32,
    /// Upper bound on the atlas row width
    pub max_atlas_width: u32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_path: Some(PathBuf::from("assets/fonts/DejaVuSans.ttf")),
            font_size: 24.0,
            padding: 2,
            max_atlas_width: 2048,
        }
    }
}

/// Asset locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Image used by the perspective cube
    pub texture_path: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            texture_path: PathBuf::from("assets/image.png"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Menu navigation and animation
    #[serde(default)]
    pub ui: UiConfig,
    /// Text rendering
    #[serde(default)]
    pub text: TextConfig,
    /// Asset paths
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/{profile}.toml (profile-specific configuration)
    /// 2. Environment variables with prefix APP_ (e.g., APP_WINDOW__WIDTH=1920)
    ///
    /// Config files are searched for in:
    /// 1. Next to the executable (target/debug/config or target/release/config)
    /// 2. In the current directory (./config)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        match Self::find_config_dir() {
            Some(dir) => Self::load_from_dir(&dir, profile),
            None => Self::build(
                Config::builder()
                    .add_source(File::with_name(&format!("config/{profile}")).required(false)),
                profile,
            ),
        }
    }

    /// Loads `{dir}/{profile}.toml` plus environment overrides
    pub fn load_from_dir(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let profile_path = dir.join(profile);
        Self::build(
            Config::builder().add_source(File::from(profile_path.as_path()).required(false)),
            profile,
        )
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        profile: &str,
    ) -> Result<Self, ConfigError> {
        // Use __ as separator for nested fields (e.g., APP_WINDOW__WIDTH)
        let config = builder
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?;

        config.try_deserialize()
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        // Try to find config dir relative to executable
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        // Fall back to current directory
        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Profile named by APP_PROFILE, defaulting to "release"
    pub fn active_profile() -> String {
        std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string())
    }

    /// Loads configuration for [`AppConfig::active_profile`]
    pub fn load_from_env() -> Result<Self, ConfigError> {
        Self::load(&Self::active_profile())
    }

    /// Built-in settings used when no file can be loaded
    pub fn builtin() -> Self {
        Self {
            profile: "release".to_string(),
            window: WindowConfig::default(),
            ui: UiConfig::default(),
            text: TextConfig::default(),
            assets: AssetsConfig::default(),
        }
    }

    /// Returns a copy with the window title replaced
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load("release").unwrap_or_else(|_| Self::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtin_values() {
        let config = AppConfig::builtin();
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.ui.nav_repeat_delay, 0.25);
        assert_eq!(config.ui.gamepad_deadzone, 0.5);
        assert_eq!(config.text.font_size, 24.0);
        assert_eq!(config.text.max_atlas_width, 2048);
    }

    #[test]
    fn test_load_from_dir_reads_profile() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("custom.toml"),
            "[window]\ntitle = \"Custom\"\nwidth = 1024.0\n\n[ui]\nslider_step = 0.05\n",
        )
        .expect("write config");

        let config = AppConfig::load_from_dir(dir.path(), "custom").expect("load");
        assert_eq!(config.profile, "custom");
        assert_eq!(config.window.title, "Custom");
        assert_eq!(config.window.width, 1024.0);
        // Unset keys keep their defaults
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.ui.slider_step, 0.05);
        assert_eq!(config.ui.fade_rate, 6.0);
    }

    #[test]
    fn test_missing_profile_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig::load_from_dir(dir.path(), "nothing").expect("load");
        assert_eq!(config.profile, "nothing");
        assert_eq!(config.assets.texture_path, PathBuf::from("assets/image.png"));
    }

    #[test]
    fn test_with_title() {
        let config = AppConfig::builtin().with_title("Cube");
        assert_eq!(config.window.title, "Cube");
    }
}
