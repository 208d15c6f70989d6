//! Demo application module
//!
//! Handles windowing, rendering, and user input.

pub mod config;
pub mod debug_ui;
pub mod demo;
pub mod input;
pub mod renderer;
mod runner;
mod window;

pub use config::{AppConfig, AssetsConfig, TextConfig, UiConfig, WindowConfig};
pub use demo::{Demo, FrameInput};
pub use renderer::{Gpu, Renderer};
pub use runner::{App, run};
pub use window::window_attributes_from_config;
