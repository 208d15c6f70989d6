//! Interface between the window loop and a single demo

use wgpu::RenderPass;

use super::config::AppConfig;
use super::input::InputState;
use super::renderer::Gpu;
use crate::ui::GamepadSnapshot;

/// Input gathered for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub state: &'a InputState,
    pub gamepad: Option<GamepadSnapshot>,
    /// Seconds since the loop started
    pub now: f64,
    /// Surface size in physical pixels
    pub size: [u32; 2],
}

/// A scene driven by [`crate::app::App`]
///
/// Per frame the loop calls `input`, `update`, `prepare` and then `draw`
/// inside a pass already cleared to `clear_color`.
pub trait Demo: Sized {
    /// Default window title
    const TITLE: &'static str;

    /// Whether the loop should poll gamepads for this demo
    const USES_GAMEPAD: bool = false;

    /// Builds GPU resources; errors here are fatal
    fn new(gpu: &Gpu, config: &AppConfig) -> anyhow::Result<Self>;

    fn clear_color(&self) -> wgpu::Color;

    /// Whether the pass needs a cleared depth attachment
    fn uses_depth(&self) -> bool {
        false
    }

    /// Surface was resized; `gpu.size` holds the new size
    fn resize(&mut self, _gpu: &Gpu) {}

    fn input(&mut self, _input: &FrameInput<'_>) {}

    /// Advances animation by `dt` seconds
    fn update(&mut self, dt: f32);

    /// Uploads per-frame data before the pass begins
    fn prepare(&mut self, gpu: &Gpu);

    fn draw(&self, rpass: &mut RenderPass<'_>);

    /// Extra rows in the debug window
    fn debug_ui(&mut self, _ui: &mut egui::Ui) {}

    /// Title to show instead of [`Demo::TITLE`], re-read every frame
    fn window_title(&self) -> Option<String> {
        None
    }

    fn quit_requested(&self) -> bool {
        false
    }
}
