//! Debug window state and rendering

use std::time::Instant;

use sysinfo::System;

use super::demo::Demo;
use super::renderer::RendererInfo;

/// Debug UI state for toggling different panels
#[derive(Debug, Clone)]
pub struct DebugUIState {
    pub show_window: bool,
    pub show_fps: bool,
    pub show_demo_state: bool,
    pub show_renderer_info: bool,
    pub show_system_info: bool,
    frame_times: Vec<f32>,
    last_frame_time: Instant,
    system_summary: Option<Vec<String>>,
}

impl Default for DebugUIState {
    fn default() -> Self {
        Self {
            show_window: false,
            show_fps: true,
            show_demo_state: true,
            show_renderer_info: true,
            show_system_info: false,
            frame_times: Vec::with_capacity(100),
            last_frame_time: Instant::now(),
            system_summary: None,
        }
    }
}

impl DebugUIState {
    /// Toggles the debug window visibility (debug builds only)
    #[cfg(debug_assertions)]
    pub fn toggle_window(&mut self) {
        self.show_window = !self.show_window;
    }

    /// Records the time since the previous call
    pub fn update_frame_time(&mut self) {
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.push_frame_time(frame_time);
    }

    fn push_frame_time(&mut self, frame_time: f32) {
        self.frame_times.push(frame_time);
        if self.frame_times.len() > 100 {
            self.frame_times.remove(0);
        }
    }

    /// Gets the current FPS
    pub fn fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let avg_frame_time: f32 =
            self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        }
    }

    /// Most recent frame time in milliseconds
    pub fn last_frame_ms(&self) -> f32 {
        self.frame_times.last().copied().unwrap_or(0.0) * 1000.0
    }

    /// OS and hardware lines, gathered once since the query is slow
    fn system_summary(&mut self) -> &[String] {
        self.system_summary.get_or_insert_with(|| {
            let mut sys = System::new_all();
            sys.refresh_all();

            let os_name = System::name().unwrap_or_else(|| "Unknown".to_string());
            let os_version = System::os_version().unwrap_or_else(|| "Unknown".to_string());
            let kernel_version = System::kernel_version().unwrap_or_else(|| "Unknown".to_string());
            let physical_cores = System::physical_core_count().unwrap_or(0);
            let total_memory_gb = sys.total_memory() as f64 / 1_073_741_824.0;

            vec![
                format!("OS: {} {}", os_name, os_version),
                format!("Kernel: {}", kernel_version),
                format!("Physical cores: {}", physical_cores),
                format!("Logical cores: {}", sys.cpus().len()),
                format!("Memory: {:.1} GB", total_memory_gb),
            ]
        })
    }

    /// Renders the debug window
    pub fn render<D: Demo>(&mut self, ctx: &egui::Context, renderer: &RendererInfo, demo: &mut D) {
        // Only show debug window if enabled
        if !self.show_window {
            return;
        }

        // Update frame timing
        self.update_frame_time();

        // Single debug window with toggleable sections
        egui::Window::new("Debug Info")
            .default_pos([10.0, 40.0])
            .default_width(300.0)
            .resizable(true)
            .scroll([false, true])
            .show(ctx, |ui| {
                ui.heading("Categories");
                ui.separator();

                // Toggle checkboxes
                ui.checkbox(&mut self.show_fps, "FPS");
                ui.checkbox(&mut self.show_demo_state, "Demo State");
                ui.checkbox(&mut self.show_renderer_info, "Renderer Info");
                ui.checkbox(&mut self.show_system_info, "System Info");

                ui.separator();

                if self.show_fps {
                    ui.heading("FPS");
                    ui.label(format!("FPS: {:.1}", self.fps()));
                    ui.label(format!("Frame time: {:.2}ms", self.last_frame_ms()));
                    ui.separator();
                }

                if self.show_demo_state {
                    ui.heading(D::TITLE);
                    demo.debug_ui(ui);
                    ui.separator();
                }

                if self.show_renderer_info {
                    ui.heading("Renderer Info");
                    ui.label(format!("Adapter: {}", renderer.adapter));
                    ui.label(format!("Backend: {:?}", renderer.backend));
                    ui.label(format!("Surface: {}x{}", renderer.size[0], renderer.size[1]));
                    ui.label(format!("Format: {:?}", renderer.format));
                    ui.label(format!("Present mode: {:?}", renderer.present_mode));
                    ui.separator();
                }

                if self.show_system_info {
                    ui.heading("System Info");
                    for line in self.system_summary() {
                        ui.label(line.as_str());
                    }
                    ui.separator();
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_from_frame_times() {
        let mut state = DebugUIState::default();
        assert_eq!(state.fps(), 0.0);
        for _ in 0..10 {
            state.push_frame_time(0.02);
        }
        assert!((state.fps() - 50.0).abs() < 1e-3);
        assert!((state.last_frame_ms() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_frame_history_is_bounded() {
        let mut state = DebugUIState::default();
        for _ in 0..250 {
            state.push_frame_time(0.01);
        }
        assert_eq!(state.frame_times.len(), 100);
    }

    #[test]
    fn test_window_hidden_by_default() {
        assert!(!DebugUIState::default().show_window);
    }
}
