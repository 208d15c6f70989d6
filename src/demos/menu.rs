//! Menu demo: animated background triangle under the navigable overlay

use tracing::warn;
use wgpu::RenderPass;

use super::geometry::TRIANGLE;
use super::motion::menu_triangle_transform;
use crate::app::input::{MouseState, to_ndc};
use crate::app::renderer::mesh::{ColorVertex, Mesh};
use crate::app::renderer::pipeline::{COLOR_SHADER, PipelineSpec, Transforms, UniformBinding, build_pipeline};
use crate::app::renderer::ui::UiRenderer;
use crate::app::{AppConfig, Demo, FrameInput, Gpu};
use crate::text::GlyphAtlas;
use crate::ui::{FpsCounter, MenuOverlay, UiDrawList};

const MENU_CLEAR: wgpu::Color = wgpu::Color {
    r: 0.06,
    g: 0.08,
    b: 0.10,
    a: 1.0,
};

/// Feeds one frame of mouse state to the overlay
///
/// Every press recorded this frame is delivered, even when the button is
/// already up again by the time the frame is processed.
fn route_pointer(overlay: &mut MenuOverlay, mouse: &MouseState, size: [u32; 2]) {
    for pos in mouse.left_presses.iter().flatten() {
        overlay.handle_press(to_ndc(*pos, size));
    }
    let held = mouse.left.is_down();
    if !mouse.left_presses.is_empty() && !held {
        overlay.release_pointer();
    }
    overlay.update_pointer(mouse.window_pos.map(|pos| to_ndc(pos, size)), held);
}

pub struct MenuDemo {
    pipeline: wgpu::RenderPipeline,
    uniform: UniformBinding,
    mesh: Mesh,
    overlay: MenuOverlay,
    ui_renderer: UiRenderer,
    atlas: Option<GlyphAtlas>,
    draw_list: UiDrawList,
    fps: FpsCounter,
    /// Animation clock, scaled by the speed slider and frozen while paused
    clock: f32,
    elapsed: f64,
}

impl MenuDemo {
    pub fn overlay(&self) -> &MenuOverlay {
        &self.overlay
    }
}

impl Demo for MenuDemo {
    const TITLE: &'static str = "Menu";
    const USES_GAMEPAD: bool = true;

    fn new(gpu: &Gpu, config: &AppConfig) -> anyhow::Result<Self> {
        let uniform = UniformBinding::new(&gpu.device, "Menu Triangle Transforms", &Transforms::default());
        let pipeline = build_pipeline(
            &gpu.device,
            gpu.format,
            PipelineSpec {
                label: "Menu Triangle Pipeline",
                shader: COLOR_SHADER,
                vertex_layout: ColorVertex::desc(),
                bind_group_layouts: &[uniform.layout()],
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_test: false,
                blend: Some(wgpu::BlendState::REPLACE),
            },
        );
        let mesh = Mesh::new(&gpu.device, "Menu Triangle", &TRIANGLE);

        let atlas = match GlyphAtlas::load(&config.text) {
            Ok(atlas) => Some(atlas),
            Err(e) => {
                warn!(error = %e, "Text disabled, labels go to the window title");
                None
            }
        };
        let ui_renderer = UiRenderer::new(&gpu.device, &gpu.queue, gpu.format, atlas.as_ref());

        Ok(Self {
            pipeline,
            uniform,
            mesh,
            overlay: MenuOverlay::new(config.ui.clone()),
            ui_renderer,
            atlas,
            draw_list: UiDrawList::new(),
            fps: FpsCounter::new(),
            clock: 0.0,
            elapsed: 0.0,
        })
    }

    fn clear_color(&self) -> wgpu::Color {
        MENU_CLEAR
    }

    fn input(&mut self, input: &FrameInput<'_>) {
        for key in &input.state.keyboard.pressed {
            if let Some(nav) = key.nav_key() {
                self.overlay.handle_key(nav, input.now);
            }
        }

        route_pointer(&mut self.overlay, &input.state.mouse, input.size);

        if let Some(pad) = input.gamepad {
            self.overlay.handle_gamepad(pad, input.now);
        }
    }

    fn update(&mut self, dt: f32) {
        self.elapsed += f64::from(dt);
        self.fps.tick(self.elapsed);
        self.overlay.update(dt);
        if !self.overlay.state().is_frozen() {
            self.clock += dt * self.overlay.triangle_speed();
        }
    }

    fn prepare(&mut self, gpu: &Gpu) {
        let model = menu_triangle_transform(self.clock, self.overlay.triangle_scale());
        self.uniform.write(&gpu.queue, &Transforms::model_only(model));

        self.draw_list.clear();
        self.overlay.draw(&mut self.draw_list, &self.fps.label());
        self.ui_renderer.prepare(
            &gpu.device,
            &gpu.queue,
            &self.draw_list,
            self.atlas.as_ref(),
            gpu.size,
        );
    }

    fn draw(&self, rpass: &mut RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, self.uniform.bind_group(), &[]);
        self.mesh.draw(rpass);
        self.ui_renderer.draw(rpass);
    }

    fn debug_ui(&mut self, ui: &mut egui::Ui) {
        let state = self.overlay.state();
        let transitions = self.overlay.transitions();
        ui.label(format!("Scene: {:?}", state.scene));
        ui.label(format!("Paused: {}", state.paused));
        ui.label(format!("Options: {}", state.show_options));
        ui.label(format!("Focus layer: {:?}", state.focus_layer()));
        ui.label(format!(
            "Focus: {:?} ({})",
            self.overlay.focus_index(),
            self.overlay.focused_label().unwrap_or("none")
        ));
        ui.label(format!(
            "Alpha home/menu/pause: {:.2} / {:.2} / {:.2}",
            transitions.home_alpha, transitions.menu_alpha, transitions.pause_alpha
        ));
        ui.label(format!("Options slide: {:.2}", transitions.options_slide));
        ui.label(format!(
            "Triangle scale/speed: {:.2} / {:.2}",
            self.overlay.triangle_scale(),
            self.overlay.triangle_speed()
        ));
        ui.label(format!("Text: {}", if self.ui_renderer.has_text() { "atlas" } else { "window title" }));
        ui.label(format!("Draw commands: {}", self.draw_list.len()));
    }

    fn window_title(&self) -> Option<String> {
        match self.atlas {
            Some(_) => None,
            None => Some(format!("{} | {}", self.overlay.fallback_title(), self.fps.label())),
        }
    }

    fn quit_requested(&self) -> bool {
        self.overlay.quit_requested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::input::ButtonState;
    use crate::ui::Scene;

    const SIZE: [u32; 2] = [800, 600];

    fn settled() -> MenuOverlay {
        let mut overlay = MenuOverlay::default();
        for _ in 0..240 {
            overlay.update(1.0 / 60.0);
        }
        overlay
    }

    /// Window pixels for an NDC point in an 800x600 window
    fn pixels(ndc: [f32; 2]) -> [f32; 2] {
        [(ndc[0] + 1.0) * 400.0, (1.0 - ndc[1]) * 300.0]
    }

    #[test]
    fn test_tap_in_one_frame_presses_start() {
        let mut overlay = settled();
        let start = pixels([0.0, 0.28]);
        let mouse = MouseState {
            window_pos: Some(start),
            left: ButtonState::JustReleased,
            left_presses: vec![Some(start)],
        };

        route_pointer(&mut overlay, &mouse, SIZE);
        assert_eq!(overlay.state().scene, Scene::Playing);
    }

    #[test]
    fn test_press_outside_window_is_ignored() {
        let mut overlay = settled();
        let mouse = MouseState {
            window_pos: None,
            left: ButtonState::JustPressed,
            left_presses: vec![None],
        };

        route_pointer(&mut overlay, &mouse, SIZE);
        assert_eq!(overlay.state().scene, Scene::Home);
    }

    #[test]
    fn test_tap_on_slider_does_not_leave_it_dragging() {
        let mut overlay = settled();
        overlay.handle_press([0.0, 0.28]);
        overlay.handle_press([-0.9, 0.85]);
        overlay.handle_press([0.0, -0.02]);
        assert!(overlay.state().show_options);
        for _ in 0..240 {
            overlay.update(1.0 / 60.0);
        }

        let track = overlay.slider_track(0).expect("scale slider visible");
        let at = pixels([track.cx, track.cy]);
        let tap = MouseState {
            window_pos: Some(at),
            left: ButtonState::JustReleased,
            left_presses: vec![Some(at)],
        };
        route_pointer(&mut overlay, &tap, SIZE);
        assert!(!overlay.sliders()[0].dragging);

        let scale = overlay.triangle_scale();
        let hover = MouseState {
            window_pos: Some(pixels([track.right(), track.cy])),
            left: ButtonState::Released,
            left_presses: Vec::new(),
        };
        route_pointer(&mut overlay, &hover, SIZE);
        assert!((overlay.triangle_scale() - scale).abs() < 1e-6);
    }

    #[test]
    fn test_held_press_drags_slider() {
        let mut overlay = settled();
        overlay.handle_press([0.0, 0.28]);
        overlay.handle_press([-0.9, 0.85]);
        overlay.handle_press([0.0, -0.02]);
        for _ in 0..240 {
            overlay.update(1.0 / 60.0);
        }

        let track = overlay.slider_track(0).expect("scale slider visible");
        let at = pixels([track.cx, track.cy]);
        let press = MouseState {
            window_pos: Some(at),
            left: ButtonState::JustPressed,
            left_presses: vec![Some(at)],
        };
        route_pointer(&mut overlay, &press, SIZE);
        assert!(overlay.sliders()[0].dragging);

        let drag = MouseState {
            window_pos: Some(pixels([track.right(), track.cy])),
            left: ButtonState::Pressed,
            left_presses: Vec::new(),
        };
        route_pointer(&mut overlay, &drag, SIZE);
        assert!((overlay.triangle_scale() - 3.0).abs() < 1e-3);
    }
}
