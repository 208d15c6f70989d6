//! Triangle and quad demos: one colored shape under [`spin_transform`]

use wgpu::RenderPass;

use super::geometry::{QUAD_STRIP, TRIANGLE};
use super::motion::spin_transform;
use super::SIMPLE_CLEAR;
use crate::app::renderer::mesh::{ColorVertex, Mesh};
use crate::app::renderer::pipeline::{COLOR_SHADER, PipelineSpec, Transforms, UniformBinding, build_pipeline};
use crate::app::{AppConfig, Demo, Gpu};

/// A colored shape animated by elapsed time
pub struct Spinner {
    pipeline: wgpu::RenderPipeline,
    uniform: UniformBinding,
    mesh: Mesh,
    time: f32,
}

impl Spinner {
    pub fn new(gpu: &Gpu, label: &str, vertices: &[ColorVertex], topology: wgpu::PrimitiveTopology) -> Self {
        let uniform = UniformBinding::new(&gpu.device, label, &Transforms::default());
        let pipeline = build_pipeline(
            &gpu.device,
            gpu.format,
            PipelineSpec {
                label,
                shader: COLOR_SHADER,
                vertex_layout: ColorVertex::desc(),
                bind_group_layouts: &[uniform.layout()],
                topology,
                depth_test: false,
                blend: Some(wgpu::BlendState::REPLACE),
            },
        );
        let mesh = Mesh::new(&gpu.device, label, vertices);
        Self {
            pipeline,
            uniform,
            mesh,
            time: 0.0,
        }
    }

    /// Seconds of animation so far
    pub fn time(&self) -> f32 {
        self.time
    }

    fn update(&mut self, dt: f32) {
        self.time += dt;
    }

    fn prepare(&mut self, gpu: &Gpu) {
        self.uniform
            .write(&gpu.queue, &Transforms::model_only(spin_transform(self.time)));
    }

    fn draw(&self, rpass: &mut RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, self.uniform.bind_group(), &[]);
        self.mesh.draw(rpass);
    }
}

/// Rotating RGB triangle
pub struct TriangleDemo(Spinner);

impl Demo for TriangleDemo {
    const TITLE: &'static str = "Triangle";

    fn new(gpu: &Gpu, _config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self(Spinner::new(
            gpu,
            "Triangle",
            &TRIANGLE,
            wgpu::PrimitiveTopology::TriangleList,
        )))
    }

    fn clear_color(&self) -> wgpu::Color {
        SIMPLE_CLEAR
    }

    fn update(&mut self, dt: f32) {
        self.0.update(dt);
    }

    fn prepare(&mut self, gpu: &Gpu) {
        self.0.prepare(gpu);
    }

    fn draw(&self, rpass: &mut RenderPass<'_>) {
        self.0.draw(rpass);
    }

    fn debug_ui(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Time: {:.2}s", self.0.time()));
    }
}

/// Rotating four-color quad drawn as a strip
pub struct QuadDemo(Spinner);

impl Demo for QuadDemo {
    const TITLE: &'static str = "Quad";

    fn new(gpu: &Gpu, _config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self(Spinner::new(
            gpu,
            "Quad",
            &QUAD_STRIP,
            wgpu::PrimitiveTopology::TriangleStrip,
        )))
    }

    fn clear_color(&self) -> wgpu::Color {
        SIMPLE_CLEAR
    }

    fn update(&mut self, dt: f32) {
        self.0.update(dt);
    }

    fn prepare(&mut self, gpu: &Gpu) {
        self.0.prepare(gpu);
    }

    fn draw(&self, rpass: &mut RenderPass<'_>) {
        self.0.draw(rpass);
    }

    fn debug_ui(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Time: {:.2}s", self.0.time()));
    }
}
