//! Depth-tested, vertex-colored tumbling cube

use wgpu::RenderPass;

use super::geometry::{CUBE_INDICES, CUBE_VERTICES};
use super::motion::{cube_rotation, depth_remap};
use super::SIMPLE_CLEAR;
use crate::app::renderer::mesh::{ColorVertex, Mesh};
use crate::app::renderer::pipeline::{COLOR_SHADER, PipelineSpec, Transforms, UniformBinding, build_pipeline};
use crate::app::{AppConfig, Demo, Gpu};

pub struct CubeDemo {
    pipeline: wgpu::RenderPipeline,
    uniform: UniformBinding,
    mesh: Mesh,
    time: f32,
}

impl Demo for CubeDemo {
    const TITLE: &'static str = "Cube";

    fn new(gpu: &Gpu, _config: &AppConfig) -> anyhow::Result<Self> {
        let uniform = UniformBinding::new(&gpu.device, "Cube Transforms", &Transforms::default());
        let pipeline = build_pipeline(
            &gpu.device,
            gpu.format,
            PipelineSpec {
                label: "Cube Pipeline",
                shader: COLOR_SHADER,
                vertex_layout: ColorVertex::desc(),
                bind_group_layouts: &[uniform.layout()],
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_test: true,
                blend: Some(wgpu::BlendState::REPLACE),
            },
        );
        let mesh = Mesh::indexed(&gpu.device, "Cube", &CUBE_VERTICES, &CUBE_INDICES);
        Ok(Self {
            pipeline,
            uniform,
            mesh,
            time: 0.0,
        })
    }

    fn clear_color(&self) -> wgpu::Color {
        SIMPLE_CLEAR
    }

    fn uses_depth(&self) -> bool {
        true
    }

    fn update(&mut self, dt: f32) {
        self.time += dt;
    }

    fn prepare(&mut self, gpu: &Gpu) {
        let transforms = Transforms::new(cube_rotation(self.time), depth_remap());
        self.uniform.write(&gpu.queue, &transforms);
    }

    fn draw(&self, rpass: &mut RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, self.uniform.bind_group(), &[]);
        self.mesh.draw(rpass);
    }

    fn debug_ui(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Time: {:.2}s", self.time));
        ui.label(format!("Indices: {}", self.mesh.count()));
    }
}
