//! Textured cube seen through a perspective camera

use glam::Mat4;
use tracing::{info, warn};
use wgpu::{BindGroup, RenderPass};

use super::geometry::{TEXTURED_CUBE_INDICES, TEXTURED_CUBE_VERTICES};
use super::motion::{perspective_model, perspective_projection};
use super::SIMPLE_CLEAR;
use crate::app::renderer::mesh::{Mesh, TexVertex};
use crate::app::renderer::pipeline::{
    PipelineSpec, TEXTURED_SHADER, Transforms, UniformBinding, build_pipeline, texture_bind_group,
    texture_bind_group_layout,
};
use crate::app::renderer::texture::{SamplerOptions, Texture, checkerboard, load_flipped};
use crate::app::{AppConfig, Demo, Gpu};

pub struct PerspectiveDemo {
    pipeline: wgpu::RenderPipeline,
    uniform: UniformBinding,
    texture_bind_group: BindGroup,
    _texture: Texture,
    mesh: Mesh,
    projection: Mat4,
    time: f32,
    texture_source: String,
}

impl Demo for PerspectiveDemo {
    const TITLE: &'static str = "Perspective Cube";

    fn new(gpu: &Gpu, config: &AppConfig) -> anyhow::Result<Self> {
        let path = &config.assets.texture_path;
        let (image, texture_source) = match load_flipped(path) {
            Ok(image) => {
                info!(path = %path.display(), width = image.width(), height = image.height(), "Texture loaded");
                (image, path.display().to_string())
            }
            Err(e) => {
                warn!(error = %e, "Texture unavailable, using checkerboard");
                (checkerboard(256, 32), "checkerboard".to_string())
            }
        };

        let texture = Texture::from_image(&gpu.device, &gpu.queue, &image, "Cube Texture", SamplerOptions::REPEAT_LINEAR);
        let texture_layout = texture_bind_group_layout(&gpu.device, "Cube Texture Layout");
        let texture_bind_group = texture_bind_group(&gpu.device, &texture_layout, &texture, "Cube Texture");

        let uniform = UniformBinding::new(&gpu.device, "Perspective Transforms", &Transforms::default());
        let pipeline = build_pipeline(
            &gpu.device,
            gpu.format,
            PipelineSpec {
                label: "Perspective Pipeline",
                shader: TEXTURED_SHADER,
                vertex_layout: TexVertex::desc(),
                bind_group_layouts: &[uniform.layout(), &texture_layout],
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_test: true,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            },
        );
        let mesh = Mesh::indexed(
            &gpu.device,
            "Textured Cube",
            &TEXTURED_CUBE_VERTICES,
            &TEXTURED_CUBE_INDICES,
        );

        Ok(Self {
            pipeline,
            uniform,
            texture_bind_group,
            _texture: texture,
            mesh,
            projection: perspective_projection(gpu.aspect()),
            time: 0.0,
            texture_source,
        })
    }

    fn clear_color(&self) -> wgpu::Color {
        SIMPLE_CLEAR
    }

    fn uses_depth(&self) -> bool {
        true
    }

    fn resize(&mut self, gpu: &Gpu) {
        self.projection = perspective_projection(gpu.aspect());
    }

    fn update(&mut self, dt: f32) {
        self.time += dt;
    }

    fn prepare(&mut self, gpu: &Gpu) {
        let transforms = Transforms::new(perspective_model(self.time), self.projection);
        self.uniform.write(&gpu.queue, &transforms);
    }

    fn draw(&self, rpass: &mut RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, self.uniform.bind_group(), &[]);
        rpass.set_bind_group(1, &self.texture_bind_group, &[]);
        self.mesh.draw(rpass);
    }

    fn debug_ui(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Time: {:.2}s", self.time));
        ui.label(format!("Texture: {}", self.texture_source));
    }
}
