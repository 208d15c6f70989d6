//! WGSL shaders, uniform bindings and pipeline construction

use glam::Mat4;
use wgpu::{
    BindGroup, BindGroupLayout, Buffer, Device, Queue, RenderPipeline, TextureFormat,
    util::DeviceExt,
};

use super::texture::{DEPTH_FORMAT, Texture};

/// Vertex-colored geometry transformed by `projection * model`
pub const COLOR_SHADER: &str = r#"
struct Transforms {
    model: mat4x4<f32>,
    projection: mat4x4<f32>,
}

@group(0) @binding(0)
var<uniform> transforms: Transforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = transforms.projection * transforms.model * vec4<f32>(in.position, 1.0);
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color, 1.0);
}
"#;

/// Textured geometry transformed by `projection * model`
pub const TEXTURED_SHADER: &str = r#"
struct Transforms {
    model: mat4x4<f32>,
    projection: mat4x4<f32>,
}

@group(0) @binding(0)
var<uniform> transforms: Transforms;

@group(1) @binding(0)
var t_diffuse: texture_2d<f32>;
@group(1) @binding(1)
var s_diffuse: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = transforms.projection * transforms.model * vec4<f32>(in.position, 1.0);
    // Images are uploaded bottom row first
    out.uv = vec2<f32>(in.uv.x, 1.0 - in.uv.y);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(t_diffuse, s_diffuse, in.uv);
}
"#;

/// NDC quads tinted by vertex color, sampled from a texture
pub const UI_SHADER: &str = r#"
@group(0) @binding(0)
var t_ui: texture_2d<f32>;
@group(0) @binding(1)
var s_ui: sampler;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) uv: vec2<f32>,
    @location(2) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) color: vec4<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(in.position, 0.0, 1.0);
    out.uv = in.uv;
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color * textureSample(t_ui, s_ui, in.uv);
}
"#;

/// Model and projection matrices, column-major
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Transforms {
    pub model: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl Transforms {
    pub fn new(model: Mat4, projection: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }

    /// Model matrix with an identity projection
    pub fn model_only(model: Mat4) -> Self {
        Self::new(model, Mat4::IDENTITY)
    }
}

impl Default for Transforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

/// Uniform buffer with its bind group, visible to the vertex stage
pub struct UniformBinding {
    buffer: Buffer,
    layout: BindGroupLayout,
    bind_group: BindGroup,
}

impl UniformBinding {
    pub fn new<T: bytemuck::Pod>(device: &Device, label: &str, initial: &T) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(initial),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    pub fn write<T: bytemuck::Pod>(&self, queue: &Queue, value: &T) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(value));
    }

    pub fn layout(&self) -> &BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &BindGroup {
        &self.bind_group
    }
}

/// Layout for a fragment-stage texture plus sampler
pub fn texture_bind_group_layout(device: &Device, label: &str) -> BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// Binds `texture` against a layout from [`texture_bind_group_layout`]
pub fn texture_bind_group(
    device: &Device,
    layout: &BindGroupLayout,
    texture: &Texture,
    label: &str,
) -> BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&texture.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&texture.sampler),
            },
        ],
    })
}

/// What a pipeline draws and how
pub struct PipelineSpec<'a> {
    pub label: &'a str,
    pub shader: &'a str,
    pub vertex_layout: wgpu::VertexBufferLayout<'a>,
    pub bind_group_layouts: &'a [&'a BindGroupLayout],
    pub topology: wgpu::PrimitiveTopology,
    pub depth_test: bool,
    pub blend: Option<wgpu::BlendState>,
}

/// Builds a render pipeline targeting the surface format
pub fn build_pipeline(device: &Device, format: TextureFormat, spec: PipelineSpec<'_>) -> RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(spec.label),
        source: wgpu::ShaderSource::Wgsl(spec.shader.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(spec.label),
        bind_group_layouts: spec.bind_group_layouts,
        push_constant_ranges: &[],
    });

    let depth_stencil = spec.depth_test.then(|| wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(spec.label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[spec.vertex_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: spec.blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: spec.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil,
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_transforms_are_column_major() {
        let t = Transforms::model_only(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(t.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(t.projection, Mat4::IDENTITY.to_cols_array_2d());
    }

    #[test]
    fn test_transforms_size_matches_wgsl() {
        assert_eq!(std::mem::size_of::<Transforms>(), 128);
    }

    #[test]
    fn test_shaders_declare_entry_points() {
        for source in [COLOR_SHADER, TEXTURED_SHADER, UI_SHADER] {
            assert!(source.contains("fn vs_main"));
            assert!(source.contains("fn fs_main"));
        }
    }
}
