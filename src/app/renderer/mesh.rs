//! Vertex formats and GPU meshes

use wgpu::{Buffer, Device, RenderPass, util::DeviceExt};

/// Position plus vertex color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Position plus texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl TexVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    pub const fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TexVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Immutable vertex buffer with an optional 16-bit index buffer
pub struct Mesh {
    vertex_buffer: Buffer,
    index_buffer: Option<Buffer>,
    count: u32,
}

impl Mesh {
    /// Uploads non-indexed vertices
    pub fn new<V: bytemuck::Pod>(device: &Device, label: &str, vertices: &[V]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            vertex_buffer,
            index_buffer: None,
            count: vertices.len() as u32,
        }
    }

    /// Uploads vertices plus indices
    pub fn indexed<V: bytemuck::Pod>(
        device: &Device,
        label: &str,
        vertices: &[V],
        indices: &[u16],
    ) -> Self {
        let mut mesh = Self::new(device, label, vertices);
        mesh.index_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Indices")),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        }));
        mesh.count = indices.len() as u32;
        mesh
    }

    /// Number of vertices or indices drawn
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Binds the buffers and issues the draw
    pub fn draw(&self, rpass: &mut RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(indices) => {
                rpass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..self.count, 0, 0..1);
            }
            None => rpass.draw(0..self.count, 0..1),
        }
    }
}
