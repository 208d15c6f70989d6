//! Batches the overlay draw list into textured quads

use std::ops::Range;

use wgpu::{BindGroup, Buffer, Device, Queue, RenderPass, RenderPipeline, TextureFormat};

use super::pipeline::{PipelineSpec, UI_SHADER, build_pipeline, texture_bind_group, texture_bind_group_layout};
use super::texture::{SamplerOptions, Texture};
use crate::text::{GlyphAtlas, layout_text};
use crate::ui::{NdcRect, UiCommand, UiDrawList};

/// Vertex of a UI quad
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UiVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl UiVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<UiVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Texture sampled by a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiTexture {
    White,
    Atlas,
}

/// Consecutive vertices that share a texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiBatch {
    pub texture: UiTexture,
    pub vertices: Range<u32>,
}

fn push_quad(
    vertices: &mut Vec<UiVertex>,
    [left, top, right, bottom]: [f32; 4],
    [u0, v0, u1, v1]: [f32; 4],
    color: [f32; 4],
) {
    let tl = UiVertex { position: [left, top], uv: [u0, v0], color };
    let tr = UiVertex { position: [right, top], uv: [u1, v0], color };
    let bl = UiVertex { position: [left, bottom], uv: [u0, v1], color };
    let br = UiVertex { position: [right, bottom], uv: [u1, v1], color };
    vertices.extend_from_slice(&[tl, bl, br, tl, br, tr]);
}

fn rect_bounds(rect: &NdcRect) -> [f32; 4] {
    [rect.left(), rect.top(), rect.right(), rect.bottom()]
}

/// Turns a draw list into vertices plus texture batches, in painter's order
///
/// Text is skipped when `atlas` is `None`.
pub fn build_batches(
    list: &UiDrawList,
    atlas: Option<&GlyphAtlas>,
    screen: [u32; 2],
) -> (Vec<UiVertex>, Vec<UiBatch>) {
    let mut vertices = Vec::new();
    let mut batches: Vec<UiBatch> = Vec::new();

    for command in list.commands() {
        let start = vertices.len() as u32;
        let texture = match command {
            UiCommand::Rect { rect, color, alpha } => {
                let [r, g, b, a] = *color;
                push_quad(&mut vertices, rect_bounds(rect), [0.0, 0.0, 1.0, 1.0], [r, g, b, a * alpha]);
                UiTexture::White
            }
            UiCommand::Text {
                text,
                left,
                top,
                color,
                alpha,
            } => {
                let Some(atlas) = atlas else {
                    continue;
                };
                let [r, g, b, a] = *color;
                for quad in layout_text(atlas, text, *left, *top, screen) {
                    push_quad(&mut vertices, quad.rect, quad.uv, [r, g, b, a * alpha]);
                }
                UiTexture::Atlas
            }
        };
        let end = vertices.len() as u32;
        if start == end {
            continue;
        }
        match batches.last_mut() {
            Some(last) if last.texture == texture => last.vertices.end = end,
            _ => batches.push(UiBatch {
                texture,
                vertices: start..end,
            }),
        }
    }

    (vertices, batches)
}

/// GPU side of the overlay
pub struct UiRenderer {
    pipeline: RenderPipeline,
    white_bind_group: BindGroup,
    atlas_bind_group: Option<BindGroup>,
    vertex_buffer: Option<Buffer>,
    capacity: usize,
    batches: Vec<UiBatch>,
    // Kept alive for the bind groups
    _white: Texture,
    _atlas: Option<Texture>,
}

impl UiRenderer {
    /// Creates the pipeline and uploads the atlas, if any
    pub fn new(device: &Device, queue: &Queue, format: TextureFormat, atlas: Option<&GlyphAtlas>) -> Self {
        let layout = texture_bind_group_layout(device, "UI Texture Layout");
        let pipeline = build_pipeline(
            device,
            format,
            PipelineSpec {
                label: "UI Pipeline",
                shader: UI_SHADER,
                vertex_layout: UiVertex::desc(),
                bind_group_layouts: &[&layout],
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_test: false,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            },
        );

        let white = Texture::white(device, queue);
        let white_bind_group = texture_bind_group(device, &layout, &white, "UI White");

        let atlas_texture = atlas.map(|atlas| {
            Texture::from_image(device, queue, atlas.image(), "Glyph Atlas", SamplerOptions::CLAMP_LINEAR)
        });
        let atlas_bind_group = atlas_texture
            .as_ref()
            .map(|texture| texture_bind_group(device, &layout, texture, "UI Atlas"));

        Self {
            pipeline,
            white_bind_group,
            atlas_bind_group,
            vertex_buffer: None,
            capacity: 0,
            batches: Vec::new(),
            _white: white,
            _atlas: atlas_texture,
        }
    }

    /// Whether text can be drawn
    pub fn has_text(&self) -> bool {
        self.atlas_bind_group.is_some()
    }

    /// Rebuilds the vertex data for this frame
    pub fn prepare(
        &mut self,
        device: &Device,
        queue: &Queue,
        list: &UiDrawList,
        atlas: Option<&GlyphAtlas>,
        screen: [u32; 2],
    ) {
        let (vertices, batches) = build_batches(list, atlas, screen);
        self.batches = batches;
        if vertices.is_empty() {
            return;
        }

        if vertices.len() > self.capacity || self.vertex_buffer.is_none() {
            let capacity = vertices.len().next_power_of_two();
            self.vertex_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("UI Vertex Buffer"),
                size: (capacity * std::mem::size_of::<UiVertex>()) as wgpu::BufferAddress,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = capacity;
        }

        if let Some(buffer) = &self.vertex_buffer {
            queue.write_buffer(buffer, 0, bytemuck::cast_slice(&vertices));
        }
    }

    /// Draws the prepared batches
    pub fn draw(&self, rpass: &mut RenderPass<'_>) {
        let Some(buffer) = &self.vertex_buffer else {
            return;
        };
        if self.batches.is_empty() {
            return;
        }

        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, buffer.slice(..));
        for batch in &self.batches {
            let bind_group = match batch.texture {
                UiTexture::White => &self.white_bind_group,
                UiTexture::Atlas => match &self.atlas_bind_group {
                    Some(group) => group,
                    None => continue,
                },
            };
            rpass.set_bind_group(0, bind_group, &[]);
            rpass.draw(batch.vertices.clone(), 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::GlyphRect;
    use image::RgbaImage;
    use std::collections::HashMap;

    fn atlas() -> GlyphAtlas {
        let mut glyphs = HashMap::new();
        glyphs.insert('A', GlyphRect { x: 0, y: 0, w: 8, h: 16 });
        GlyphAtlas::from_parts(RgbaImage::new(8, 16), glyphs, 16.0)
    }

    #[test]
    fn test_rect_alpha_applied_once() {
        let mut list = UiDrawList::new();
        list.rect(NdcRect::new(0.0, 0.0, 1.0, 1.0), [1.0, 0.0, 0.0, 0.5], 0.5);
        let (vertices, batches) = build_batches(&list, None, [800, 600]);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].color, [1.0, 0.0, 0.0, 0.25]);
        assert_eq!(batches, vec![UiBatch { texture: UiTexture::White, vertices: 0..6 }]);
    }

    #[test]
    fn test_batches_split_on_texture_change() {
        let mut list = UiDrawList::new();
        list.rect(NdcRect::new(0.0, 0.0, 1.0, 1.0), [1.0; 4], 1.0);
        list.rect(NdcRect::new(0.5, 0.0, 1.0, 1.0), [1.0; 4], 1.0);
        list.text("AA", 0.0, 0.0, 1.0);
        list.rect(NdcRect::new(0.0, 0.5, 1.0, 1.0), [1.0; 4], 1.0);
        let atlas = atlas();
        let (vertices, batches) = build_batches(&list, Some(&atlas), [800, 600]);
        assert_eq!(vertices.len(), 6 * 5);
        let kinds: Vec<UiTexture> = batches.iter().map(|b| b.texture).collect();
        assert_eq!(kinds, vec![UiTexture::White, UiTexture::Atlas, UiTexture::White]);
        assert_eq!(batches[1].vertices, 12..24);
    }

    #[test]
    fn test_text_skipped_without_atlas() {
        let mut list = UiDrawList::new();
        list.text("AA", 0.0, 0.0, 1.0);
        let (vertices, batches) = build_batches(&list, None, [800, 600]);
        assert!(vertices.is_empty());
        assert!(batches.is_empty());
    }
}
