//! Sampled textures and the depth buffer

use std::path::Path;

use image::{Rgba, RgbaImage};
use thiserror::Error;
use wgpu::{Device, Queue};

/// Depth format shared by every pipeline that tests depth
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to load image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Sampler behavior for a texture
#[derive(Debug, Clone, Copy)]
pub struct SamplerOptions {
    pub address_mode: wgpu::AddressMode,
    pub filter: wgpu::FilterMode,
}

impl SamplerOptions {
    /// Linear filtering with repeat wrapping
    pub const REPEAT_LINEAR: Self = Self {
        address_mode: wgpu::AddressMode::Repeat,
        filter: wgpu::FilterMode::Linear,
    };

    /// Linear filtering clamped at the edges
    pub const CLAMP_LINEAR: Self = Self {
        address_mode: wgpu::AddressMode::ClampToEdge,
        filter: wgpu::FilterMode::Linear,
    };
}

/// GPU texture with its view and sampler
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Creates a depth attachment matching the surface size
    pub fn depth(device: &Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Depth Sampler"),
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });
        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Uploads an RGBA image as an sRGB texture
    pub fn from_image(
        device: &Device,
        queue: &Queue,
        image: &RgbaImage,
        label: &str,
        sampler: SamplerOptions,
    ) -> Self {
        let (width, height) = image.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: sampler.address_mode,
            address_mode_v: sampler.address_mode,
            address_mode_w: sampler.address_mode,
            mag_filter: sampler.filter,
            min_filter: sampler.filter,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// 1x1 opaque white texture
    pub fn white(device: &Device, queue: &Queue) -> Self {
        let image = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        Self::from_image(device, queue, &image, "White Texture", SamplerOptions::CLAMP_LINEAR)
    }
}

/// Decodes an image file and flips it so row 0 is the bottom
pub fn load_flipped(path: &Path) -> Result<RgbaImage, TextureError> {
    let image = image::open(path).map_err(|source| TextureError::Image {
        path: path.display().to_string(),
        source,
    })?;
    Ok(image.flipv().to_rgba8())
}

/// Two-tone checkerboard used when an image cannot be loaded
pub fn checkerboard(size: u32, cell: u32) -> RgbaImage {
    let cell = cell.max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgba([230, 230, 230, 255])
        } else {
            Rgba([200, 40, 160, 255])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_alternates() {
        let board = checkerboard(8, 2);
        assert_eq!(board.dimensions(), (8, 8));
        assert_eq!(board.get_pixel(0, 0), board.get_pixel(1, 1));
        assert_ne!(board.get_pixel(0, 0), board.get_pixel(2, 0));
        assert_eq!(board.get_pixel(0, 0), board.get_pixel(2, 2));
    }

    #[test]
    fn test_load_flipped_reverses_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("two_rows.png");
        let mut source = RgbaImage::new(1, 2);
        source.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        source.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
        source.save(&path).expect("save png");

        let flipped = load_flipped(&path).expect("load");
        assert_eq!(*flipped.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
        assert_eq!(*flipped.get_pixel(0, 1), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let err = load_flipped(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(err.to_string().contains("not/here.png"));
    }
}
