//! Glyph atlas rasterized with rusttype

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use rusttype::{Font, Scale, point};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::pack::pack_rows;
use crate::app::config::TextConfig;

/// Fonts tried after the configured one
pub const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("failed to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a usable font file")]
    InvalidFont(PathBuf),

    #[error("no font found (tried {tried} locations)")]
    NoFont { tried: usize },
}

/// Printable ASCII, space through tilde
pub fn ascii_charset() -> impl Iterator<Item = char> {
    (32u8..=126).map(char::from)
}

/// Pixel rectangle of one glyph cell inside the atlas
///
/// The cell includes the padding on every side; ink starts `padding` pixels
/// in, and text layout advances by the full cell width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// White glyph coverage in the alpha channel, plus a lookup per character
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    image: RgbaImage,
    glyphs: HashMap<char, GlyphRect>,
    font_size: f32,
}

impl GlyphAtlas {
    /// Assembles an atlas from already rasterized parts
    pub fn from_parts(image: RgbaImage, glyphs: HashMap<char, GlyphRect>, font_size: f32) -> Self {
        Self {
            image,
            glyphs,
            font_size,
        }
    }

    /// Rasterizes `chars` from raw font bytes
    pub fn from_font_bytes(
        bytes: Vec<u8>,
        chars: impl IntoIterator<Item = char>,
        font_size: f32,
        padding: u32,
        max_width: u32,
    ) -> Option<Self> {
        let font = Font::try_from_vec(bytes)?;
        Some(Self::rasterize(&font, chars, font_size, padding, max_width))
    }

    /// Loads the first readable font and builds the ASCII atlas from it
    pub fn load(config: &TextConfig) -> Result<Self, AtlasError> {
        let path = find_font(config.font_path.as_deref())?;
        let bytes = std::fs::read(&path).map_err(|source| AtlasError::Io {
            path: path.clone(),
            source,
        })?;
        let atlas = Self::from_font_bytes(
            bytes,
            ascii_charset(),
            config.font_size,
            config.padding,
            config.max_atlas_width,
        )
        .ok_or_else(|| AtlasError::InvalidFont(path.clone()))?;

        info!(
            font = %path.display(),
            width = atlas.width(),
            height = atlas.height(),
            glyphs = atlas.len(),
            "Glyph atlas built"
        );
        Ok(atlas)
    }

    fn rasterize(
        font: &Font<'_>,
        chars: impl IntoIterator<Item = char>,
        font_size: f32,
        padding: u32,
        max_width: u32,
    ) -> Self {
        let scale = Scale::uniform(font_size);
        let v_metrics = font.v_metrics(scale);
        let line_height = (v_metrics.ascent - v_metrics.descent).ceil() as u32;

        let chars: Vec<char> = chars.into_iter().collect();
        let cells: Vec<(u32, u32)> = chars
            .iter()
            .map(|&c| {
                let advance = font.glyph(c).scaled(scale).h_metrics().advance_width.ceil() as u32;
                let w = if advance == 0 { (font_size / 4.0) as u32 } else { advance };
                let h = if line_height == 0 { (font_size / 2.0) as u32 } else { line_height };
                (w, h)
            })
            .collect();

        let (rects, [width, height]) = place_cells(&cells, padding, max_width);
        let mut image = RgbaImage::from_pixel(width.max(1), height.max(1), Rgba([255, 255, 255, 0]));

        let mut glyphs = HashMap::with_capacity(chars.len());
        for ((&c, &(w, h)), &rect) in chars.iter().zip(&cells).zip(&rects) {
            let (ox, oy) = (rect.x + padding, rect.y + padding);
            let glyph = font
                .glyph(c)
                .scaled(scale)
                .positioned(point(0.0, v_metrics.ascent));
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    let x = bb.min.x + gx as i32;
                    let y = bb.min.y + gy as i32;
                    // Clip ink that leaks outside the cell
                    if x < 0 || y < 0 || x as u32 >= w || y as u32 >= h {
                        return;
                    }
                    let alpha = (coverage * 255.0).round() as u8;
                    image.put_pixel(ox + x as u32, oy + y as u32, Rgba([255, 255, 255, alpha]));
                });
            }
            glyphs.insert(c, rect);
        }

        debug!(chars = chars.len(), rows_height = height, "Rasterized glyphs");
        Self {
            image,
            glyphs,
            font_size,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Cell of `c`, if it was rasterized
    pub fn glyph(&self, c: char) -> Option<GlyphRect> {
        self.glyphs.get(&c).copied()
    }

    /// Texture coordinates `[u0, v0, u1, v1]` of a cell
    pub fn uv(&self, rect: GlyphRect) -> [f32; 4] {
        let w = self.width() as f32;
        let h = self.height() as f32;
        [
            rect.x as f32 / w,
            rect.y as f32 / h,
            (rect.x + rect.w) as f32 / w,
            (rect.y + rect.h) as f32 / h,
        ]
    }
}

/// Padded cell rectangles for ink sizes `cells`, plus the atlas size
fn place_cells(cells: &[(u32, u32)], padding: u32, max_width: u32) -> (Vec<GlyphRect>, [u32; 2]) {
    let padded: Vec<(u32, u32)> = cells
        .iter()
        .map(|&(w, h)| (w + padding * 2, h + padding * 2))
        .collect();
    let packing = pack_rows(&padded, max_width);
    let rects = padded
        .iter()
        .zip(&packing.positions)
        .map(|(&(w, h), &(x, y))| GlyphRect { x, y, w, h })
        .collect();
    (rects, [packing.width, packing.height])
}

/// Returns the configured font if present, else the first system font found
pub fn find_font(preferred: Option<&Path>) -> Result<PathBuf, AtlasError> {
    let candidates: Vec<PathBuf> = preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from))
        .collect();

    match candidates.iter().find(|p| p.is_file()) {
        Some(path) => Ok(path.clone()),
        None => {
            warn!(tried = candidates.len(), "No font file found");
            Err(AtlasError::NoFont {
                tried: candidates.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_charset_bounds() {
        let chars: Vec<char> = ascii_charset().collect();
        assert_eq!(chars.len(), 95);
        assert_eq!(chars.first(), Some(&' '));
        assert_eq!(chars.last(), Some(&'~'));
    }

    #[test]
    fn test_find_font_prefers_existing_configured_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("font.ttf");
        std::fs::write(&path, b"not really a font").expect("write");
        assert_eq!(find_font(Some(&path)).expect("found"), path);
    }

    #[test]
    fn test_invalid_font_bytes_rejected() {
        let atlas = GlyphAtlas::from_font_bytes(vec![0, 1, 2, 3], ascii_charset(), 24.0, 2, 2048);
        assert!(atlas.is_none());
    }

    #[test]
    fn test_load_reports_invalid_font() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"garbage").expect("write");
        let config = TextConfig {
            font_path: Some(path.clone()),
            ..TextConfig::default()
        };
        match GlyphAtlas::load(&config) {
            Err(AtlasError::InvalidFont(p)) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_uv_of_cell() {
        let mut glyphs = HashMap::new();
        let rect = GlyphRect { x: 10, y: 0, w: 10, h: 20 };
        glyphs.insert('A', rect);
        let atlas = GlyphAtlas::from_parts(RgbaImage::new(40, 20), glyphs, 24.0);
        assert_eq!(atlas.uv(rect), [0.25, 0.0, 0.5, 1.0]);
        assert_eq!(atlas.glyph('A'), Some(rect));
        assert_eq!(atlas.glyph('B'), None);
    }

    #[test]
    fn test_cells_include_padding_and_never_overlap() {
        let cells = [(10, 20), (6, 20), (12, 20), (8, 20)];
        let (rects, [width, height]) = place_cells(&cells, 2, 32);

        for (rect, &(w, h)) in rects.iter().zip(&cells) {
            assert_eq!((rect.w, rect.h), (w + 4, h + 4));
            assert!(rect.x + rect.w <= width && rect.y + rect.h <= height);
        }
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                let apart = a.x + a.w <= b.x || b.x + b.w <= a.x || a.y + a.h <= b.y || b.y + b.h <= a.y;
                assert!(apart, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_system_font_atlas_when_available() {
        // Only meaningful on machines that ship one of the system fonts
        let Ok(path) = find_font(None) else {
            return;
        };
        let bytes = std::fs::read(&path).expect("read font");
        let atlas = GlyphAtlas::from_font_bytes(bytes, ascii_charset(), 24.0, 2, 2048)
            .expect("system font parses");
        assert_eq!(atlas.len(), 95);
        assert!(atlas.width() <= 2048);
        let space = atlas.glyph(' ').expect("space present");
        assert!(space.w > 4 && space.h > 4);
    }
}
