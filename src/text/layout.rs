//! Lays out a string as NDC quads over a glyph atlas

use super::atlas::GlyphAtlas;

/// One glyph ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    /// `[left, top, right, bottom]` in NDC
    pub rect: [f32; 4],
    /// `[u0, v0, u1, v1]` in the atlas
    pub uv: [f32; 4],
}

/// Places `text` with its top-left corner at `(left, top)` in NDC
///
/// `screen` is the surface size in pixels. Characters missing from the
/// atlas emit nothing and advance the pen by the font size.
pub fn layout_text(
    atlas: &GlyphAtlas,
    text: &str,
    left: f32,
    top: f32,
    screen: [u32; 2],
) -> Vec<GlyphQuad> {
    let sx = 2.0 / screen[0].max(1) as f32;
    let sy = 2.0 / screen[1].max(1) as f32;

    let mut pen = left;
    let mut quads = Vec::with_capacity(text.len());
    for c in text.chars() {
        let Some(rect) = atlas.glyph(c) else {
            pen += atlas.font_size() * sx;
            continue;
        };
        let w = rect.w as f32 * sx;
        let h = rect.h as f32 * sy;
        quads.push(GlyphQuad {
            rect: [pen, top, pen + w, top - h],
            uv: atlas.uv(rect),
        });
        pen += w;
    }
    quads
}

/// Width of `text` in NDC without building quads
pub fn text_width(atlas: &GlyphAtlas, text: &str, screen_width: u32) -> f32 {
    let sx = 2.0 / screen_width.max(1) as f32;
    text.chars()
        .map(|c| match atlas.glyph(c) {
            Some(rect) => rect.w as f32 * sx,
            None => atlas.font_size() * sx,
        })
        .sum()
}
