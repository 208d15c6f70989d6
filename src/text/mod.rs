//! Bitmap text: glyph atlas construction and layout

pub mod atlas;
pub mod layout;
pub mod pack;

pub use atlas::{AtlasError, GlyphAtlas, GlyphRect};
pub use layout::{GlyphQuad, layout_text};
