//! Glyph atlas health check

use crate::app::AppConfig;
use crate::health::check::{CheckResult, SystemCheck};
use crate::text::GlyphAtlas;

/// Checks that a font can be found and rasterized into an atlas
pub struct GlyphAtlasCheck;

impl GlyphAtlasCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GlyphAtlasCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for GlyphAtlasCheck {
    fn name(&self) -> &'static str {
        "Glyph Atlas"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates font discovery and glyph rasterization")
    }

    fn check(&self) -> CheckResult {
        let config = AppConfig::default();
        let mut details = vec![format!(
            "  Configured font: {}",
            config
                .text
                .font_path
                .as_ref()
                .map_or_else(|| "(system)".to_string(), |p| p.display().to_string())
        )];

        match GlyphAtlas::load(&config.text) {
            Ok(atlas) => {
                details.push(format!(
                    "  ✓ {} glyphs in a {}x{} atlas at {}px",
                    atlas.len(),
                    atlas.width(),
                    atlas.height(),
                    atlas.font_size()
                ));
                if atlas.glyph('A').is_none() {
                    return CheckResult::warn("Font is missing basic Latin glyphs")
                        .with_details(details.join("\n"));
                }
                CheckResult::pass("Text rendering available").with_details(details.join("\n"))
            }
            // Menu text falls back to the window title, so this is not fatal
            Err(e) => {
                details.push(format!("  ⚠ {e}"));
                CheckResult::warn("No usable font, menu labels go to the window title")
                    .with_details(details.join("\n"))
            }
        }
    }
}
