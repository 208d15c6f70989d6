//! Row packing for glyph bitmaps
//!
//! Boxes go left to right and wrap to a new row once the next box would
//! cross the row width limit. Each row is as tall as its tallest box.

/// Result of packing a list of boxes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packing {
    /// Top-left corner of each box, in input order
    pub positions: Vec<(u32, u32)>,
    pub width: u32,
    pub height: u32,
}

/// Packs `sizes` into rows no wider than `min(sum of widths, max_width)`
///
/// A box wider than the limit still gets a row of its own, so the
/// resulting width may exceed `max_width` in that case.
pub fn pack_rows(sizes: &[(u32, u32)], max_width: u32) -> Packing {
    let total: u32 = sizes.iter().map(|&(w, _)| w).sum();
    let limit = total.min(max_width);

    let mut positions = Vec::with_capacity(sizes.len());
    let mut x = 0;
    let mut y = 0;
    let mut row_height = 0;
    let mut width = 0;

    for &(w, h) in sizes {
        if x > 0 && x + w > limit {
            y += row_height;
            x = 0;
            row_height = 0;
        }
        positions.push((x, y));
        x += w;
        width = width.max(x);
        row_height = row_height.max(h);
    }

    Packing {
        positions,
        width,
        height: y + row_height,
    }
}
