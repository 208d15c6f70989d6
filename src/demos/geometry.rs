//! Static vertex data for the demos

use crate::app::renderer::mesh::{ColorVertex, TexVertex};

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];

/// Red, green and blue corners
pub const TRIANGLE: [ColorVertex; 3] = [
    ColorVertex::new([-0.5, -0.5, 0.0], RED),
    ColorVertex::new([0.5, -0.5, 0.0], GREEN),
    ColorVertex::new([0.0, 0.5, 0.0], BLUE),
];

/// Four corners in triangle-strip order
pub const QUAD_STRIP: [ColorVertex; 4] = [
    ColorVertex::new([-0.5, -0.5, 0.0], RED),
    ColorVertex::new([0.5, -0.5, 0.0], GREEN),
    ColorVertex::new([-0.5, 0.5, 0.0], BLUE),
    ColorVertex::new([0.5, 0.5, 0.0], WHITE),
];

/// Unit cube corners, front face first
pub const CUBE_VERTICES: [ColorVertex; 8] = [
    ColorVertex::new([-0.5, -0.5, 0.5], RED),
    ColorVertex::new([0.5, -0.5, 0.5], GREEN),
    ColorVertex::new([0.5, 0.5, 0.5], BLUE),
    ColorVertex::new([-0.5, 0.5, 0.5], WHITE),
    ColorVertex::new([-0.5, -0.5, -0.5], RED),
    ColorVertex::new([0.5, -0.5, -0.5], GREEN),
    ColorVertex::new([0.5, 0.5, -0.5], BLUE),
    ColorVertex::new([-0.5, 0.5, -0.5], YELLOW),
];

/// Two triangles per face over [`CUBE_VERTICES`]
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 2, 3, 0, //
    4, 5, 6, 6, 7, 4, //
    4, 5, 1, 1, 0, 4, //
    6, 7, 3, 3, 2, 6, //
    5, 6, 2, 2, 1, 5, //
    7, 4, 0, 0, 3, 7,
];

/// Four vertices per face so every face maps the whole texture
pub const TEXTURED_CUBE_VERTICES: [TexVertex; 24] = [
    // front
    TexVertex::new([-0.5, -0.5, 0.5], [0.0, 0.0]),
    TexVertex::new([0.5, -0.5, 0.5], [1.0, 0.0]),
    TexVertex::new([0.5, 0.5, 0.5], [1.0, 1.0]),
    TexVertex::new([-0.5, 0.5, 0.5], [0.0, 1.0]),
    // back
    TexVertex::new([-0.5, -0.5, -0.5], [0.0, 0.0]),
    TexVertex::new([0.5, -0.5, -0.5], [1.0, 0.0]),
    TexVertex::new([0.5, 0.5, -0.5], [1.0, 1.0]),
    TexVertex::new([-0.5, 0.5, -0.5], [0.0, 1.0]),
    // right
    TexVertex::new([0.5, -0.5, -0.5], [0.0, 0.0]),
    TexVertex::new([0.5, 0.5, -0.5], [1.0, 0.0]),
    TexVertex::new([0.5, 0.5, 0.5], [1.0, 1.0]),
    TexVertex::new([0.5, -0.5, 0.5], [0.0, 1.0]),
    // left
    TexVertex::new([-0.5, 0.5, -0.5], [0.0, 0.0]),
    TexVertex::new([-0.5, -0.5, -0.5], [1.0, 0.0]),
    TexVertex::new([-0.5, -0.5, 0.5], [1.0, 1.0]),
    TexVertex::new([-0.5, 0.5, 0.5], [0.0, 1.0]),
    // bottom
    TexVertex::new([-0.5, -0.5, -0.5], [0.0, 0.0]),
    TexVertex::new([0.5, -0.5, -0.5], [1.0, 0.0]),
    TexVertex::new([0.5, -0.5, 0.5], [1.0, 1.0]),
    TexVertex::new([-0.5, -0.5, 0.5], [0.0, 1.0]),
    // top
    TexVertex::new([0.5, 0.5, -0.5], [0.0, 0.0]),
    TexVertex::new([-0.5, 0.5, -0.5], [1.0, 0.0]),
    TexVertex::new([-0.5, 0.5, 0.5], [1.0, 1.0]),
    TexVertex::new([0.5, 0.5, 0.5], [0.0, 1.0]),
];

/// Two triangles per face over [`TEXTURED_CUBE_VERTICES`]
pub const TEXTURED_CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 2, 3, 0, //
    4, 5, 6, 6, 7, 4, //
    8, 9, 10, 10, 11, 8, //
    12, 13, 14, 14, 15, 12, //
    16, 17, 18, 18, 19, 16, //
    20, 21, 22, 22, 23, 20,
];
