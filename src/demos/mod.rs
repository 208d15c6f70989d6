//! The five demos, each a [`crate::app::Demo`]

pub mod cube;
pub mod geometry;
pub mod menu;
pub mod motion;
pub mod perspective;
pub mod spin;

pub use cube::CubeDemo;
pub use menu::MenuDemo;
pub use perspective::PerspectiveDemo;
pub use spin::{QuadDemo, TriangleDemo};

/// Dark teal background of the simple demos
pub const SIMPLE_CLEAR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};
