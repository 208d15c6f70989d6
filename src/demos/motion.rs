//! Animation transforms, as pure functions of time

use glam::{Mat4, Vec3};

/// Maps the [-1, 1] clip depth of untransformed geometry into wgpu's [0, 1]
pub fn depth_remap() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, 0.5)) * Mat4::from_scale(Vec3::new(1.0, 1.0, 0.5))
}

/// Pulsing, wobbling, orbiting transform of the triangle and quad demos
///
/// `S(|sin t|, |sin t|, 1) * Rz(sin t * 45°) * T(sin t, cos t, 0)`
pub fn spin_transform(t: f32) -> Mat4 {
    let s = t.sin().abs();
    Mat4::from_scale(Vec3::new(s, s, 1.0))
        * Mat4::from_rotation_z(t.sin() * 45f32.to_radians())
        * Mat4::from_translation(Vec3::new(t.sin(), t.cos(), 0.0))
}

/// Tumbling rotation `Ry(0.8t) * Rx(0.5t)`
pub fn cube_rotation(t: f32) -> Mat4 {
    Mat4::from_rotation_y(0.8 * t) * Mat4::from_rotation_x(0.5 * t)
}

/// Cube pushed three units into the screen, then tumbled
pub fn perspective_model(t: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0)) * cube_rotation(t)
}

/// 45° vertical field of view, near 0.1, far 100
pub fn perspective_projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(45f32.to_radians(), aspect, 0.1, 100.0)
}

/// Background triangle of the menu demo
///
/// `T(0.45 sin t, 0.25 cos t) * Rz(sin t * 45°) * S(|sin t| * 0.5 * scale + 0.3)`
///
/// The wobble turns counter-clockwise while `sin t` rises.
pub fn menu_triangle_transform(t: f32, scale: f32) -> Mat4 {
    let s = t.sin().abs() * 0.5 * scale + 0.3;
    Mat4::from_translation(Vec3::new(0.45 * t.sin(), 0.25 * t.cos(), 0.0))
        * Mat4::from_rotation_z(t.sin() * 45f32.to_radians())
        * Mat4::from_scale(Vec3::new(s, s, 1.0))
}
