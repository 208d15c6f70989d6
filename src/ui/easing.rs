//! Interpolation and easing helpers used by overlay transitions

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep on `[0, 1]`
pub fn smoothstep(x: f32) -> f32 {
    x * x * (3.0 - 2.0 * x)
}

/// Cubic ease-out on `[0, 1]`
pub fn ease_out_cubic(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(3)
}

/// Moves `current` toward `target` by a frame-rate independent fraction
///
/// The step factor `dt * rate` is clamped to `[0, 1]`, so a value never
/// passes its target no matter how long the frame was.
pub fn approach(current: f32, target: f32, dt: f32, rate: f32) -> f32 {
    lerp(current, target, (dt * rate).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_approach_never_overshoots() {
        let mut value = 0.0;
        let mut last = value;
        for _ in 0..200 {
            value = approach(value, 1.0, 1.0 / 60.0, 8.0);
            assert!(value >= last);
            assert!(value <= 1.0);
            last = value;
        }
        assert!((value - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_approach_long_frame_lands_on_target() {
        // A stalled frame clamps the factor to 1 instead of overshooting
        assert_eq!(approach(-0.6, 0.0, 2.0, 8.0), 0.0);
    }

    #[test]
    fn test_approach_zero_dt_is_identity() {
        assert_eq!(approach(0.3, 1.0, 0.0, 6.0), 0.3);
    }
}
