use cgmath::{ElementWise, InnerSpace, Vector2, Vector3};

/// Size of one texel in UV space for a `width × height` target.
pub fn texel_delta(width: u32, height: u32) -> Vector2<f32> {
    Vector2::new(1.0 / width as f32, 1.0 / height as f32)
}

/// Shrinks a `[0,1]^2` coordinate inward by one texel on each side, so the
/// quad never samples or renders exactly on the texture edge.
/// CPU mirror of the GLSL `remap` emitted by [`crate::shaders`].
pub fn inset_remap(p: Vector2<f32>, delta: Vector2<f32>) -> Vector2<f32> {
    delta + p.mul_element_wise(Vector2::new(1.0, 1.0) - 2.0 * delta)
}

pub fn mix(x: Vector3<f32>, y: Vector3<f32>, a: f32) -> Vector3<f32> {
    x * (1.0 - a) + y * a
}

pub fn distance(a: Vector3<f32>, b: Vector3<f32>) -> f32 {
    (a - b).magnitude()
}

/// Rotates `v` around `axis` by `theta` radians (Rodrigues' rotation formula).
pub fn rotate(v: Vector3<f32>, theta: f32, axis: Vector3<f32>) -> Vector3<f32> {
    let k = axis.normalize();

    v * theta.cos() + k.cross(v) * theta.sin() + k * (k.dot(v) * (1.0 - theta.cos()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!(distance(a, b) < 1e-6, "{a:?} != {b:?}");
    }

    #[test]
    fn remap_corners() {
        let delta = texel_delta(256, 512);

        assert_eq!(delta, Vector2::new(1.0 / 256.0, 1.0 / 512.0));

        let low = inset_remap(Vector2::new(0.0, 0.0), delta);
        let high = inset_remap(Vector2::new(1.0, 1.0), delta);

        assert_eq!(low, delta);
        assert_eq!(high, Vector2::new(1.0 - delta.x, 1.0 - delta.y));
    }

    #[test]
    fn remap_center_is_fixed() {
        let delta = texel_delta(256, 256);
        let center = inset_remap(Vector2::new(0.5, 0.5), delta);

        assert!((center.x - 0.5).abs() < 1e-7);
        assert!((center.y - 0.5).abs() < 1e-7);
    }

    #[test]
    fn mix_endpoints() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-1.0, 0.0, 5.0);

        assert_close(mix(a, b, 0.0), a);
        assert_close(mix(a, b, 1.0), b);
        assert_close(mix(a, b, 0.5), Vector3::new(0.0, 1.0, 4.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);

        assert_close(rotate(x, FRAC_PI_2, z), Vector3::new(0.0, 1.0, 0.0));
        // axis does not need to be unit length
        assert_close(rotate(x, FRAC_PI_2, z * 7.0), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn rotate_preserves_axis() {
        let axis = Vector3::new(0.0, 1.0, 0.0);

        assert_close(rotate(axis, 1.234, axis), axis);
    }

    #[test]
    fn distance_345() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(3.0, 4.0, 0.0);

        assert_eq!(distance(a, b), 5.0);
    }
}
