/// Two CCW triangles covering the unit square, tightly packed vec2 positions.
/// The vertex stage is responsible for remapping `[0,1]^2` into clip space.
#[rustfmt::skip]
pub const UNIT_QUAD: [f32; 12] = [
    0.0, 0.0,
    1.0, 0.0,
    0.0, 1.0,
    1.0, 0.0,
    1.0, 1.0,
    0.0, 1.0,
];

pub mod framebuffer;
pub mod geometry;
pub mod program;
pub mod renderer;
pub mod texture;

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(i: usize) -> [(f32, f32); 3] {
        let v = &UNIT_QUAD[i * 6..i * 6 + 6];

        [(v[0], v[1]), (v[2], v[3]), (v[4], v[5])]
    }

    fn signed_area(t: [(f32, f32); 3]) -> f32 {
        0.5 * ((t[1].0 - t[0].0) * (t[2].1 - t[0].1) - (t[2].0 - t[0].0) * (t[1].1 - t[0].1))
    }

    #[test]
    fn quad_triangles_wind_ccw() {
        // positive signed area means CCW, the front-face direction culling expects
        assert!(signed_area(triangle(0)) > 0.0);
        assert!(signed_area(triangle(1)) > 0.0);
    }

    #[test]
    fn quad_covers_unit_square() {
        assert_eq!(UNIT_QUAD.len(), 12);

        // the triangles share only the diagonal, so areas summing to 1 with
        // every vertex inside [0,1]^2 and all four corners present means the
        // square is covered exactly
        assert_eq!(signed_area(triangle(0)) + signed_area(triangle(1)), 1.0);

        for v in &UNIT_QUAD {
            assert!((0.0..=1.0).contains(v));
        }

        for corner in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
            assert!(
                UNIT_QUAD.chunks(2).any(|v| (v[0], v[1]) == corner),
                "missing corner {corner:?}"
            );
        }
    }
}
