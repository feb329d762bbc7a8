//! GLSL source assembly for the two fullscreen passes.
//!
//! Each stage is built from the GLSL version line, a per-resolution `delta`
//! define, the pass's `remap` prelude and a shared body. The blit pass remaps
//! `[0,1]^2` one texel inward on each side; the visualize pass keeps the
//! coordinates as-is.

use crate::math::texel_delta;

pub const VERSION_PREFIX: &str = "#version 330\n";

const INSET_REMAP: &str = "vec2 remap(vec2 p) { return delta + p * (1.0 - 2.0 * delta); }\n";
const IDENTITY_REMAP: &str = "vec2 remap(vec2 p) { return p; }\n";

const FULLSCREEN_VERT_BODY: &str = r#"
layout(location = 0) in vec2 vsPos;

out vec2 fsUv;

void main() {
    fsUv = remap(vsPos);
    gl_Position = vec4(2.0 * remap(vsPos) - vec2(1.0), 0.0, 1.0);
}
"#;

const BLIT_FRAG_BODY: &str = r#"
in vec2 fsUv;

uniform sampler2D uColorTex;

out vec4 FragColor;

void main() {
    // debug output, stands in for the actual shading work
    FragColor = vec4(fsUv, 0.0, 1.0);
}
"#;

const VISUALIZE_FRAG_BODY: &str = r#"
in vec2 fsUv;

uniform sampler2D uTex;

out vec4 FragColor;

void main() {
    FragColor = vec4(texture(uTex, fsUv).rgb, 1.0);
}
"#;

fn delta_define(width: u32, height: u32) -> String {
    let delta = texel_delta(width, height);

    format!("#define delta vec2({},{})\n", delta.x, delta.y)
}

pub fn blit_vertex(width: u32, height: u32) -> String {
    format!(
        "{VERSION_PREFIX}{}{INSET_REMAP}{FULLSCREEN_VERT_BODY}",
        delta_define(width, height)
    )
}

pub fn blit_fragment(width: u32, height: u32) -> String {
    format!(
        "{VERSION_PREFIX}{}{BLIT_FRAG_BODY}",
        delta_define(width, height)
    )
}

pub fn visualize_vertex() -> String {
    format!("{VERSION_PREFIX}{IDENTITY_REMAP}{FULLSCREEN_VERT_BODY}")
}

pub fn visualize_fragment() -> String {
    format!("{VERSION_PREFIX}{VISUALIZE_FRAG_BODY}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_comes_first() {
        for src in [
            blit_vertex(256, 256),
            blit_fragment(256, 256),
            visualize_vertex(),
            visualize_fragment(),
        ] {
            assert!(src.starts_with("#version 330\n"), "{src}");
        }
    }

    #[test]
    fn blit_stages_carry_texel_delta() {
        let vert = blit_vertex(256, 256);
        let frag = blit_fragment(256, 256);

        assert!(vert.contains("#define delta vec2(0.00390625,0.00390625)"));
        assert!(frag.contains("#define delta vec2(0.00390625,0.00390625)"));
    }

    #[test]
    fn blit_vertex_insets_by_one_texel() {
        let vert = blit_vertex(512, 128);

        assert!(vert.contains("vec2 remap(vec2 p) { return delta + p * (1.0 - 2.0 * delta); }"));
    }

    #[test]
    fn visualize_vertex_remap_is_identity() {
        let vert = visualize_vertex();

        assert!(vert.contains("vec2 remap(vec2 p) { return p; }"));
        assert!(!vert.contains("delta"));
    }

    #[test]
    fn visualize_fragment_samples_utex() {
        let frag = visualize_fragment();

        assert!(frag.contains("uniform sampler2D uTex;"));
        assert!(frag.contains("texture(uTex, fsUv)"));
    }

    #[test]
    fn blit_fragment_writes_uv() {
        let frag = blit_fragment(64, 64);

        assert!(frag.contains("FragColor = vec4(fsUv, 0.0, 1.0);"));
        // sampler may be optimized out by the driver, location -1 is expected
        assert!(frag.contains("uniform sampler2D uColorTex;"));
    }

    #[test]
    fn non_square_delta() {
        let frag = blit_fragment(1280, 720);

        assert!(frag.contains("vec2(0.00078125,"));
    }
}
