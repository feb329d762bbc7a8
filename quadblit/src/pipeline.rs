//! The offscreen two-pass render pipeline.
//!
//! Pass 1 ("blit") renders the fullscreen quad into a float color texture
//! through the first framebuffer. Pass 2 ("visualize") samples that same
//! texture and writes it to the default framebuffer. The texture is the only
//! link between the passes; ordering is guaranteed by submitting both passes
//! from one thread to one device queue.

use gl_wrapper::framebuffer::FrameBuffer;
use gl_wrapper::geometry::Geometry;
use gl_wrapper::program::{Program, ProgramBuilder, ProgramError, ShaderStage};
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::texture::{Texture2D, TextureFilter, TextureFormats};

use crate::shaders;

pub struct Pipeline {
    width: u32,
    height: u32,
    color_target: Texture2D,
    // slot 1 is allocated but idle, see DESIGN.md
    framebuffers: [FrameBuffer; 2],
    blit: Program,
    blit_tex_location: i32,
    visualize: Program,
    visualize_tex_location: i32,
    quad: Geometry,
    renderer: GlRenderer,
}

impl Pipeline {
    /// Creates every GPU resource the two passes need. Requires a current GL
    /// context. `width` and `height` are fixed for the pipeline's lifetime.
    pub fn new(width: u32, height: u32) -> Result<Self, PipelineError> {
        let color_target = Texture2D::new(
            width,
            height,
            TextureFormats::RgbaF32,
            TextureFilter::Linear,
        );

        let framebuffers = [FrameBuffer::new(), FrameBuffer::new()];

        let blit_vert = shaders::blit_vertex(width, height);
        let blit_frag = shaders::blit_fragment(width, height);
        let blit = ProgramBuilder::new(&blit_vert, &blit_frag)
            .build()
            .map_err(|e| PipelineError::from_program("blit", &blit_vert, &blit_frag, e))?;
        // the blit fragment stage never reads its sampler, so -1 is expected
        let blit_tex_location = blit.uniform_location("uColorTex");

        let vis_vert = shaders::visualize_vertex();
        let vis_frag = shaders::visualize_fragment();
        let visualize = ProgramBuilder::new(&vis_vert, &vis_frag)
            .build()
            .map_err(|e| PipelineError::from_program("visualize", &vis_vert, &vis_frag, e))?;
        let visualize_tex_location = visualize.uniform_location("uTex");
        debug_assert!(visualize_tex_location >= 0);

        let quad = Geometry::unit_quad();

        Ok(Self {
            width,
            height,
            color_target,
            framebuffers,
            blit,
            blit_tex_location,
            visualize,
            visualize_tex_location,
            quad,
            renderer: GlRenderer::new(),
        })
    }

    /// Draws one frame into the default framebuffer. Deterministic: two calls
    /// with no intervening state change produce identical output.
    pub fn render_frame(&mut self) {
        self.renderer.reset_state(self.width, self.height);

        // blit pass: quad -> color texture
        let fbo = &self.framebuffers[0];
        fbo.bind();
        fbo.attach_color(&self.color_target);
        self.renderer.clear();
        self.renderer.draw(&self.quad, &self.blit);

        // visualize pass: color texture -> screen
        FrameBuffer::bind_default();
        self.renderer.clear();
        self.visualize.set_int(self.visualize_tex_location, 0);
        self.color_target.bind(0);
        self.renderer.draw(&self.quad, &self.visualize);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn blit_sampler_location(&self) -> i32 {
        self.blit_tex_location
    }

    pub fn visualize_sampler_location(&self) -> i32 {
        self.visualize_tex_location
    }
}

// Not a thiserror derive: the `source` field holds shader source text, which
// thiserror would otherwise treat as the error's `source()`.
#[derive(Debug)]
pub enum PipelineError {
    ShaderCompile {
        pass: &'static str,
        stage: ShaderStage,
        source: String,
        log: String,
    },
    ShaderLink { pass: &'static str, log: String },
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShaderCompile {
                pass,
                stage,
                source,
                log,
            } => write!(
                f,
                "could not compile {stage} shader for the {pass} pass\n\n{source}\n\n{log}"
            ),
            Self::ShaderLink { pass, log } => {
                write!(f, "could not link program for the {pass} pass\n\n{log}")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

impl PipelineError {
    fn from_program(pass: &'static str, vert: &str, frag: &str, err: ProgramError) -> Self {
        match err {
            ProgramError::Compilation { stage, log } => {
                let source = match stage {
                    ShaderStage::Vertex => vert.to_string(),
                    ShaderStage::Fragment => frag.to_string(),
                };

                Self::ShaderCompile {
                    pass,
                    stage,
                    source,
                    log,
                }
            }
            ProgramError::Linking(log) => Self::ShaderLink { pass, log },
        }
    }
}
