use crate::geometry::Geometry;
use crate::program::Program;

pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    /// Re-establishes the fixed pipeline state from scratch: depth test with
    /// LESS and depth writes on, blending off, full color mask, back-face
    /// culling with CCW front faces, no program, no texture, viewport covering
    /// the whole frame. Callers may not assume anything survived from the
    /// previous frame.
    pub fn reset_state(&mut self, width: u32, height: u32) {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::DepthFunc(gl::LESS);
            gl::DepthMask(gl::TRUE);
            gl::Disable(gl::BLEND);
            gl::ColorMask(gl::TRUE, gl::TRUE, gl::TRUE, gl::TRUE);
            gl::Enable(gl::CULL_FACE);
            gl::FrontFace(gl::CCW);
            gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
            gl::UseProgram(0);
            gl::BindTexture(gl::TEXTURE_2D, 0);
            gl::Viewport(0, 0, width as i32, height as i32);
        }

        self.current_program = 0;
    }

    /// Clears the bound target to transparent black, color and depth.
    pub fn clear(&self) {
        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 0.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }

    pub fn draw(&mut self, geometry: &Geometry, program: &Program) {
        let p_id = program.get_id();
        if self.current_program != p_id {
            unsafe { gl::UseProgram(p_id) }
            self.current_program = p_id;
        }

        unsafe {
            gl::BindVertexArray(geometry.vao());
            gl::DrawArrays(gl::TRIANGLES, 0, geometry.vertices() as i32);
        }
    }
}

impl Default for GlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
