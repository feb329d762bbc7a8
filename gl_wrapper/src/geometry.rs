use std::ffi::c_void;

use crate::UNIT_QUAD;

pub struct Geometry {
    vao: u32,
    vbo: u32,
    vertices: usize,
}

impl Geometry {
    /// Uploads the static fullscreen quad. One attribute: vec2 position at
    /// location 0, tightly packed, `STATIC_DRAW`.
    pub fn unit_quad() -> Self {
        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, (&mut vao) as *mut u32);
            gl::GenBuffers(1, (&mut vbo) as *mut u32);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                (UNIT_QUAD.len() * std::mem::size_of::<f32>()) as isize,
                UNIT_QUAD.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                (2 * std::mem::size_of::<f32>()) as i32,
                std::ptr::null(),
            );
            gl::EnableVertexAttribArray(0);

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        let vertices = UNIT_QUAD.len() / 2;

        Self { vao, vbo, vertices }
    }

    pub fn vao(&self) -> u32 {
        self.vao
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }
}

impl Drop for Geometry {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, (&self.vbo) as *const u32);
            gl::DeleteVertexArrays(1, (&self.vao) as *const u32);
        }
    }
}
