use std::ptr;

pub struct Texture2D {
    pub(crate) id: u32,
}

impl Texture2D {
    /// Allocates a `width × height` texture with unspecified contents.
    /// Intended for render targets, where the first pass overwrites every texel.
    pub fn new(width: u32, height: u32, format: TextureFormats, filter: TextureFilter) -> Self {
        let mut id = 0;

        unsafe {
            gl::GenTextures(1, (&mut id) as *mut u32);
            gl::BindTexture(gl::TEXTURE_2D, id);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, filter.gl_value());
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, filter.gl_value());

            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                format as isize as i32,
                width as i32,
                height as i32,
                0,
                gl::RGBA,
                gl::FLOAT,
                ptr::null(),
            );

            gl::BindTexture(gl::TEXTURE_2D, 0);
        }

        Self { id }
    }

    pub fn bind(&self, unit: u8) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit as u32);
            gl::BindTexture(gl::TEXTURE_2D, self.id)
        }
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, (&self.id) as *const u32);
        }
    }
}

#[derive(Copy, Clone)]
pub enum TextureFormats {
    RgbaF32 = gl::RGBA32F as isize,
}

#[derive(Copy, Clone)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

impl TextureFilter {
    fn gl_value(&self) -> i32 {
        match self {
            TextureFilter::Nearest => gl::NEAREST as i32,
            TextureFilter::Linear => gl::LINEAR as i32,
        }
    }
}
