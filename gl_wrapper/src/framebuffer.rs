use crate::texture::Texture2D;

pub struct FrameBuffer {
    id: u32,
}

impl FrameBuffer {
    /// Generates an empty framebuffer object. Color attachments are supplied
    /// later through [`attach_color`](Self::attach_color).
    pub fn new() -> Self {
        let mut id = 0;

        unsafe {
            gl::GenFramebuffers(1, (&mut id) as *mut u32);
        }

        Self { id }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, self.id);
        }
    }

    /// Binds the framebuffer and attaches `texture` as its color attachment.
    /// The framebuffer stays bound afterwards. Re-attaching the same texture
    /// is idempotent. An incomplete framebuffer is reported on stderr since
    /// it produces undefined rendering rather than a hard failure.
    pub fn attach_color(&self, texture: &Texture2D) {
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, self.id);

            gl::FramebufferTexture2D(
                gl::FRAMEBUFFER,
                gl::COLOR_ATTACHMENT0,
                gl::TEXTURE_2D,
                texture.id,
                0,
            );

            let status = gl::CheckFramebufferStatus(gl::FRAMEBUFFER);
            if status != gl::FRAMEBUFFER_COMPLETE {
                eprintln!("Framebuffer not complete. Status: {status:#08x}");
            }
        }
    }

    pub fn bind_default() {
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FrameBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteFramebuffers(1, (&self.id) as *const u32);
        }
    }
}
