use std::ffi::{c_char, CString};
use std::fmt;

use gl::types::GLuint;
use thiserror::Error;

pub struct ProgramBuilder {
    vert: CString,
    frag: CString,
}

impl ProgramBuilder {
    pub fn new(vert_src: &str, frag_src: &str) -> Self {
        Self {
            vert: CString::new(vert_src).unwrap(),
            frag: CString::new(frag_src).unwrap(),
        }
    }

    pub fn build(self) -> Result<Program, ProgramError> {
        unsafe {
            let vert = compile_stage(&self.vert, ShaderStage::Vertex)?;
            let frag = compile_stage(&self.frag, ShaderStage::Fragment)?;

            let mut success: i32 = 0;

            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let mut buf = [0_u8; 1024];

                gl::GetProgramInfoLog(
                    program,
                    1024,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );

                return Err(ProgramError::Linking(log_to_string(&buf)));
            }

            gl::DetachShader(program, vert);
            gl::DetachShader(program, frag);

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            Ok(Program { id: program })
        }
    }
}

unsafe fn compile_stage(src: &CString, stage: ShaderStage) -> Result<GLuint, ProgramError> {
    let shader = gl::CreateShader(match stage {
        ShaderStage::Vertex => gl::VERTEX_SHADER,
        ShaderStage::Fragment => gl::FRAGMENT_SHADER,
    });

    gl::ShaderSource(
        shader,
        1,
        (&src.as_ptr()) as *const *const c_char,
        std::ptr::null(),
    );

    gl::CompileShader(shader);

    let mut success: i32 = 0;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);
    if success != 1 {
        let mut buf = [0_u8; 1024];

        gl::GetShaderInfoLog(
            shader,
            1024,
            std::ptr::null_mut(),
            buf.as_mut_ptr() as *mut c_char,
        );

        return Err(ProgramError::Compilation {
            stage,
            log: log_to_string(&buf),
        });
    }

    Ok(shader)
}

fn log_to_string(buf: &[u8]) -> String {
    let data = if buf.contains(&0) {
        buf.split(|a| *a == 0).next().unwrap()
    } else {
        buf
    };

    String::from_utf8_lossy(data).to_string()
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("could not compile {stage} shader:\n{log}")]
    Compilation { stage: ShaderStage, log: String },
    #[error("could not link program:\n{0}")]
    Linking(String),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    /// -1 means the uniform is absent or was optimized out by the driver.
    pub fn uniform_location(&self, name: &str) -> i32 {
        let name = CString::new(name).unwrap();

        unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) }
    }

    /// Binds the program and sets an integer uniform. Location -1 is a no-op,
    /// matching GL semantics.
    pub fn set_int(&self, location: i32, value: i32) {
        unsafe {
            gl::UseProgram(self.id);
            gl::Uniform1i(location, value);
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}
