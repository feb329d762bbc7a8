pub mod math;
pub mod pipeline;
pub mod shaders;

pub use pipeline::{Pipeline, PipelineError};
