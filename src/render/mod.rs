pub mod webgl;
pub mod shaders;
pub mod pipeline;

pub use pipeline::RenderPipeline;
