pub mod vec3;
pub mod color;
pub mod matrix;

pub use vec3::Vec3;
pub use color::Color;
pub use matrix::Mat4;
