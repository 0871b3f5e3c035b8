pub mod surface;
pub mod generator;

pub use surface::{Mesh, Vertex};
pub use generator::{FlowerMeshes, MeshGenerator, MeshParams};
