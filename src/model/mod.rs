//! The flower model: a static hierarchy of named, independently
//! transformable parts. Built once from config; after that the bloom
//! controller is the sole writer of the mutable transform and material
//! fields.

pub mod transform;
pub mod flower;

pub use transform::Transform;
pub use flower::{Flower, Leaf, Material, Petal, MIN_SCALE};
