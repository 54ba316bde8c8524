//! Renderable resources
//!
//! Renderer-facing data handed over by mesh loaders, and the drawable
//! objects built from it:
//! - Geometry: parsed mesh geometry
//! - Material / MultiMaterial: per-face materials
//! - Texture: texture maps
//! - Renderable: drawable objects, optionally animatable

pub mod geometry;
pub mod material;
pub mod mesh;
pub mod texture;

pub use geometry::Geometry;
pub use material::{Material, MultiMaterial};
pub use mesh::{
    AnimationControl, MeshFactory, MorphAnimMesh, Renderable, RenderableFactory, StaticMesh,
};
pub use texture::Texture;
