//! Mesh entities for scene-graph hosts.
//!
//! A [`MeshEntity`] loads a mesh through a host-provided [`MeshLoader`],
//! binds the resulting renderable into one [`MeshView`] per render pass, and
//! drives morph-target clip playback with looping and stop-at-end semantics.

pub mod animation;
pub mod assets;
pub mod config;
pub mod errors;
pub mod events;
pub mod resources;
pub mod scene;

pub use animation::{AnimationAction, AnimationClip, ClipRegistry, Direction, LoopMode};
pub use assets::{LoadCompletion, LoadedMesh, MeshLoader};
pub use config::{ElementRef, MeshConfig, MeshFormat, MeshOptions};
pub use errors::{MeshError, Result};
pub use events::{EventSink, MeshEvent, MeshEventKind};
pub use resources::{
    AnimationControl, Geometry, Material, MeshFactory, MorphAnimMesh, MultiMaterial, Renderable,
    RenderableFactory, StaticMesh, Texture,
};
pub use scene::{LoadState, MeshEntity, MeshView, RenderScene, TriggerSet, ViewContext, ViewPass};
