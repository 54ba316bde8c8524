//! Scene integration
//!
//! Mesh entities and the per-pass views that bind them into a host scene:
//! - MeshEntity: clip registry, playback state, per-frame driver
//! - MeshView: renderable ownership, load lifecycle, clip mechanics
//! - RenderScene / TriggerSet: host collaborators a view inserts into

pub mod entity;
pub mod host;
pub mod view;

pub use entity::MeshEntity;
pub use host::{RenderScene, TriggerSet, ViewContext};
pub use view::{LoadState, MeshView, ViewPass};
