//! Mesh View
//!
//! A view owns one renderable for one render pass. It goes through
//! `Unloaded -> Loading -> Loaded` exactly once and never back; animation
//! requests made before the renderable exists are buffered in a single
//! last-writer-wins slot and applied on the first update after loading.

use std::fmt;
use std::sync::Arc;

use crate::animation::AnimationClip;
use crate::assets::{LoadCompletion, LoadedMesh};
use crate::config::{MeshConfig, MeshFormat};
use crate::resources::{MultiMaterial, Renderable};
use crate::scene::host::ViewContext;

/// Render pass a view draws for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewPass {
    Primary,
    /// Duplicate rendering for a secondary pass (reflection, occlusion).
    Stencil,
}

impl fmt::Display for ViewPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewPass::Primary => f.write_str("primary"),
            ViewPass::Stencil => f.write_str("stencil"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
    /// The loader gave up without completing. Terminal.
    Failed,
}

pub struct MeshView {
    pass: ViewPass,
    config: Arc<MeshConfig>,
    context: ViewContext,

    state: LoadState,
    completion: Option<flume::Receiver<LoadedMesh>>,
    renderable: Option<Box<dyn Renderable>>,
    pending_animation: Option<Arc<AnimationClip>>,
    dirty: bool,
}

impl fmt::Debug for MeshView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeshView")
            .field("pass", &self.pass)
            .field("state", &self.state)
            .field("pending_animation", &self.pending_animation)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl MeshView {
    /// Creates a view in the `Unloaded` state. Call [`MeshView::load`] to start loading.
    #[must_use]
    pub fn new(pass: ViewPass, config: Arc<MeshConfig>, context: ViewContext) -> Self {
        Self {
            pass,
            config,
            context,
            state: LoadState::Unloaded,
            completion: None,
            renderable: None,
            pending_animation: None,
            dirty: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn pass(&self) -> ViewPass {
        self.pass
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    #[must_use]
    pub fn renderable(&self) -> Option<&dyn Renderable> {
        self.renderable.as_deref()
    }

    #[must_use]
    pub fn pending_animation(&self) -> Option<&Arc<AnimationClip>> {
        self.pending_animation.as_ref()
    }

    /// Returns and clears the redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Starts loading the mesh source. Only the first call has an effect.
    pub fn load(&mut self) {
        if self.state != LoadState::Unloaded {
            log::warn!("{} view for {} is already loading", self.pass, self.config.mesh);
            return;
        }

        self.state = LoadState::Loading;
        self.pending_animation = None;

        match self.config.format {
            MeshFormat::Json => self.load_json(),
        }
    }

    fn load_json(&mut self) {
        let (sender, receiver) = flume::bounded(1);
        self.completion = Some(receiver);

        log::debug!("Loading {} for {} view", self.config.mesh, self.pass);
        let completion = LoadCompletion::new(self.config.mesh.clone(), sender);
        self.context.loader.load(&self.config.mesh, completion);
    }

    /// Applies a finished load, if one has arrived. Returns whether the view
    /// became loaded during this call.
    pub fn poll_load(&mut self) -> bool {
        if self.state != LoadState::Loading {
            return false;
        }
        let Some(receiver) = self.completion.as_ref() else {
            return false;
        };

        match receiver.try_recv() {
            Ok(mesh) => {
                self.completion = None;
                self.finish_load(mesh);
                true
            }
            Err(flume::TryRecvError::Empty) => false,
            Err(flume::TryRecvError::Disconnected) => {
                log::error!(
                    "Loader dropped {} without completing; {} view will not animate",
                    self.config.mesh,
                    self.pass
                );
                self.completion = None;
                self.state = LoadState::Failed;
                false
            }
        }
    }

    fn finish_load(&mut self, mesh: LoadedMesh) {
        let LoadedMesh {
            geometry,
            mut materials,
        } = mesh;

        for material in &mut materials {
            material.disable_map_flip();
        }

        let renderable = if self.config.animated {
            if let Some(first) = materials.first_mut() {
                first.morph_targets = true;
                first.disable_map_flip();
            }
            self.context
                .factory
                .create_animated(geometry, MultiMaterial::new(materials))
        } else {
            self.context
                .factory
                .create_static(geometry, MultiMaterial::new(materials))
        };

        self.context.scene.add(&*renderable);
        self.context.triggers.add(&*renderable);
        self.context.scene.attach(
            &self.config.element,
            self.config.center,
            self.config.pixel_scale,
        );

        self.renderable = Some(renderable);
        self.state = LoadState::Loaded;
        log::debug!("Loaded {} for {} view", self.config.mesh, self.pass);
    }

    /// Plays `clip` now, or buffers it until the renderable exists.
    pub fn play_animation(&mut self, clip: &Arc<AnimationClip>) {
        if !self.is_loaded() {
            if let Some(replaced) = self.pending_animation.replace(Arc::clone(clip)) {
                log::debug!(
                    "{} view replaced pending animation {} with {}",
                    self.pass,
                    replaced.name,
                    clip.name
                );
            }
            return;
        }

        if let Some(stale) = self.pending_animation.take() {
            log::debug!("{} view dropped pending animation {}", self.pass, stale.name);
        }
        self.apply_clip(clip);
    }

    fn apply_clip(&mut self, clip: &AnimationClip) {
        let Some(animation) = self.renderable.as_mut().and_then(|r| r.animation_mut()) else {
            log::warn!(
                "{} view of {} cannot animate, ignoring {}",
                self.pass,
                self.config.mesh,
                clip.name
            );
            return;
        };

        animation.set_time(0.0);
        animation.set_duration(clip.duration_ms);
        animation.set_direction(clip.direction);
        animation.set_frame_range(clip.start_frame, clip.end_frame);
    }

    /// Advances playback by `delta_ms`. Does nothing until loaded.
    pub fn update_animation(&mut self, delta_ms: f32) {
        if !self.is_loaded() {
            return;
        }

        if let Some(clip) = self.pending_animation.take() {
            self.apply_clip(&clip);
        }

        if let Some(animation) = self.renderable.as_mut().and_then(|r| r.animation_mut()) {
            animation.advance(delta_ms);
            self.dirty = true;
        }
    }

    /// Normalized playback time of the renderable, or 0 before loading.
    #[must_use]
    pub fn last_time(&self) -> f32 {
        if !self.is_loaded() {
            return 0.0;
        }
        self.renderable
            .as_ref()
            .and_then(|r| r.animation())
            .map_or(0.0, |a| a.time())
    }

    /// Cycles completed since the current clip was applied, or 0 before loading.
    #[must_use]
    pub fn completed_cycles(&self) -> u32 {
        if !self.is_loaded() {
            return 0;
        }
        self.renderable
            .as_ref()
            .and_then(|r| r.animation())
            .map_or(0, |a| a.completed_cycles())
    }

    /// Holds the pose on the final frame of the current window.
    pub fn set_to_last_frame(&mut self) {
        if let Some(animation) = self.renderable.as_mut().and_then(|r| r.animation_mut()) {
            animation.set_time(1.0);
            animation.advance(0.0);
            self.dirty = true;
        }
    }
}
