//! Mesh Entity
//!
//! The public control surface of a mesh placement: clip registry, playback
//! state, and the per-frame driver of its views.
//!
//! # Playback
//!
//! [`MeshEntity::play`] issues a clip to every view and emits `play` on the
//! idle-to-playing transition. [`MeshEntity::stop`] always emits `stop`.
//! Looping clips run until stopped. Non-looping clips end on the first
//! update after which the primary view reports a completed cycle: the views
//! are snapped to their last frame and the entity stops within the same
//! update. Applying a clip resets the view's cycle count.

use std::sync::Arc;

use smallvec::SmallVec;
use uuid::Uuid;

use crate::animation::{AnimationClip, ClipRegistry, Direction, LoopMode};
use crate::config::{MeshConfig, MeshOptions};
use crate::errors::{MeshError, Result};
use crate::events::{EventSink, MeshEvent, MeshEventKind};
use crate::scene::host::ViewContext;
use crate::scene::view::{MeshView, ViewPass};

pub struct MeshEntity {
    id: Uuid,
    config: Arc<MeshConfig>,
    clips: ClipRegistry,
    /// Primary first, then optional secondary passes.
    views: SmallVec<[MeshView; 2]>,
    events: Box<dyn EventSink>,

    playing: bool,
    looping: bool,
}

impl MeshEntity {
    /// Validates `options` and creates an idle entity with no views.
    pub fn new(options: MeshOptions, events: Box<dyn EventSink>) -> Result<Self> {
        let config = options.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            config: Arc::new(config),
            clips: ClipRegistry::new(),
            views: SmallVec::new(),
            events,
            playing: false,
            looping: false,
        })
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// `false` stops playback. `true` is rejected: use [`MeshEntity::play`].
    pub fn set_playing(&mut self, playing: bool) -> Result<()> {
        if playing {
            log::error!("Cannot set playing to true. Call play()");
            return Err(MeshError::SetPlayingDirectly);
        }
        self.stop();
        Ok(())
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Creates the view for `pass` and starts loading it.
    ///
    /// The primary view must exist before any other pass; each pass can be
    /// attached once.
    pub fn attach_view(&mut self, pass: ViewPass, context: ViewContext) -> Result<&mut MeshView> {
        if self.view(pass).is_some() {
            return Err(MeshError::ViewAlreadyAttached(pass));
        }
        if pass != ViewPass::Primary && self.views.is_empty() {
            return Err(MeshError::PrimaryViewRequired(pass));
        }

        let mut view = MeshView::new(pass, Arc::clone(&self.config), context);
        view.load();
        self.views.push(view);
        self.views
            .last_mut()
            .ok_or(MeshError::ViewAlreadyAttached(pass))
    }

    #[must_use]
    pub fn views(&self) -> &[MeshView] {
        &self.views
    }

    #[must_use]
    pub fn view(&self, pass: ViewPass) -> Option<&MeshView> {
        self.views.iter().find(|v| v.pass() == pass)
    }

    pub fn view_mut(&mut self, pass: ViewPass) -> Option<&mut MeshView> {
        self.views.iter_mut().find(|v| v.pass() == pass)
    }

    /// Delivers finished loads to their views.
    pub fn poll_loads(&mut self) {
        for view in &mut self.views {
            view.poll_load();
        }
    }

    // ========================================================================
    // Clips
    // ========================================================================

    /// Defines a looping, forward animation.
    pub fn define_animation(
        &mut self,
        name: &str,
        start_frame: i32,
        end_frame: i32,
        seconds: f32,
    ) -> &mut Self {
        self.define_animation_with(
            name,
            start_frame,
            end_frame,
            seconds,
            LoopMode::Loop,
            Direction::Forward,
        )
    }

    /// Defines an animation, replacing any clip with the same name.
    pub fn define_animation_with(
        &mut self,
        name: &str,
        start_frame: i32,
        end_frame: i32,
        seconds: f32,
        loop_mode: LoopMode,
        direction: Direction,
    ) -> &mut Self {
        let clip = AnimationClip::new(name, start_frame, end_frame, seconds)
            .with_loop_mode(loop_mode)
            .with_direction(direction);

        if self.clips.insert(clip).is_some() {
            log::debug!("Redefined animation {name}");
        }
        self
    }

    #[must_use]
    pub fn clip(&self, name: &str) -> Option<&Arc<AnimationClip>> {
        self.clips.get(name)
    }

    #[must_use]
    pub fn clips(&self) -> &ClipRegistry {
        &self.clips
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Plays or restarts the named animation on every view.
    ///
    /// Fails without touching any state if `name` was never defined.
    pub fn play(&mut self, name: &str) -> Result<&mut Self> {
        let clip = self
            .clips
            .get(name)
            .cloned()
            .ok_or_else(|| MeshError::UnknownAnimation(name.to_string()))?;

        for view in &mut self.views {
            view.play_animation(&clip);
        }

        if !self.playing {
            self.dispatch(MeshEventKind::Play);
        }

        self.playing = true;
        self.looping = clip.is_looping();

        Ok(self)
    }

    /// Stops playback. Always emits `stop`.
    pub fn stop(&mut self) -> &mut Self {
        self.dispatch(MeshEventKind::Stop);
        self.playing = false;
        self
    }

    /// Per-frame update with the elapsed time in seconds.
    ///
    /// Finished loads are delivered first, whether or not anything is playing.
    pub fn update(&mut self, delta_seconds: f32) {
        self.poll_loads();

        if !self.playing {
            return;
        }

        let delta_ms = delta_seconds * 1000.0;
        for view in &mut self.views {
            view.update_animation(delta_ms);
        }

        if self.looping {
            return;
        }

        let finished = self
            .views
            .first()
            .is_some_and(|primary| primary.completed_cycles() > 0);
        if finished {
            for view in &mut self.views {
                view.set_to_last_frame();
            }
            self.stop();
        }
    }

    fn dispatch(&mut self, kind: MeshEventKind) {
        let event = MeshEvent::new(kind, self.id);
        log::debug!("Dispatching {event}");
        self.events.dispatch(event);
    }
}
