use std::sync::Arc;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Play through once and hold the last frame.
    Once,
    #[default]
    Loop,
}

impl LoopMode {
    #[inline]
    #[must_use]
    pub fn is_looping(self) -> bool {
        matches!(self, LoopMode::Loop)
    }
}

impl From<bool> for LoopMode {
    fn from(looping: bool) -> Self {
        if looping { LoopMode::Loop } else { LoopMode::Once }
    }
}

/// Frame traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl From<bool> for Direction {
    fn from(forward: bool) -> Self {
        if forward {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// A named frame window played over a fixed duration.
///
/// Frame values are not validated: inverted or out-of-range windows are
/// handed to the renderable as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub start_frame: i32,
    pub end_frame: i32,
    pub duration_ms: f32,
    pub loop_mode: LoopMode,
    pub direction: Direction,
}

impl AnimationClip {
    /// Creates a looping, forward clip lasting `seconds`.
    #[must_use]
    pub fn new(name: impl Into<String>, start_frame: i32, end_frame: i32, seconds: f32) -> Self {
        Self {
            name: name.into(),
            start_frame,
            end_frame,
            duration_ms: seconds * 1000.0,
            loop_mode: LoopMode::Loop,
            direction: Direction::Forward,
        }
    }

    #[must_use]
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.loop_mode.is_looping()
    }

    #[inline]
    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.direction == Direction::Forward
    }
}

/// Clips keyed by name. Registering an existing name replaces the clip.
#[derive(Debug, Default, Clone)]
pub struct ClipRegistry {
    clips: FxHashMap<String, Arc<AnimationClip>>,
}

impl ClipRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replaced clip, if any.
    pub fn insert(&mut self, clip: AnimationClip) -> Option<Arc<AnimationClip>> {
        self.clips.insert(clip.name.clone(), Arc::new(clip))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<AnimationClip>> {
        self.clips.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clips.keys().map(String::as_str)
    }
}
