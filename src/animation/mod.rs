pub mod action;
pub mod clip;

pub use action::{AnimationAction, FrameSample};
pub use clip::{AnimationClip, ClipRegistry, Direction, LoopMode};
