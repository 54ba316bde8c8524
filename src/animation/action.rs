use crate::animation::clip::{AnimationClip, Direction};

/// The keyframe a playback time resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    pub keyframe: i32,
    /// Progress through `keyframe`, in [0, 1].
    pub mix: f32,
}

/// Playback state of a frame window on a single renderable.
///
/// `time` is normalized cycle progress in [0, 1], independent of direction.
/// `cycles` counts the cycles completed since the last time reset:
/// - `time == 1.0` is a stable last-frame pose; only values above 1 wrap.
/// - An advance spanning more than a whole cycle restarts at 0 if the
///   fractional remainder would not be below the previous sample.
/// - Every wrap adds the number of whole cycles it crossed, so a cycle
///   finished within one advance is counted even when `time` reads 0.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationAction {
    pub time: f32,
    pub duration_ms: f32,
    pub direction: Direction,
    pub start_frame: i32,
    pub end_frame: i32,
    pub cycles: u32,
}

impl Default for AnimationAction {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationAction {
    #[must_use]
    pub fn new() -> Self {
        Self {
            time: 0.0,
            duration_ms: 0.0,
            direction: Direction::Forward,
            start_frame: 0,
            end_frame: 0,
            cycles: 0,
        }
    }

    /// Resets the action to the start of `clip`.
    pub fn apply_clip(&mut self, clip: &AnimationClip) {
        self.time = 0.0;
        self.duration_ms = clip.duration_ms;
        self.direction = clip.direction;
        self.start_frame = clip.start_frame;
        self.end_frame = clip.end_frame;
        self.cycles = 0;
    }

    /// Moves to `time` and restarts the cycle count.
    pub fn seek(&mut self, time: f32) {
        self.time = time;
        self.cycles = 0;
    }

    /// Core logic: advance time.
    pub fn update(&mut self, delta_ms: f32) {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 || !delta_ms.is_finite() {
            return;
        }

        let previous = self.time;
        let next = previous + delta_ms / self.duration_ms;

        self.time = if next > 1.0 {
            self.cycles = self.cycles.saturating_add(next.trunc() as u32);
            let wrapped = next.fract();
            if wrapped < previous { wrapped } else { 0.0 }
        } else if next < 0.0 {
            next.rem_euclid(1.0)
        } else {
            next
        };
    }

    /// Resolves the current time to a keyframe inside the frame window.
    ///
    /// Inverted windows collapse to the start frame.
    #[must_use]
    pub fn sample(&self) -> FrameSample {
        let length = i64::from(self.end_frame) - i64::from(self.start_frame) + 1;
        if length <= 0 {
            return FrameSample {
                keyframe: self.start_frame,
                mix: 1.0,
            };
        }

        let position = self.time.clamp(0.0, 1.0) * length as f32;
        let index = (position.floor() as i64).clamp(0, length - 1);
        let mix = if position >= length as f32 {
            1.0
        } else {
            position.fract()
        };

        let keyframe = match self.direction {
            Direction::Forward => i64::from(self.start_frame) + index,
            Direction::Backward => i64::from(self.end_frame) - index,
        };

        FrameSample {
            keyframe: keyframe as i32,
            mix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(start: i32, end: i32, duration_ms: f32) -> AnimationAction {
        AnimationAction {
            duration_ms,
            start_frame: start,
            end_frame: end,
            ..AnimationAction::new()
        }
    }

    #[test]
    fn update_accumulates_normalized_time() {
        let mut a = action(0, 9, 1000.0);
        a.update(250.0);
        assert!((a.time - 0.25).abs() < 1e-6);
    }

    #[test]
    fn exact_end_does_not_wrap() {
        let mut a = action(0, 9, 1000.0);
        a.update(1000.0);
        assert!((a.time - 1.0).abs() < f32::EPSILON);
        a.update(0.0);
        assert!((a.time - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn wrap_is_strictly_below_previous_sample() {
        let mut a = action(0, 9, 1000.0);
        a.update(400.0);
        // 0.4 + 1.7 cycles lands at 0.1 after wrapping
        a.update(1700.0);
        assert!(a.time < 0.4);

        let mut b = action(0, 9, 1000.0);
        b.update(200.0);
        // Remainder 0.7 would not read as a wrap
        b.update(1500.0);
        assert!(b.time.abs() < f32::EPSILON);
    }

    #[test]
    fn cycles_count_wraps_within_one_advance() {
        let mut a = action(0, 3, 10.0);
        a.update(16.0);
        assert!(a.time.abs() < f32::EPSILON);
        assert_eq!(a.cycles, 1);

        a.update(25.0);
        assert_eq!(a.cycles, 3);

        a.seek(0.0);
        assert_eq!(a.cycles, 0);
    }

    #[test]
    fn exact_end_is_not_a_completed_cycle() {
        let mut a = action(0, 9, 1000.0);
        a.update(1000.0);
        assert_eq!(a.cycles, 0);
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let mut a = action(0, 9, 1000.0);
        a.update(250.0);
        a.update(f32::NAN);
        a.update(f32::INFINITY);
        assert!((a.time - 0.25).abs() < 1e-6);
        assert_eq!(a.cycles, 0);
    }

    #[test]
    fn invalid_duration_freezes_time() {
        let mut a = action(0, 9, 0.0);
        a.update(16.0);
        assert!(a.time.abs() < f32::EPSILON);

        a.duration_ms = f32::NAN;
        a.update(16.0);
        assert!(a.time.abs() < f32::EPSILON);
    }

    #[test]
    fn sample_forward_and_backward() {
        let mut a = action(10, 19, 1000.0);
        a.time = 0.25;
        assert_eq!(a.sample().keyframe, 12);

        a.direction = Direction::Backward;
        assert_eq!(a.sample().keyframe, 17);

        a.time = 1.0;
        let last = a.sample();
        assert_eq!(last.keyframe, 10);
        assert!((last.mix - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn inverted_window_collapses_to_start() {
        let mut a = action(30, 0, 1000.0);
        a.time = 0.5;
        assert_eq!(a.sample().keyframe, 30);
    }
}
