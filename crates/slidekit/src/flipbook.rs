//! Fixed-rate frame player for decorative sprite animation.
//!
//! The player only tracks which frame is current; drawing it is up to the
//! host. It has no link to the transition controller.

use crate::sequence::TimedSequence;

/// Cycles through `frames` at `frames_per_second`.
#[derive(Debug, Clone)]
pub struct FramePlayer<F> {
    frames: Vec<F>,
    frames_per_second: f32,
    looping: bool,
    index: usize,
    timer: f32,
    playing: bool,
}

impl<F> FramePlayer<F> {
    /// Create a stopped, looping player positioned on the first frame.
    #[must_use]
    pub fn new(frames: Vec<F>, frames_per_second: f32) -> Self {
        Self {
            frames,
            frames_per_second,
            looping: true,
            index: 0,
            timer: 0.0,
            playing: false,
        }
    }

    /// Set whether playback wraps around after the last frame
    #[must_use]
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Start playing right away
    #[must_use]
    pub fn autoplay(mut self) -> Self {
        self.play();
        self
    }

    /// Restart from the first frame. No-op without frames.
    pub fn play(&mut self) {
        if self.frames.is_empty() {
            return;
        }
        self.playing = true;
        self.index = 0;
        self.timer = 0.0;
    }

    /// Freeze on the current frame
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Continue from the current frame
    pub fn resume(&mut self) {
        if self.frames.is_empty() {
            return;
        }
        self.playing = true;
    }

    /// Stop and rewind to the first frame
    pub fn stop(&mut self) {
        self.playing = false;
        self.index = 0;
        self.timer = 0.0;
    }

    /// Whether the player is running
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Index of the current frame
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The current frame, if there are any frames
    #[must_use]
    pub fn current_frame(&self) -> Option<&F> {
        self.frames.get(self.index)
    }

    /// Number of frames
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Advance playback by `dt` seconds. Returns true if the frame changed.
    ///
    /// A non-positive rate freezes playback. Negative and non-finite deltas
    /// count as zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing || self.frames.is_empty() || self.frames_per_second <= 0.0 {
            return false;
        }
        let frame_duration = 1.0 / self.frames_per_second;
        if !frame_duration.is_normal() {
            return false;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.timer += dt;
        if self.timer < frame_duration {
            return false;
        }

        let steps = (self.timer / frame_duration).floor();
        self.timer = (self.timer - steps * frame_duration).max(0.0);
        let steps = steps as usize;
        let start = self.index;
        let len = self.frames.len();

        if self.looping {
            self.index = (self.index + steps % len) % len;
        } else if self.index.saturating_add(steps) >= len {
            self.index = len - 1;
            self.playing = false;
        } else {
            self.index += steps;
        }
        self.index != start
    }
}

impl<F> TimedSequence for FramePlayer<F> {
    fn play(&mut self) {
        Self::play(self);
    }

    fn stop(&mut self) {
        Self::stop(self);
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn advance(&mut self, dt: f32) {
        self.tick(dt);
    }
}
