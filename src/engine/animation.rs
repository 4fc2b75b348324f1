//! Sprite-sheet animation state.
//!
//! A frame table maps a logical state (idle/run/jump/direction) to an
//! ordered sequence of source rectangles. The cursor is a float accumulator
//! advanced by `speed * dt`; only its truncated integer part, taken modulo
//! the active sequence length, ever indexes the table. Frame tables are
//! resolved to a tagged source once at construction — no runtime type
//! inspection, and empty sequences are rejected up front instead of becoming
//! a modulo-by-zero during the tick loop.

use std::collections::HashMap;

use thiserror::Error;

use super::rect::Rect;

/// Construction-time animation configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimationError {
    #[error("animation state `{0}` has no frames")]
    EmptyState(String),
    #[error("animation strip has no frames")]
    EmptyStrip,
    #[error("unknown initial animation state `{0}`")]
    UnknownState(String),
}

/// Frame source, resolved once at construction.
#[derive(Debug, Clone)]
enum AnimationSource {
    /// Mapping from state name to frame sequence.
    NamedStates(HashMap<String, Vec<Rect>>),
    /// A single unnamed sequence.
    SingleStrip(Vec<Rect>),
}

/// Animation cursor over a frame table.
#[derive(Debug, Clone)]
pub struct AnimationState {
    source: AnimationSource,
    state: String,
    cursor: f32,
    speed: f32,
    freeze_when_idle: bool,
}

impl AnimationState {
    /// Build from named state sequences. Every sequence must be non-empty
    /// and `initial` must name one of them.
    pub fn named(
        frames: HashMap<String, Vec<Rect>>,
        initial: &str,
        speed: f32,
    ) -> Result<Self, AnimationError> {
        for (name, seq) in &frames {
            if seq.is_empty() {
                return Err(AnimationError::EmptyState(name.clone()));
            }
        }
        if !frames.contains_key(initial) {
            return Err(AnimationError::UnknownState(initial.to_string()));
        }
        Ok(Self {
            source: AnimationSource::NamedStates(frames),
            state: initial.to_string(),
            cursor: 0.0,
            speed,
            freeze_when_idle: false,
        })
    }

    /// Build from a single non-empty frame strip.
    pub fn strip(frames: Vec<Rect>, speed: f32) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::EmptyStrip);
        }
        Ok(Self {
            source: AnimationSource::SingleStrip(frames),
            state: String::new(),
            cursor: 0.0,
            speed,
            freeze_when_idle: false,
        })
    }

    /// Reset the cursor to frame zero whenever the entity is not moving,
    /// instead of keeping a baseline idle loop.
    pub fn freeze_when_idle(mut self) -> Self {
        self.freeze_when_idle = true;
        self
    }

    /// Switch the active sequence. The cursor is preserved for visual
    /// continuity; names outside the table leave the state unchanged.
    pub fn set_state(&mut self, name: &str) {
        if self.state == name {
            return;
        }
        if let AnimationSource::NamedStates(table) = &self.source
            && table.contains_key(name)
        {
            self.state = name.to_string();
        }
    }

    /// Advance the cursor by `speed * dt`. Entities configured with
    /// [`AnimationState::freeze_when_idle`] hold frame zero while `moving`
    /// is false.
    pub fn advance(&mut self, dt: f32, moving: bool) {
        if self.freeze_when_idle && !moving {
            self.cursor = 0.0;
            return;
        }
        self.cursor += self.speed * dt;
    }

    /// Current source rectangle: `frames[floor(cursor) mod len]`.
    pub fn current_frame(&self) -> Rect {
        let frames = self.active_frames();
        frames[self.cursor as usize % frames.len()]
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Length of the active sequence (always non-zero).
    pub fn frame_count(&self) -> usize {
        self.active_frames().len()
    }

    /// Playback speed in frames per second; zero freezes the cursor.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn active_frames(&self) -> &[Rect] {
        match &self.source {
            AnimationSource::NamedStates(table) => &table[self.state.as_str()],
            AnimationSource::SingleStrip(frames) => frames,
        }
    }
}

/// Frame table for a horizontal sprite strip of `count` frames of size
/// `frame_w` x `frame_h`.
pub fn strip_frames(count: usize, frame_w: f32, frame_h: f32) -> Vec<Rect> {
    (0..count)
        .map(|i| Rect::new(i as f32 * frame_w, 0.0, frame_w, frame_h))
        .collect()
}
