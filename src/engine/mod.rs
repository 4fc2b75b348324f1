//! The reusable core shared by all four games.
//!
//! Everything here is pure and deterministic: rectangles and overlap
//! predicates, one-shot/repeating timers over a caller-supplied clock,
//! axis-separated and swept collision resolution, sprite-sheet animation
//! state and the entity lifecycle contract. No rendering or platform
//! dependencies.

pub mod animation;
pub mod collision;
pub mod entity;
pub mod rect;
pub mod timer;

pub use animation::{AnimationError, AnimationState, strip_frames};
pub use collision::{Axis, resolve_axis, resolve_swept_axis};
pub use entity::{Body, Entity, Liveness, compact};
pub use rect::{Rect, circle_rect_overlap, circles_overlap, rects_overlap};
pub use timer::Timer;
