//! The four game simulations.
//!
//! Each game is a pure, deterministic sim: a `GameState`, a per-tick
//! `TickInput` snapshot of the input queries, and a `tick(state, input, dt)`
//! that advances one frame in a fixed order — timers, input, motion + axis
//! resolution, animation, pairwise interaction checks, compaction. Frontends
//! own windowing, textures and draw-call sequencing; entities expose
//! `source`/`dest` rects for one textured-rectangle draw each.

pub mod platformer;
pub mod pong;
pub mod shooter;
pub mod survivor;

/// Whether a run is still going. Games without a fail state stay Playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}
