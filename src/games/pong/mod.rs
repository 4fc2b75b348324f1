//! Pong: two paddles, a fast ball resolved with swept edge-crossing
//! collision, and a score persisted across runs.

pub mod state;
pub mod tick;

pub use state::{Ball, GameEvent, GameState, Paddle, Side};
pub use tick::{TickInput, tick};
