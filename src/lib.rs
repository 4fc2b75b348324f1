//! Retro Arcade - four small games on one simulation core
//!
//! Core modules:
//! - `engine`: Shared building blocks (rects, timers, axis and swept
//!   collision, animation cursors, entity lifecycle)
//! - `games`: One deterministic simulation per game (platformer, pong,
//!   survivor, shooter), each a `GameState` + `TickInput` + `tick`
//! - `config`: Per-game tuning structs
//! - `score`: Pong score persistence
//!
//! Rendering, windowing, input polling and audio stay in the frontends;
//! everything here is frame-stepped from a caller-supplied `dt` and a seed,
//! so the same inputs always replay the same game.

pub mod config;
pub mod engine;
pub mod games;
pub mod score;

pub use config::{PlatformerConfig, PongConfig, ShooterConfig, SurvivorConfig};
pub use score::Score;
