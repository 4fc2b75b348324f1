//! Top-down survival shooter: a gun orbiting the player, chasing enemies
//! spawned on a timer, and short-lived bullets.

pub mod state;
pub mod tick;

pub use state::{Arena, Bullet, Enemy, GameEvent, GameState, Gun, Player, SurvivorAssets};
pub use tick::{TickInput, tick};
