//! Vertical space shooter: a clamped ship, upward lasers, spinning meteors
//! raining from a spawn band and one-shot explosion strips.

pub mod state;
pub mod tick;

pub use state::{Explosion, GameEvent, GameState, Laser, Meteor, PlayerShip, ShooterAssets};
pub use tick::{TickInput, tick};
