//! Side-scrolling platformer: tile collision, gravity, a shooting player,
//! patrolling worms and sine-drifting bees.

pub mod state;
pub mod tick;

pub use state::{
    Bullet, Enemy, EnemyKind, Fire, GameEvent, GameState, Level, PlatformerAssets, Player, Tile,
};
pub use tick::{TickInput, tick};
