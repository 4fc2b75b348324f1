//! Pong entities and game state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::PongConfig;
use crate::engine::{Rect, Timer};
use crate::score::Score;

/// Which side of the table. The player defends the right goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

/// A paddle. `prev_dest` holds last frame's rect for the swept collision.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub dest: Rect,
    pub prev_dest: Rect,
    pub direction: Vec2,
    pub speed: f32,
}

impl Paddle {
    pub fn new(center: Vec2, size: Vec2, speed: f32) -> Self {
        let dest = Rect::from_center(center, size);
        Self {
            dest,
            prev_dest: dest,
            direction: Vec2::ZERO,
            speed,
        }
    }

    pub fn record_prev(&mut self) {
        self.prev_dest = self.dest;
    }

    /// Keep the paddle inside the window vertically.
    pub fn constrain(&mut self, window_height: f32) {
        if self.dest.y <= 0.0 {
            self.dest.y = 0.0;
        } else if self.dest.bottom() >= window_height {
            self.dest.y = window_height - self.dest.h;
        }
    }

    pub fn integrate(&mut self, dt: f32) {
        self.dest.x += self.direction.x * self.speed * dt;
        self.dest.y += self.direction.y * self.speed * dt;
    }
}

/// The ball. Movement is frozen while the serve timer runs.
#[derive(Debug, Clone)]
pub struct Ball {
    pub dest: Rect,
    pub prev_dest: Rect,
    pub direction: Vec2,
    pub speed: f32,
    pub serve_timer: Timer,
}

impl Ball {
    pub fn new(center: Vec2, size: f32, direction: Vec2, speed: f32, serve_delay: f64) -> Self {
        let dest = Rect::from_center(center, Vec2::splat(size));
        Self {
            dest,
            prev_dest: dest,
            direction,
            speed,
            // Armed at t=0 so the kickoff has the same serve freeze as a point
            serve_timer: Timer::started(serve_delay, 0.0),
        }
    }

    pub fn record_prev(&mut self) {
        self.prev_dest = self.dest;
    }

    pub fn radius(&self) -> f32 {
        self.dest.w / 2.0
    }
}

/// Outward events for frontends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PaddleBounce,
    WallBounce,
    PointScored(Side),
}

/// Complete pong state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: PongConfig,
    /// Accumulated simulation clock (seconds).
    pub time: f64,
    /// Running score, loaded at startup and flushed at shutdown by the
    /// frontend.
    pub score: Score,
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
    /// Events emitted by the most recent tick.
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
}

impl GameState {
    pub fn new(config: PongConfig, score: Score, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let center = Vec2::new(config.window_width / 2.0, config.window_height / 2.0);
        let direction = serve_direction(&mut rng);
        let ball = Ball::new(center, config.ball_size, direction, config.ball_speed, config.serve_delay);
        let player = Paddle::new(config.player_pos, config.paddle_size, config.player_speed);
        let opponent = Paddle::new(config.opponent_pos, config.paddle_size, config.opponent_speed);
        Self {
            config,
            time: 0.0,
            score,
            ball,
            player,
            opponent,
            events: Vec::new(),
            rng,
        }
    }

    /// Recenter the ball with a fresh random serve and start the freeze.
    pub(crate) fn reset_ball(&mut self, now: f64) {
        let config = &self.config;
        self.ball.dest.x = config.window_width / 2.0 - self.ball.dest.w / 2.0;
        self.ball.dest.y = config.window_height / 2.0 - self.ball.dest.h / 2.0;
        self.ball.direction = serve_direction(&mut self.rng);
        self.ball.serve_timer.activate(now);
    }
}

/// Random kickoff direction: full speed toward one goal, a 0.7–0.8
/// vertical component either way. Deliberately not normalized.
fn serve_direction(rng: &mut Pcg32) -> Vec2 {
    let x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let y = rng.random_range(0.7..0.8) * if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    Vec2::new(x, y)
}
