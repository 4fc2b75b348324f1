//! Space shooter entities and game state.

use glam::Vec2;
use rand_pcg::Pcg32;

use crate::config::ShooterConfig;
use crate::engine::{AnimationError, AnimationState, Body, Entity, Rect, Timer, strip_frames};
use crate::games::GamePhase;

/// Sprite sizes and the explosion strip, normally cut from the real sheets
/// by the frontend. Defaults are placeholder regions sized like the shipped
/// art.
#[derive(Debug, Clone)]
pub struct ShooterAssets {
    pub player_source: Rect,
    pub laser_source: Rect,
    pub meteor_source: Rect,
    pub explosion_frames: Vec<Rect>,
}

impl Default for ShooterAssets {
    fn default() -> Self {
        Self {
            player_source: Rect::new(0.0, 0.0, 112.0, 99.0),
            laser_source: Rect::new(0.0, 0.0, 9.0, 54.0),
            meteor_source: Rect::new(0.0, 0.0, 101.0, 84.0),
            explosion_frames: strip_frames(7, 48.0, 46.0),
        }
    }
}

/// Vertical band around the window inside which lasers and meteors stay
/// alive. Circle radii come from the sprite height, matching the shipped
/// collision tuning.
fn outside_despawn_band(center_y: f32, window_height: f32, margin: f32) -> bool {
    !(-margin < center_y && center_y < window_height + margin)
}

/// The player ship, clamped to the window.
#[derive(Debug, Clone)]
pub struct PlayerShip {
    pub body: Body,
}

impl PlayerShip {
    pub fn new(source: Rect, center: Vec2, speed: f32) -> Self {
        let size = source.normalized();
        let dest = Rect::from_center(center, Vec2::new(size.w, size.h));
        Self {
            body: Body::new(dest, source, speed),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    /// Collision circle radius, half the sprite height.
    pub fn radius(&self) -> f32 {
        self.body.source.normalized().h / 2.0
    }

    /// Keep the whole sprite inside the window.
    pub fn constrain(&mut self, window_width: f32, window_height: f32) {
        let dest = &mut self.body.dest;
        dest.x = dest.x.clamp(0.0, window_width - dest.w);
        dest.y = dest.y.clamp(0.0, window_height - dest.h);
    }
}

/// An upward laser bolt.
#[derive(Debug, Clone)]
pub struct Laser {
    pub body: Body,
    window_height: f32,
    margin: f32,
}

impl Laser {
    pub fn new(source: Rect, center: Vec2, speed: f32, window_height: f32, margin: f32) -> Self {
        let size = source.normalized();
        let dest = Rect::from_center(center, Vec2::new(size.w, size.h));
        let mut body = Body::new(dest, source, speed);
        body.direction = Vec2::new(0.0, -1.0);
        Self {
            body,
            window_height,
            margin,
        }
    }
}

impl Entity for Laser {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn check_discard(&mut self) {
        if outside_despawn_band(self.body.center().y, self.window_height, self.margin) {
            self.body.discard();
        }
    }
}

/// A spinning meteor drifting down with a random sideways component.
#[derive(Debug, Clone)]
pub struct Meteor {
    pub body: Body,
    /// Renderer rotation, degrees.
    pub rotation: f32,
    pub spin: f32,
    window_height: f32,
    margin: f32,
}

impl Meteor {
    pub fn new(
        source: Rect,
        center: Vec2,
        speed: f32,
        direction: Vec2,
        spin: f32,
        window_height: f32,
        margin: f32,
    ) -> Self {
        let size = source.normalized();
        let dest = Rect::from_center(center, Vec2::new(size.w, size.h));
        let mut body = Body::new(dest, source, speed);
        body.direction = direction;
        Self {
            body,
            rotation: 0.0,
            spin,
            window_height,
            margin,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    /// Collision circle radius, half the sprite height.
    pub fn radius(&self) -> f32 {
        self.body.source.normalized().h / 2.0
    }
}

impl Entity for Meteor {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn check_discard(&mut self) {
        if outside_despawn_band(self.body.center().y, self.window_height, self.margin) {
            self.body.discard();
        }
    }
}

/// A one-shot explosion strip. Discarded once the cursor reaches the last
/// frame.
#[derive(Debug, Clone)]
pub struct Explosion {
    pub body: Body,
    pub anim: AnimationState,
}

impl Explosion {
    pub fn new(anim: AnimationState, center: Vec2) -> Self {
        let source = anim.current_frame();
        let size = source.normalized();
        let dest = Rect::from_center(center, Vec2::new(size.w, size.h));
        Self {
            body: Body::new(dest, source, 0.0),
            anim,
        }
    }

    pub fn finished(&self) -> bool {
        self.anim.cursor() as usize >= self.anim.frame_count() - 1
    }
}

impl Entity for Explosion {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// Outward events for frontends (sound hooks and the like).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Shot,
    MeteorDestroyed,
    PlayerDied,
}

/// Complete shooter state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: ShooterConfig,
    pub assets: ShooterAssets,
    /// Accumulated simulation clock (seconds).
    pub time: f64,
    pub phase: GamePhase,
    pub player: PlayerShip,
    pub lasers: Vec<Laser>,
    pub meteors: Vec<Meteor>,
    pub explosions: Vec<Explosion>,
    pub meteor_timer: Timer,
    /// Events emitted by the most recent tick.
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
    // Animation template validated once, cloned per explosion
    explosion_anim: AnimationState,
}

impl GameState {
    pub fn new(config: ShooterConfig, assets: ShooterAssets, seed: u64) -> Result<Self, AnimationError> {
        use rand::SeedableRng;

        let rng = Pcg32::seed_from_u64(seed);
        let player = PlayerShip::new(
            assets.player_source,
            Vec2::new(config.window_width / 2.0, config.window_height / 2.0),
            config.player_speed,
        );
        let explosion_anim =
            AnimationState::strip(assets.explosion_frames.clone(), config.explosion_fps)?;

        let meteor_timer = Timer::started_repeating(config.meteor_interval, 0.0);
        Ok(Self {
            config,
            assets,
            time: 0.0,
            phase: GamePhase::Playing,
            player,
            lasers: Vec::new(),
            meteors: Vec::new(),
            explosions: Vec::new(),
            meteor_timer,
            events: Vec::new(),
            rng,
            explosion_anim,
        })
    }

    /// Seconds survived, the score shown by the frontend.
    pub fn score(&self) -> u64 {
        self.time as u64
    }

    /// Spawn a meteor in the band above the window with randomized x,
    /// speed and sideways drift.
    pub(crate) fn spawn_meteor(&mut self) {
        use rand::Rng;

        let config = &self.config;
        let center = Vec2::new(
            self.rng.random_range(0.0..=config.window_width),
            self.rng.random_range(-150.0..=-50.0),
        );
        let speed = self
            .rng
            .random_range(config.meteor_speed_range.0..=config.meteor_speed_range.1);
        let direction = Vec2::new(self.rng.random_range(-0.5..=0.5), 1.0);
        self.meteors.push(Meteor::new(
            self.assets.meteor_source,
            center,
            speed,
            direction,
            config.meteor_spin,
            config.window_height,
            config.despawn_margin,
        ));
    }

    /// Spawn an explosion strip centered on `pos`.
    pub(crate) fn spawn_explosion(&mut self, pos: Vec2) {
        self.explosions
            .push(Explosion::new(self.explosion_anim.clone(), pos));
    }
}
