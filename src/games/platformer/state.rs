//! Platformer entities and game state.

use std::collections::HashMap;

use glam::Vec2;
use rand_pcg::Pcg32;

use crate::config::PlatformerConfig;
use crate::engine::{
    AnimationError, AnimationState, Body, Entity, Liveness, Rect, Timer, strip_frames,
};
use crate::games::GamePhase;

/// A static level tile: world rect plus the texture region to draw.
#[derive(Debug, Clone)]
pub struct Tile {
    pub dest: Rect,
    pub source: Rect,
}

/// Level geometry, loaded by the frontend from whatever map format it uses.
/// Solids are immutable for the lifetime of the level.
#[derive(Debug, Clone)]
pub struct Level {
    pub width: f32,
    pub height: f32,
    pub player_spawn: Vec2,
    /// Solid collision tiles.
    pub solids: Vec<Tile>,
    /// Patrol areas, one worm each.
    pub worm_zones: Vec<Rect>,
}

impl Level {
    /// The solid rects the collision passes run against.
    pub fn solid_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.solids.iter().map(|tile| tile.dest)
    }
}

/// Frame tables and sprite sizes, normally cut from the real sheets by the
/// frontend. Defaults are placeholder regions sized like the shipped art,
/// good enough for headless runs and tests.
#[derive(Debug, Clone)]
pub struct PlatformerAssets {
    /// Named player states: `run` and `jump`.
    pub player_frames: HashMap<String, Vec<Rect>>,
    pub bee_frames: Vec<Rect>,
    pub worm_frames: Vec<Rect>,
    pub bullet_source: Rect,
    pub fire_source: Rect,
}

impl Default for PlatformerAssets {
    fn default() -> Self {
        let mut player_frames = HashMap::new();
        player_frames.insert("run".to_string(), strip_frames(6, 64.0, 64.0));
        let jump: Vec<Rect> = strip_frames(2, 64.0, 64.0)
            .into_iter()
            .map(|mut frame| {
                frame.y = 64.0;
                frame
            })
            .collect();
        player_frames.insert("jump".to_string(), jump);
        Self {
            player_frames,
            bee_frames: strip_frames(4, 40.0, 40.0),
            worm_frames: strip_frames(4, 40.0, 40.0),
            bullet_source: Rect::new(0.0, 0.0, 20.0, 20.0),
            fire_source: Rect::new(0.0, 0.0, 46.0, 24.0),
        }
    }
}

/// The player: animated sprite with a shrunken hitbox, gravity and a gated
/// gun.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub anim: AnimationState,
    /// Collision rect, smaller than the visual rect.
    pub hitbox: Rect,
    hitbox_shrink: Vec2,
    hitbox_visual_offset: Vec2,
    pub on_floor: bool,
    pub shoot_timer: Timer,
    pub facing_right: bool,
}

impl Player {
    pub fn new(
        config: &PlatformerConfig,
        frames: HashMap<String, Vec<Rect>>,
        pos: Vec2,
    ) -> Result<Self, AnimationError> {
        let anim = AnimationState::named(frames, "run", 10.0)?.freeze_when_idle();
        let source = anim.current_frame();
        let body = Body::at(pos, source, config.player_speed);

        let hitbox_shrink = Vec2::new(20.0, 10.0);
        let hitbox_visual_offset = Vec2::new(0.0, -5.0);
        let hitbox = Rect::new(
            pos.x + hitbox_shrink.x / 2.0 + hitbox_visual_offset.x,
            pos.y + hitbox_shrink.y / 2.0 + hitbox_visual_offset.y,
            source.w - hitbox_shrink.x,
            source.h - hitbox_shrink.y,
        );

        Ok(Self {
            body,
            anim,
            hitbox,
            hitbox_shrink,
            hitbox_visual_offset,
            on_floor: false,
            shoot_timer: Timer::new(config.shoot_cooldown),
            facing_right: true,
        })
    }

    pub fn center(&self) -> Vec2 {
        self.hitbox.center()
    }

    /// Keep the visual rect glued to the hitbox.
    pub fn sync_dest(&mut self) {
        self.body.dest.x = self.hitbox.x - self.hitbox_shrink.x / 2.0 + self.hitbox_visual_offset.x;
        self.body.dest.y = self.hitbox.y - self.hitbox_shrink.y / 2.0 + self.hitbox_visual_offset.y;
    }

    /// Thin strip under the hitbox used for floor detection.
    pub fn floor_rect(&self) -> Rect {
        Rect::new(self.hitbox.x, self.hitbox.bottom(), self.hitbox.w, 2.0)
    }

    /// Source rect mirrored for the current facing; frame data stays
    /// untouched.
    pub fn draw_source(&self) -> Rect {
        let source = self.anim.current_frame();
        if self.facing_right { source } else { source.flipped_x() }
    }
}

/// Behavior that differs between enemy variants.
#[derive(Debug, Clone)]
pub enum EnemyKind {
    /// Flies in from the right with a sine vertical drift; gone past x=0.
    Bee { amplitude: f32, frequency: f32 },
    /// Patrols a zone, turning around at its edges.
    Worm { zone: Rect },
}

/// An enemy with a time-boxed death flash.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Body,
    pub anim: AnimationState,
    pub death_timer: Timer,
    pub kind: EnemyKind,
    pub facing_right: bool,
}

impl Enemy {
    pub fn bee(
        anim: AnimationState,
        pos: Vec2,
        speed: f32,
        amplitude: f32,
        frequency: f32,
        death_flash: f64,
    ) -> Self {
        let source = anim.current_frame();
        Self {
            body: Body::at(pos, source, speed),
            anim,
            death_timer: Timer::new(death_flash),
            kind: EnemyKind::Bee { amplitude, frequency },
            facing_right: false,
        }
    }

    pub fn worm(anim: AnimationState, zone: Rect, speed: f32, death_flash: f64) -> Self {
        let source = anim.current_frame();
        // Stand on the zone floor
        let pos = Vec2::new(zone.x, zone.bottom() - source.h);
        let mut body = Body::at(pos, source, speed);
        body.direction.x = 1.0;
        Self {
            body,
            anim,
            death_timer: Timer::new(death_flash),
            kind: EnemyKind::Worm { zone },
            facing_right: true,
        }
    }

    /// Destroy signal: enter the dying flash, freeze motion and animation.
    /// The death timer moves the enemy on to Discarded.
    pub fn destroy(&mut self, now: f64) {
        if self.body.liveness != Liveness::Active {
            return;
        }
        self.body.start_dying();
        self.death_timer.activate(now);
        self.anim.set_speed(0.0);
    }

    /// Hit-flash uniform for the renderer.
    pub fn flash_strength(&self) -> f32 {
        if self.body.is_dying() { 1.0 } else { 0.0 }
    }
}

impl Entity for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn check_discard(&mut self) {
        if matches!(self.kind, EnemyKind::Bee { .. }) && self.body.dest.x <= 0.0 {
            self.body.discard();
        }
    }
}

/// A fired bullet. Discarded when it leaves the horizontal play band.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
    bounds_x: (f32, f32),
}

impl Bullet {
    pub fn new(source: Rect, pos: Vec2, direction: Vec2, speed: f32, bounds_x: (f32, f32)) -> Self {
        let source = if direction.x < 0.0 { source.flipped_x() } else { source };
        let mut body = Body::at(pos, source, speed);
        body.direction = direction;
        Self { body, bounds_x }
    }
}

impl Entity for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn check_discard(&mut self) {
        let x = self.body.dest.x;
        if x < self.bounds_x.0 || x > self.bounds_x.1 {
            self.body.discard();
        }
    }
}

/// Muzzle flash glued to the player. Dies on its timer or when the player
/// turns around.
#[derive(Debug, Clone)]
pub struct Fire {
    pub body: Body,
    pub timer: Timer,
    pub facing_right: bool,
    y_offset: f32,
}

impl Fire {
    pub fn new(source: Rect, player: &Player, lifetime: f64, now: f64) -> Self {
        let mut fire = Self {
            body: Body::at(Vec2::ZERO, source, 0.0),
            timer: Timer::started(lifetime, now),
            facing_right: player.facing_right,
            y_offset: 5.0,
        };
        if !player.facing_right {
            fire.body.source = fire.body.source.flipped_x();
        }
        fire.follow(player);
        fire
    }

    /// Stick to the player's muzzle side.
    pub fn follow(&mut self, player: &Player) {
        let dest = &mut self.body.dest;
        if player.facing_right {
            dest.x = player.body.dest.right();
        } else {
            dest.x = player.body.dest.x - dest.w;
        }
        dest.y = player.center().y - dest.h / 2.0 + self.y_offset;
    }
}

impl Entity for Fire {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// Outward events for frontends (sound hooks, screen shake and the like).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Shot,
    EnemyHit,
    PlayerDied,
}

/// Complete platformer state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: PlatformerConfig,
    pub level: Level,
    pub assets: PlatformerAssets,
    /// Accumulated simulation clock (seconds).
    pub time: f64,
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub fires: Vec<Fire>,
    pub enemies: Vec<Enemy>,
    pub bee_timer: Timer,
    /// Events emitted by the most recent tick.
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
    // Animation templates validated once, cloned per spawn
    bee_anim: AnimationState,
}

impl GameState {
    pub fn new(
        config: PlatformerConfig,
        level: Level,
        assets: PlatformerAssets,
        seed: u64,
    ) -> Result<Self, AnimationError> {
        use rand::{Rng, SeedableRng};

        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::new(&config, assets.player_frames.clone(), level.player_spawn)?;
        let bee_anim = AnimationState::strip(assets.bee_frames.clone(), 10.0)?;
        let worm_anim = AnimationState::strip(assets.worm_frames.clone(), 10.0)?;

        let enemies = level
            .worm_zones
            .iter()
            .map(|&zone| {
                let speed = rng.random_range(config.worm_speed_range.0..=config.worm_speed_range.1);
                Enemy::worm(worm_anim.clone(), zone, speed, config.death_flash)
            })
            .collect();

        let bee_timer = Timer::started_repeating(config.bee_spawn_interval, 0.0);
        Ok(Self {
            config,
            level,
            assets,
            time: 0.0,
            phase: GamePhase::Playing,
            player,
            bullets: Vec::new(),
            fires: Vec::new(),
            enemies,
            bee_timer,
            events: Vec::new(),
            rng,
            bee_anim,
        })
    }

    /// Spawn a bee off the right side of the level at a random height, with
    /// randomized speed, drift amplitude and frequency.
    pub(crate) fn spawn_bee(&mut self) {
        use rand::Rng;

        let config = &self.config;
        let pos = Vec2::new(
            self.level.width + config.window_width,
            self.rng.random_range(0.0..=self.level.height),
        );
        let speed = self
            .rng
            .random_range(config.bee_speed_range.0..=config.bee_speed_range.1);
        let amplitude = self
            .rng
            .random_range(config.bee_amplitude_range.0..=config.bee_amplitude_range.1);
        let frequency = self
            .rng
            .random_range(config.bee_frequency_range.0..=config.bee_frequency_range.1);
        self.enemies.push(Enemy::bee(
            self.bee_anim.clone(),
            pos,
            speed,
            amplitude,
            frequency,
            config.death_flash,
        ));
    }
}
