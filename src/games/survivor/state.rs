//! Survivor entities and game state.

use std::collections::HashMap;

use glam::Vec2;
use rand_pcg::Pcg32;

use crate::config::SurvivorConfig;
use crate::engine::{AnimationError, AnimationState, Body, Entity, Rect, Timer, strip_frames};

/// Arena geometry, loaded by the frontend from whatever map format it uses.
/// Solids are immutable for the lifetime of the arena.
#[derive(Debug, Clone)]
pub struct Arena {
    pub player_spawn: Vec2,
    /// Solid collision rects both the player and enemies resolve against.
    pub solids: Vec<Rect>,
    /// Enemy spawn points scattered around the map edge.
    pub spawn_points: Vec<Vec2>,
}

/// Frame tables and sprite sizes, normally cut from the real sheets by the
/// frontend. Defaults are placeholder regions sized like the shipped art.
#[derive(Debug, Clone)]
pub struct SurvivorAssets {
    /// Named player states: `up`, `down`, `left`, `right`.
    pub player_frames: HashMap<String, Vec<Rect>>,
    /// One 4-frame strip per enemy species.
    pub enemy_frames: Vec<Vec<Rect>>,
    pub gun_source: Rect,
    pub bullet_source: Rect,
}

impl Default for SurvivorAssets {
    fn default() -> Self {
        let mut player_frames = HashMap::new();
        for (row, name) in ["down", "left", "right", "up"].into_iter().enumerate() {
            let frames: Vec<Rect> = strip_frames(4, 128.0, 128.0)
                .into_iter()
                .map(|mut frame| {
                    frame.y = row as f32 * 128.0;
                    frame
                })
                .collect();
            player_frames.insert(name.to_string(), frames);
        }
        Self {
            player_frames,
            enemy_frames: vec![strip_frames(4, 64.0, 64.0); 3],
            gun_source: Rect::new(0.0, 0.0, 80.0, 30.0),
            bullet_source: Rect::new(0.0, 0.0, 20.0, 20.0),
        }
    }
}

/// The player: a four-way animated sprite with a shrunken hitbox.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub anim: AnimationState,
    /// Collision rect, smaller than the visual rect.
    pub hitbox: Rect,
    hitbox_shrink: Vec2,
}

impl Player {
    pub fn new(
        config: &SurvivorConfig,
        frames: HashMap<String, Vec<Rect>>,
        pos: Vec2,
    ) -> Result<Self, AnimationError> {
        let anim = AnimationState::named(frames, "down", 5.0)?.freeze_when_idle();
        let source = anim.current_frame();
        let body = Body::at(pos, source, config.player_speed);

        let hitbox_shrink = Vec2::new(60.0, 90.0);
        let hitbox = Rect::new(
            pos.x + hitbox_shrink.x / 2.0,
            pos.y + hitbox_shrink.y / 2.0,
            source.w - hitbox_shrink.x,
            source.h - hitbox_shrink.y,
        );

        Ok(Self {
            body,
            anim,
            hitbox,
            hitbox_shrink,
        })
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    /// Keep the visual rect glued to the hitbox.
    pub fn sync_dest(&mut self) {
        self.body.dest.x = self.hitbox.x - self.hitbox_shrink.x / 2.0;
        self.body.dest.y = self.hitbox.y - self.hitbox_shrink.y / 2.0;
    }
}

/// The gun orbits the player at a fixed distance, pointing at the mouse.
/// Aim is computed from the window center because the camera keeps the
/// player there.
#[derive(Debug, Clone)]
pub struct Gun {
    pub source: Rect,
    /// Unit aim vector, (1, 0) until the mouse first moves.
    pub aim: Vec2,
    /// Rotation handed to the renderer, degrees.
    pub rotation: f32,
    /// World position of the gun center.
    pub pos: Vec2,
    distance: f32,
}

impl Gun {
    pub fn new(source: Rect, player_center: Vec2, distance: f32) -> Self {
        let aim = Vec2::new(1.0, 0.0);
        Self {
            source,
            aim,
            rotation: 0.0,
            pos: player_center + aim * distance,
            distance,
        }
    }

    /// Re-aim at the mouse and follow the player. A mouse sitting exactly on
    /// the window center keeps the previous aim.
    pub fn update(&mut self, player_center: Vec2, mouse: Vec2, window_center: Vec2) {
        let aim = (mouse - window_center).normalize_or_zero();
        if aim != Vec2::ZERO {
            self.aim = aim;
        }
        let angle = self.aim.y.atan2(self.aim.x).to_degrees();
        // Mirrored sprite on the left side wants the supplementary angle
        self.rotation = if self.aim.x < 0.0 { angle - 180.0 } else { angle };
        self.pos = player_center + self.aim * self.distance;
    }

    /// Source rect mirrored when aiming left; frame data stays untouched.
    pub fn draw_source(&self) -> Rect {
        if self.aim.x < 0.0 {
            self.source.flipped_x()
        } else {
            self.source
        }
    }
}

/// A fired bullet. Expires on its lifetime timer.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
    pub lifetime: Timer,
}

impl Bullet {
    /// Bullet centered on `pos`, already moving.
    pub fn new(source: Rect, pos: Vec2, direction: Vec2, speed: f32, lifetime: Timer) -> Self {
        let size = source.normalized();
        let dest = Rect::from_center(pos, Vec2::new(size.w, size.h));
        let mut body = Body::new(dest, source, speed);
        body.direction = direction;
        Self { body, lifetime }
    }
}

impl Entity for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// A chasing enemy. No death animation: a bullet hit discards it outright.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Body,
    pub anim: AnimationState,
    /// Collision rect, smaller than the visual rect.
    pub hitbox: Rect,
    hitbox_shrink: Vec2,
    pub species: usize,
}

impl Enemy {
    pub fn new(anim: AnimationState, pos: Vec2, speed: f32, species: usize) -> Self {
        let source = anim.current_frame();
        let body = Body::at(pos, source, speed);
        let hitbox_shrink = Vec2::new(20.0, 40.0);
        let hitbox = Rect::new(
            pos.x + hitbox_shrink.x / 2.0,
            pos.y + hitbox_shrink.y / 2.0,
            source.w - hitbox_shrink.x,
            source.h - hitbox_shrink.y,
        );
        Self {
            body,
            anim,
            hitbox,
            hitbox_shrink,
            species,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    /// Keep the visual rect glued to the hitbox.
    pub fn sync_dest(&mut self) {
        self.body.dest.x = self.hitbox.x - self.hitbox_shrink.x / 2.0;
        self.body.dest.y = self.hitbox.y - self.hitbox_shrink.y / 2.0;
    }
}

impl Entity for Enemy {
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
    EnemyHit,
}

/// Complete survivor state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SurvivorConfig,
    pub arena: Arena,
    pub assets: SurvivorAssets,
    /// Accumulated simulation clock (seconds).
    pub time: f64,
    pub player: Player,
    pub gun: Gun,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub shoot_timer: Timer,
    pub spawn_timer: Timer,
    /// Events emitted by the most recent tick.
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
    // Animation templates validated once, cloned per spawn
    enemy_anims: Vec<AnimationState>,
}

impl GameState {
    pub fn new(
        config: SurvivorConfig,
        arena: Arena,
        assets: SurvivorAssets,
        seed: u64,
    ) -> Result<Self, AnimationError> {
        use rand::SeedableRng;

        let rng = Pcg32::seed_from_u64(seed);
        let player = Player::new(&config, assets.player_frames.clone(), arena.player_spawn)?;
        let gun = Gun::new(assets.gun_source, player.center(), config.gun_distance);
        let enemy_anims = assets
            .enemy_frames
            .iter()
            .map(|strip| AnimationState::strip(strip.clone(), 6.0))
            .collect::<Result<Vec<_>, _>>()?;

        let shoot_timer = Timer::new(config.gun_cooldown);
        let spawn_timer = Timer::started_repeating(config.spawn_interval, 0.0);
        Ok(Self {
            config,
            arena,
            assets,
            time: 0.0,
            player,
            gun,
            bullets: Vec::new(),
            enemies: Vec::new(),
            shoot_timer,
            spawn_timer,
            events: Vec::new(),
            rng,
            enemy_anims,
        })
    }

    /// Spawn a random species at a random spawn point.
    pub(crate) fn spawn_enemy(&mut self) {
        use rand::Rng;

        if self.arena.spawn_points.is_empty() || self.enemy_anims.is_empty() {
            return;
        }
        let pos = self.arena.spawn_points[self.rng.random_range(0..self.arena.spawn_points.len())];
        let species = self.rng.random_range(0..self.enemy_anims.len());
        self.enemies.push(Enemy::new(
            self.enemy_anims[species].clone(),
            pos,
            self.config.enemy_speed,
            species,
        ));
    }
}
