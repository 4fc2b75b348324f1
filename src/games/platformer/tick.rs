//! Platformer frame tick.

use glam::Vec2;

use super::state::{Bullet, Enemy, EnemyKind, Fire, GameEvent, GameState};
use crate::engine::{Axis, Entity, compact, resolve_axis};
use crate::games::GamePhase;

/// Input snapshot for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
}

/// Advance one frame: timers, input, motion + axis resolution, animation,
/// pairwise checks, compaction — in that order.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.time += dt as f64;
    let now = state.time;

    // Timers
    if state.bee_timer.tick(now) {
        state.spawn_bee();
    }
    state.player.shoot_timer.tick(now);
    for enemy in &mut state.enemies {
        if enemy.death_timer.tick(now) {
            enemy.body.discard();
        }
    }
    for fire in &mut state.fires {
        if fire.timer.tick(now) {
            fire.body.discard();
        }
    }

    // Input -> direction
    let wants_shot = {
        let player = &mut state.player;
        player.body.direction.x = input.right as i32 as f32 - input.left as i32 as f32;
        if input.jump && player.on_floor {
            player.body.direction.y = state.config.jump_impulse;
        }
        if player.body.direction.x > 0.0 {
            player.facing_right = true;
        } else if player.body.direction.x < 0.0 {
            player.facing_right = false;
        }
        input.shoot && !player.shoot_timer.is_active()
    };
    if wants_shot {
        state.player.shoot_timer.activate(now);
        shoot(state, now);
        state.events.push(GameEvent::Shot);
    }

    // Motion + axis resolution
    move_player(state, dt);
    for enemy in &mut state.enemies {
        move_enemy(enemy, dt, now);
    }
    for bullet in &mut state.bullets {
        bullet.advance(dt);
    }
    for fire in &mut state.fires {
        fire.follow(&state.player);
        if fire.facing_right != state.player.facing_right {
            fire.body.discard();
        }
    }

    // Animation
    {
        let player = &mut state.player;
        player
            .anim
            .set_state(if player.on_floor { "run" } else { "jump" });
        let moving = player.body.direction.x != 0.0 || player.body.direction.y != 0.0;
        player.anim.advance(dt, moving);
    }
    for enemy in &mut state.enemies {
        enemy.anim.advance(dt, true);
    }

    // Pairwise interaction checks
    for bullet in &mut state.bullets {
        for enemy in &mut state.enemies {
            if bullet.body.dest.overlaps(&enemy.body.dest) {
                bullet.body.discard();
                enemy.destroy(now);
                state.events.push(GameEvent::EnemyHit);
            }
        }
    }
    for enemy in &state.enemies {
        if enemy.body.dest.overlaps(&state.player.hitbox) {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::PlayerDied);
            break;
        }
    }

    // Compaction, always last
    compact(&mut state.bullets);
    compact(&mut state.fires);
    compact(&mut state.enemies);
}

/// Horizontal pass, then gravity and the vertical pass. The vertical
/// component is a per-frame displacement the gravity accumulates into, and
/// landing/head-bump zeroes it.
fn move_player(state: &mut GameState, dt: f32) {
    let player = &mut state.player;
    let level = &state.level;

    player.hitbox.x += player.body.direction.x * player.body.speed * dt;
    resolve_axis(
        &mut player.hitbox,
        &mut player.body.direction,
        level.solid_rects(),
        Axis::X,
        false,
    );

    player.body.direction.y += state.config.gravity * dt;
    player.hitbox.y += player.body.direction.y;
    resolve_axis(
        &mut player.hitbox,
        &mut player.body.direction,
        level.solid_rects(),
        Axis::Y,
        true,
    );

    player.sync_dest();

    let floor_rect = player.floor_rect();
    player.on_floor = level.solid_rects().any(|solid| floor_rect.overlaps(&solid));
}

fn move_enemy(enemy: &mut Enemy, dt: f32, now: f64) {
    if enemy.body.is_dying() {
        return;
    }
    match enemy.kind {
        EnemyKind::Bee { amplitude, frequency } => {
            enemy.body.dest.x -= enemy.body.speed * dt;
            enemy.body.dest.y += (now as f32 * frequency).sin() * amplitude * dt;
            enemy.check_discard();
        }
        EnemyKind::Worm { zone } => {
            enemy.body.integrate(dt);
            if enemy.body.dest.right() > zone.right() {
                enemy.body.direction.x = -1.0;
                enemy.facing_right = false;
            } else if enemy.body.dest.x < zone.x {
                enemy.body.direction.x = 1.0;
                enemy.facing_right = true;
            }
        }
    }
}

/// Spawn a bullet at the muzzle plus the trailing fire sprite.
fn shoot(state: &mut GameState, now: f64) {
    let direction = Vec2::new(if state.player.facing_right { 1.0 } else { -1.0 }, 0.0);
    let center = state.player.center();
    let bullet_source = state.assets.bullet_source;

    let x = if direction.x > 0.0 {
        center.x + 34.0
    } else {
        center.x - 34.0 - bullet_source.w
    };
    let y = center.y - (bullet_source.h / 2.0 - 5.0);

    let margin = state.config.window_width;
    state.bullets.push(Bullet::new(
        bullet_source,
        Vec2::new(x, y),
        direction,
        state.config.bullet_speed,
        (-margin, state.level.width + margin),
    ));
    state.fires.push(Fire::new(
        state.assets.fire_source,
        &state.player,
        state.config.fire_lifetime,
        now,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformerConfig;
    use crate::engine::Rect;
    use crate::games::platformer::state::{Level, PlatformerAssets, Tile};

    const DT: f32 = 1.0 / 60.0;

    /// Flat floor at y=640 spanning the level, player spawned above it.
    fn test_level() -> Level {
        let tile = 64.0;
        let solids = (0..40)
            .map(|i| Tile {
                dest: Rect::new(i as f32 * tile, 640.0, tile, tile),
                source: Rect::new(0.0, 0.0, tile, tile),
            })
            .collect();
        Level {
            width: 40.0 * tile,
            height: 720.0,
            player_spawn: Vec2::new(300.0, 400.0),
            solids,
            worm_zones: Vec::new(),
        }
    }

    fn new_state() -> GameState {
        GameState::new(
            PlatformerConfig::default(),
            test_level(),
            PlatformerAssets::default(),
            7,
        )
        .unwrap()
    }

    fn settle(state: &mut GameState) {
        // Let the player fall onto the floor
        for _ in 0..240 {
            tick(state, &TickInput::default(), DT);
            if state.player.on_floor {
                break;
            }
        }
        assert!(state.player.on_floor);
    }

    #[test]
    fn player_falls_and_lands() {
        let mut state = new_state();
        settle(&mut state);
        assert_eq!(state.player.body.direction.y, 0.0);
        assert_eq!(state.player.hitbox.bottom(), 640.0);
        assert_eq!(state.player.anim.state(), "run");
    }

    #[test]
    fn jump_requires_floor() {
        let mut state = new_state();
        // Mid-air jump input is ignored
        tick(&mut state, &TickInput { jump: true, ..Default::default() }, DT);
        assert!(state.player.body.direction.y > state.config.jump_impulse);

        settle(&mut state);
        tick(&mut state, &TickInput { jump: true, ..Default::default() }, DT);
        assert!(state.player.body.direction.y < 0.0);
        assert!(!state.player.on_floor || state.player.body.direction.y < 0.0);
        assert_eq!(state.player.anim.state(), "jump");
    }

    #[test]
    fn wall_stops_rightward_motion_at_its_left_edge() {
        let mut state = new_state();
        // Wall two tiles high at x=640
        state.level.solids.push(Tile {
            dest: Rect::new(640.0, 576.0, 64.0, 64.0),
            source: Rect::new(0.0, 0.0, 64.0, 64.0),
        });
        settle(&mut state);
        let input = TickInput { right: true, ..Default::default() };
        for _ in 0..240 {
            tick(&mut state, &input, DT);
        }
        assert_eq!(state.player.hitbox.right(), 640.0);
    }

    #[test]
    fn shoot_cooldown_gates_bullets() {
        let mut state = new_state();
        settle(&mut state);
        let input = TickInput { shoot: true, ..Default::default() };

        tick(&mut state, &input, DT);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.fires.len(), 1);
        assert!(state.events.contains(&GameEvent::Shot));

        // Held fire inside the cooldown window adds nothing
        for _ in 0..20 {
            tick(&mut state, &input, DT);
        }
        assert_eq!(state.bullets.len(), 1);

        // Past the 0.5s cooldown a second shot goes out
        for _ in 0..20 {
            tick(&mut state, &input, DT);
        }
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn fire_follows_then_dies_on_its_timer() {
        let mut state = new_state();
        settle(&mut state);
        tick(&mut state, &TickInput { shoot: true, ..Default::default() }, DT);
        assert_eq!(state.fires.len(), 1);
        assert_eq!(state.fires[0].body.dest.x, state.player.body.dest.right());

        // 0.1s lifetime
        for _ in 0..8 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert!(state.fires.is_empty());
    }

    #[test]
    fn fire_dies_when_player_turns_around() {
        let mut state = new_state();
        settle(&mut state);
        tick(&mut state, &TickInput { shoot: true, ..Default::default() }, DT);
        assert_eq!(state.fires.len(), 1);
        tick(&mut state, &TickInput { left: true, ..Default::default() }, DT);
        assert!(state.fires.is_empty());
    }

    #[test]
    fn bee_timer_spawns_bees() {
        let mut state = new_state();
        for _ in 0..90 {
            // 1.5s at 60Hz, two spawn intervals
            tick(&mut state, &TickInput::default(), DT);
        }
        assert!(
            state.enemies.iter().any(|e| matches!(e.kind, EnemyKind::Bee { .. })),
            "no bee spawned"
        );
    }

    #[test]
    fn bee_is_discarded_past_the_left_edge() {
        let mut state = new_state();
        let mut bee = Enemy::bee(
            crate::engine::AnimationState::strip(state.assets.bee_frames.clone(), 10.0).unwrap(),
            Vec2::new(10.0, 9000.0), // far below the player
            500.0,
            0.0,
            0.0,
            state.config.death_flash,
        );
        bee.body.direction.x = -1.0;
        state.enemies.push(bee);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert!(state.enemies.iter().all(|e| !matches!(e.kind, EnemyKind::Bee { .. })));
    }

    #[test]
    fn destroyed_enemy_flashes_then_is_removed() {
        let mut state = new_state();
        let zone = Rect::new(0.0, 8000.0, 500.0, 100.0); // out of player reach
        state.enemies.push(Enemy::worm(
            crate::engine::AnimationState::strip(state.assets.worm_frames.clone(), 10.0).unwrap(),
            zone,
            180.0,
            state.config.death_flash,
        ));
        // Advance the clock so the death timer gets a real start timestamp
        tick(&mut state, &TickInput::default(), DT);
        let now = state.time;
        let worm = state.enemies.last_mut().unwrap();
        let frozen_x = worm.body.dest.x;
        worm.destroy(now);
        assert_eq!(worm.flash_strength(), 1.0);

        // Flash window: still present, motion frozen
        for _ in 0..6 {
            tick(&mut state, &TickInput::default(), DT);
        }
        let worm = state
            .enemies
            .iter()
            .find(|e| matches!(e.kind, EnemyKind::Worm { .. }))
            .expect("worm gone during flash");
        assert_eq!(worm.body.dest.x, frozen_x);

        // Past 0.2s the death timer discards it
        for _ in 0..12 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert!(state.enemies.iter().all(|e| !matches!(e.kind, EnemyKind::Worm { .. })));
    }

    #[test]
    fn bullet_hit_destroys_enemy_and_bullet() {
        let mut state = new_state();
        settle(&mut state);
        // Park a worm right in front of the player
        let mut zone = Rect::new(state.player.hitbox.right() + 120.0, 576.0, 200.0, 64.0);
        zone.y = 640.0 - 64.0;
        state.enemies.push(Enemy::worm(
            crate::engine::AnimationState::strip(state.assets.worm_frames.clone(), 10.0).unwrap(),
            zone,
            0.0,
            state.config.death_flash,
        ));

        tick(&mut state, &TickInput { shoot: true, ..Default::default() }, DT);
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), DT);
            if state.events.contains(&GameEvent::EnemyHit) {
                break;
            }
        }
        assert!(state.bullets.is_empty(), "bullet should be discarded on hit");
        // Worm is flashing or already gone, never Active
        assert!(
            state
                .enemies
                .iter()
                .all(|e| !matches!(e.kind, EnemyKind::Worm { .. }) || e.body.is_dying())
        );
    }

    #[test]
    fn enemy_contact_ends_the_run() {
        let mut state = new_state();
        settle(&mut state);
        let zone = Rect::new(state.player.hitbox.x - 50.0, 576.0, 200.0, 64.0);
        state.enemies.push(Enemy::worm(
            crate::engine::AnimationState::strip(state.assets.worm_frames.clone(), 10.0).unwrap(),
            zone,
            0.0,
            state.config.death_flash,
        ));
        // Drop the worm onto the player's row
        let worm = state.enemies.last_mut().unwrap();
        worm.body.dest = state.player.hitbox;

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::PlayerDied));

        // Further ticks are inert
        let bullets_before = state.bullets.len();
        tick(&mut state, &TickInput { shoot: true, ..Default::default() }, DT);
        assert_eq!(state.bullets.len(), bullets_before);
    }
}
