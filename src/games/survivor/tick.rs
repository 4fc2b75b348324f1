//! Survivor frame tick.

use glam::Vec2;

use super::state::{Bullet, Enemy, GameEvent, GameState};
use crate::engine::{Axis, Entity, Rect, Timer, compact, resolve_axis};

/// Input snapshot for one tick. `mouse` is in window coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
    pub mouse: Vec2,
}

/// Advance one frame: timers, input, motion + axis resolution, animation,
/// pairwise checks, compaction — in that order.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time += dt as f64;
    let now = state.time;

    // Timers
    if state.spawn_timer.tick(now) {
        state.spawn_enemy();
    }
    state.shoot_timer.tick(now);
    for bullet in &mut state.bullets {
        if bullet.lifetime.tick(now) {
            bullet.body.discard();
        }
    }

    // Input -> direction and aim
    let raw = Vec2::new(
        input.right as i32 as f32 - input.left as i32 as f32,
        input.down as i32 as f32 - input.up as i32 as f32,
    );
    state.player.body.direction = raw.normalize_or_zero();
    let window_center = Vec2::new(state.config.window_width, state.config.window_height) / 2.0;
    state
        .gun
        .update(state.player.center(), input.mouse, window_center);
    if input.shoot && !state.shoot_timer.is_active() {
        state.shoot_timer.activate(now);
        shoot(state, now);
        state.events.push(GameEvent::Shot);
    }

    // Motion + axis resolution
    move_player(state, dt);
    state
        .gun
        .update(state.player.center(), input.mouse, window_center);
    let target = state.player.center();
    for enemy in &mut state.enemies {
        move_enemy(enemy, target, &state.arena.solids, dt);
    }
    for bullet in &mut state.bullets {
        bullet.advance(dt);
    }

    // Animation
    {
        let player = &mut state.player;
        let direction = player.body.direction;
        if direction.x != 0.0 {
            player
                .anim
                .set_state(if direction.x > 0.0 { "right" } else { "left" });
        }
        if direction.y != 0.0 {
            player
                .anim
                .set_state(if direction.y > 0.0 { "down" } else { "up" });
        }
        player.anim.advance(dt, direction != Vec2::ZERO);
    }
    for enemy in &mut state.enemies {
        enemy.anim.advance(dt, true);
    }

    // Pairwise interaction checks
    for bullet in &mut state.bullets {
        for enemy in &mut state.enemies {
            if bullet.body.dest.overlaps(&enemy.hitbox) {
                bullet.body.discard();
                enemy.body.discard();
                state.events.push(GameEvent::EnemyHit);
            }
        }
    }

    // Compaction, always last
    compact(&mut state.bullets);
    compact(&mut state.enemies);
}

/// Axis-separated movement against the arena solids. Top-down world, so the
/// vertical component is never zeroed on contact.
fn move_player(state: &mut GameState, dt: f32) {
    let player = &mut state.player;
    let solids = &state.arena.solids;

    player.hitbox.x += player.body.direction.x * player.body.speed * dt;
    resolve_axis(
        &mut player.hitbox,
        &mut player.body.direction,
        solids.iter().copied(),
        Axis::X,
        false,
    );
    player.hitbox.y += player.body.direction.y * player.body.speed * dt;
    resolve_axis(
        &mut player.hitbox,
        &mut player.body.direction,
        solids.iter().copied(),
        Axis::Y,
        false,
    );
    player.sync_dest();
}

/// Re-aim at the player every frame, then run the same two axis passes the
/// player uses.
fn move_enemy(enemy: &mut Enemy, target: Vec2, solids: &[Rect], dt: f32) {
    enemy.body.direction = (target - enemy.center()).normalize_or_zero();

    enemy.hitbox.x += enemy.body.direction.x * enemy.body.speed * dt;
    resolve_axis(
        &mut enemy.hitbox,
        &mut enemy.body.direction,
        solids.iter().copied(),
        Axis::X,
        false,
    );
    enemy.hitbox.y += enemy.body.direction.y * enemy.body.speed * dt;
    resolve_axis(
        &mut enemy.hitbox,
        &mut enemy.body.direction,
        solids.iter().copied(),
        Axis::Y,
        false,
    );
    enemy.sync_dest();
}

/// Spawn a bullet at the muzzle: out along the aim, nudged perpendicular
/// toward the barrel.
fn shoot(state: &mut GameState, now: f64) {
    let aim = state.gun.aim;
    let offset = if aim.x > 0.0 { -10.0 } else { 10.0 };
    let perpendicular = Vec2::new(-aim.y * offset, aim.x * offset);
    let pos = state.gun.pos + aim * 65.0 + perpendicular;

    state.bullets.push(Bullet::new(
        state.assets.bullet_source,
        pos,
        aim,
        state.config.bullet_speed,
        Timer::started(state.config.bullet_lifetime, now),
    ));
}
