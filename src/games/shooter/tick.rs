//! Shooter frame tick.

use glam::Vec2;

use super::state::{GameEvent, GameState, Laser};
use crate::engine::{Entity, circle_rect_overlap, circles_overlap, compact};
use crate::games::GamePhase;

/// Input snapshot for one tick. `shoot` is edge-triggered: the frontend
/// reports the key press, not the key being held.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
}

/// Advance one frame: timers, input, motion, animation, pairwise checks,
/// compaction — in that order.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.time += dt as f64;
    let now = state.time;

    // Timers
    if state.meteor_timer.tick(now) {
        state.spawn_meteor();
    }

    // Input -> direction
    let raw = Vec2::new(
        input.right as i32 as f32 - input.left as i32 as f32,
        input.down as i32 as f32 - input.up as i32 as f32,
    );
    state.player.body.direction = raw.normalize_or_zero();
    if input.shoot {
        let muzzle = state.player.center() - Vec2::new(0.0, 50.0);
        state.lasers.push(Laser::new(
            state.assets.laser_source,
            muzzle,
            state.config.laser_speed,
            state.config.window_height,
            state.config.despawn_margin,
        ));
        state.events.push(GameEvent::Shot);
    }

    // Motion
    state.player.body.integrate(dt);
    state
        .player
        .constrain(state.config.window_width, state.config.window_height);
    for laser in &mut state.lasers {
        laser.advance(dt);
    }
    for meteor in &mut state.meteors {
        meteor.rotation += meteor.spin * dt;
        meteor.advance(dt);
    }

    // Animation
    for explosion in &mut state.explosions {
        explosion.anim.advance(dt, true);
        if explosion.finished() {
            explosion.body.discard();
        }
    }

    // Pairwise interaction checks
    let player_center = state.player.center();
    let player_radius = state.player.radius();
    for meteor in &state.meteors {
        if circles_overlap(player_center, player_radius, meteor.center(), meteor.radius()) {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::PlayerDied);
            break;
        }
    }
    let mut explosions_at: Vec<Vec2> = Vec::new();
    for laser in &mut state.lasers {
        for meteor in &mut state.meteors {
            if circle_rect_overlap(meteor.body.center(), meteor.radius(), &laser.body.dest) {
                laser.body.discard();
                meteor.body.discard();
                explosions_at.push(laser.body.center());
            }
        }
    }
    for pos in explosions_at {
        state.spawn_explosion(pos);
        state.events.push(GameEvent::MeteorDestroyed);
    }

    // Compaction, always last
    compact(&mut state.lasers);
    compact(&mut state.meteors);
    compact(&mut state.explosions);
}
