//! Pong frame tick.

use super::state::{GameEvent, GameState, Side};
use crate::engine::{Axis, resolve_swept_axis};

/// Input snapshot for one tick (the opponent paddle is simulated).
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

/// Advance one frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time += dt as f64;
    let now = state.time;

    state.ball.serve_timer.tick(now);

    // Paddles: record last frame, steer, clamp, move
    state.player.record_prev();
    state.opponent.record_prev();

    state.player.direction.y = input.down as i32 as f32 - input.up as i32 as f32;
    let ball_center = state.ball.dest.center().y;
    let opponent_center = state.opponent.dest.center().y;
    state.opponent.direction.y =
        (opponent_center < ball_center) as i32 as f32 - (opponent_center > ball_center) as i32 as f32;

    state.player.constrain(state.config.window_height);
    state.opponent.constrain(state.config.window_height);
    state.player.integrate(dt);
    state.opponent.integrate(dt);

    // Ball: record last frame, walls/goals, then move with swept resolution
    state.ball.record_prev();
    constrain_ball(state, now);
    if !state.ball.serve_timer.is_active() {
        move_ball(state, dt);
    }
}

/// Top/bottom wall reflection and goal detection.
fn constrain_ball(state: &mut GameState, now: f64) {
    let window_w = state.config.window_width;
    let window_h = state.config.window_height;
    let ball = &mut state.ball;
    let size = ball.dest.w;

    if ball.dest.y <= 0.0 {
        ball.dest.y = 0.0;
        ball.direction.y = -ball.direction.y;
        state.events.push(GameEvent::WallBounce);
    } else if ball.dest.y + size >= window_h {
        ball.dest.y = window_h - size;
        ball.direction.y = -ball.direction.y;
        state.events.push(GameEvent::WallBounce);
    } else if ball.dest.x + size >= window_w || ball.dest.x <= 0.0 {
        // Out past a goal line: the far side scores
        let side = if ball.dest.x < window_w / 2.0 {
            Side::Player
        } else {
            Side::Opponent
        };
        match side {
            Side::Player => state.score.player += 1,
            Side::Opponent => state.score.opponent += 1,
        }
        state.events.push(GameEvent::PointScored(side));
        state.reset_ball(now);
    }
}

/// Axis-separated motion with swept paddle resolution, X before Y.
fn move_ball(state: &mut GameState, dt: f32) {
    let ball = &mut state.ball;
    let paddles = [
        (&state.player.dest, &state.player.prev_dest),
        (&state.opponent.dest, &state.opponent.prev_dest),
    ];

    ball.dest.x += ball.direction.x * ball.speed * dt;
    let mut bounced = false;
    for (solid, solid_prev) in paddles {
        bounced |= resolve_swept_axis(
            &mut ball.dest,
            &ball.prev_dest,
            solid,
            solid_prev,
            &mut ball.direction,
            Axis::X,
        );
    }

    ball.dest.y += ball.direction.y * ball.speed * dt;
    for (solid, solid_prev) in paddles {
        bounced |= resolve_swept_axis(
            &mut ball.dest,
            &ball.prev_dest,
            solid,
            solid_prev,
            &mut ball.direction,
            Axis::Y,
        );
    }

    if bounced {
        state.events.push(GameEvent::PaddleBounce);
    }
}
