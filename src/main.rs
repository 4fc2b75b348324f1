//! Headless demo runner.
//!
//! Steps one of the four simulations at 60 Hz with scripted input and logs
//! the events it emits, which smoke-tests a sim without any frontend:
//! `retro-arcade pong [seed]`. The pong demo persists its score the way a
//! real frontend would.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use glam::Vec2;

use retro_arcade::engine::{AnimationError, Rect};
use retro_arcade::games::{GamePhase, platformer, pong, shooter, survivor};
use retro_arcade::{PlatformerConfig, PongConfig, Score, ShooterConfig, SurvivorConfig};

const DT: f32 = 1.0 / 60.0;
const DEMO_TICKS: usize = 600;
const SCORE_FILE: &str = "pong_score.json";

fn main() -> ExitCode {
    env_logger::init();

    let game = env::args().nth(1).unwrap_or_else(|| "pong".to_string());
    let seed = env::args()
        .nth(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    log::info!("running the {game} demo with seed {seed}");

    let result = match game.as_str() {
        "platformer" => run_platformer(seed),
        "pong" => run_pong(seed),
        "survivor" => run_survivor(seed),
        "shooter" => run_shooter(seed),
        other => {
            eprintln!("unknown game `{other}`; expected platformer | pong | survivor | shooter");
            return ExitCode::from(2);
        }
    };
    if let Err(err) = result {
        log::error!("could not start {game}: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Run and jump rightward along a flat floor, shooting on cooldown.
fn run_platformer(seed: u64) -> Result<(), AnimationError> {
    let tile = 64.0;
    let solids = (0..60)
        .map(|i| platformer::Tile {
            dest: Rect::new(i as f32 * tile, 640.0, tile, tile),
            source: Rect::new(0.0, 0.0, tile, tile),
        })
        .collect();
    let level = platformer::Level {
        width: 60.0 * tile,
        height: 720.0,
        player_spawn: Vec2::new(200.0, 400.0),
        solids,
        worm_zones: vec![Rect::new(1500.0, 576.0, 400.0, 64.0)],
    };

    let mut state = platformer::GameState::new(
        PlatformerConfig::default(),
        level,
        platformer::PlatformerAssets::default(),
        seed,
    )?;

    for frame in 0..DEMO_TICKS {
        let input = platformer::TickInput {
            right: true,
            jump: frame % 90 == 0,
            shoot: frame % 40 == 0,
            ..Default::default()
        };
        platformer::tick(&mut state, &input, DT);
        log_events(&state.events);
        if state.phase == GamePhase::GameOver {
            log::info!("run over at t={:.2}s", state.time);
            break;
        }
    }
    log::info!(
        "platformer done: {} enemies on screen, player at x={:.0}",
        state.enemies.len(),
        state.player.hitbox.x
    );
    Ok(())
}

/// Track the ball with the player paddle; the score survives across runs.
fn run_pong(seed: u64) -> Result<(), AnimationError> {
    let score = Score::load(Path::new(SCORE_FILE));
    let mut state = pong::GameState::new(PongConfig::default(), score, seed);

    for _ in 0..DEMO_TICKS {
        let paddle_y = state.player.dest.center().y;
        let ball_y = state.ball.dest.center().y;
        let input = pong::TickInput {
            up: ball_y < paddle_y - 5.0,
            down: ball_y > paddle_y + 5.0,
        };
        pong::tick(&mut state, &input, DT);
        log_events(&state.events);
    }
    log::info!(
        "pong done: {} - {}",
        state.score.player,
        state.score.opponent
    );
    state.score.save(Path::new(SCORE_FILE));
    Ok(())
}

/// Orbit the aim around the player while holding fire.
fn run_survivor(seed: u64) -> Result<(), AnimationError> {
    let arena = survivor::Arena {
        player_spawn: Vec2::new(600.0, 300.0),
        solids: vec![Rect::new(-64.0, -640.0, 64.0, 1280.0)],
        spawn_points: vec![
            Vec2::new(-400.0, 300.0),
            Vec2::new(1600.0, 300.0),
            Vec2::new(600.0, -400.0),
        ],
    };
    let mut state = survivor::GameState::new(
        SurvivorConfig::default(),
        arena,
        survivor::SurvivorAssets::default(),
        seed,
    )?;

    let window_center = Vec2::new(
        state.config.window_width / 2.0,
        state.config.window_height / 2.0,
    );
    for frame in 0..DEMO_TICKS {
        let angle = frame as f32 * 0.05;
        let input = survivor::TickInput {
            shoot: true,
            mouse: window_center + Vec2::new(angle.cos(), angle.sin()) * 200.0,
            ..Default::default()
        };
        survivor::tick(&mut state, &input, DT);
        log_events(&state.events);
    }
    log::info!(
        "survivor done: {} enemies left, {} bullets in flight",
        state.enemies.len(),
        state.bullets.len()
    );
    Ok(())
}

/// Strafe under the meteor rain, firing in bursts.
fn run_shooter(seed: u64) -> Result<(), AnimationError> {
    let mut state =
        shooter::GameState::new(ShooterConfig::default(), shooter::ShooterAssets::default(), seed)?;

    for frame in 0..DEMO_TICKS {
        let input = shooter::TickInput {
            left: (frame / 60) % 2 == 0,
            right: (frame / 60) % 2 == 1,
            shoot: frame % 15 == 0,
            ..Default::default()
        };
        shooter::tick(&mut state, &input, DT);
        log_events(&state.events);
        if state.phase == GamePhase::GameOver {
            log::info!("ship destroyed at t={:.2}s", state.time);
            break;
        }
    }
    log::info!("shooter done: score {}", state.score());
    Ok(())
}

fn log_events<E: std::fmt::Debug>(events: &[E]) {
    for event in events {
        log::info!("event: {event:?}");
    }
}
