//! Per-game configuration.
//!
//! Speed tables, cooldowns, spawn pacing and window dimensions live in
//! explicit structs handed to `GameState::new` at composition time. Defaults
//! carry the tuned values the games shipped with.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Platformer tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformerConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub tile_size: f32,
    /// Player horizontal speed (units/sec).
    pub player_speed: f32,
    /// Gravity added to the vertical displacement each second.
    pub gravity: f32,
    /// Vertical displacement applied on jump (negative is up).
    pub jump_impulse: f32,
    pub bullet_speed: f32,
    /// Minimum interval between shots (seconds).
    pub shoot_cooldown: f64,
    /// Muzzle flash lifetime (seconds).
    pub fire_lifetime: f64,
    /// Hit-flash window before a destroyed enemy is removed (seconds).
    pub death_flash: f64,
    /// Interval between bee spawns (seconds).
    pub bee_spawn_interval: f64,
    pub bee_speed_range: (f32, f32),
    pub bee_amplitude_range: (f32, f32),
    pub bee_frequency_range: (f32, f32),
    pub worm_speed_range: (f32, f32),
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 720.0,
            tile_size: 64.0,
            player_speed: 400.0,
            gravity: 50.0,
            jump_impulse: -20.0,
            bullet_speed: 850.0,
            shoot_cooldown: 0.5,
            fire_lifetime: 0.1,
            death_flash: 0.2,
            bee_spawn_interval: 0.5,
            bee_speed_range: (300.0, 500.0),
            bee_amplitude_range: (500.0, 600.0),
            bee_frequency_range: (2.0, 4.0),
            worm_speed_range: (160.0, 200.0),
        }
    }
}

/// Pong tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub paddle_size: Vec2,
    pub ball_size: f32,
    /// Paddle center positions at kickoff.
    pub player_pos: Vec2,
    pub opponent_pos: Vec2,
    pub player_speed: f32,
    pub opponent_speed: f32,
    pub ball_speed: f32,
    /// Freeze after a point before the ball moves again (seconds).
    pub serve_delay: f64,
}

impl Default for PongConfig {
    fn default() -> Self {
        let (w, h) = (1280.0, 720.0);
        Self {
            window_width: w,
            window_height: h,
            paddle_size: Vec2::new(40.0, 100.0),
            ball_size: 30.0,
            player_pos: Vec2::new(w - 50.0, h / 2.0),
            opponent_pos: Vec2::new(50.0, h / 2.0),
            player_speed: 500.0,
            opponent_speed: 250.0,
            ball_speed: 450.0,
            serve_delay: 1.0,
        }
    }
}

/// Survival shooter tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivorConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub tile_size: f32,
    pub player_speed: f32,
    pub enemy_speed: f32,
    pub bullet_speed: f32,
    /// Bullet lifetime (seconds).
    pub bullet_lifetime: f64,
    /// Minimum interval between shots (seconds).
    pub gun_cooldown: f64,
    /// Interval between enemy spawns (seconds).
    pub spawn_interval: f64,
    /// Gun orbit distance from the player center.
    pub gun_distance: f32,
}

impl Default for SurvivorConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 720.0,
            tile_size: 64.0,
            player_speed: 400.0,
            enemy_speed: 350.0,
            bullet_speed: 800.0,
            bullet_lifetime: 1.0,
            gun_cooldown: 0.1,
            spawn_interval: 0.5,
            gun_distance: 140.0,
        }
    }
}

/// Space shooter tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShooterConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub player_speed: f32,
    pub laser_speed: f32,
    pub meteor_speed_range: (f32, f32),
    /// Interval between meteor spawns (seconds).
    pub meteor_interval: f64,
    /// Vertical band outside the window where sprites despawn.
    pub despawn_margin: f32,
    /// Meteor spin (degrees/sec).
    pub meteor_spin: f32,
    /// Explosion playback speed (frames/sec).
    pub explosion_fps: f32,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self {
            window_width: 1600.0,
            window_height: 900.0,
            player_speed: 500.0,
            laser_speed: 600.0,
            meteor_speed_range: (300.0, 400.0),
            meteor_interval: 0.4,
            despawn_margin: 300.0,
            meteor_spin: 50.0,
            explosion_fps: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configs_round_trip_through_json() {
        let config = PongConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PongConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.paddle_size, config.paddle_size);
        assert_eq!(back.ball_speed, config.ball_speed);
    }

    #[test]
    fn defaults_carry_shipped_tuning() {
        assert_eq!(PlatformerConfig::default().bullet_speed, 850.0);
        assert_eq!(PongConfig::default().opponent_speed, 250.0);
        assert_eq!(SurvivorConfig::default().gun_cooldown, 0.1);
        assert_eq!(ShooterConfig::default().meteor_interval, 0.4);
    }
}
