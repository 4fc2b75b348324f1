//! Persisted pong score.
//!
//! A two-field record serialized as JSON, loaded once at startup and written
//! once at shutdown. Any read or parse failure falls back to a
//! zero-initialized score; it is never surfaced to the player.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Running pong score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    /// Load a score file, defaulting to zeros on absence or parse failure.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                log::info!("no score file at {}, starting at zero", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(score) => {
                log::info!("loaded score from {}", path.display());
                score
            }
            Err(err) => {
                log::warn!("score file {} unreadable ({err}), starting at zero", path.display());
                Self::default()
            }
        }
    }

    /// Write the score file, creating parent directories as needed.
    /// Failures are logged, not propagated; losing a score is non-fatal.
    pub fn save(&self, path: &Path) {
        if let Some(parent) = path.parent()
            && let Err(err) = fs::create_dir_all(parent)
        {
            log::warn!("could not create {}: {err}", parent.display());
            return;
        }
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("could not serialize score: {err}");
                return;
            }
        };
        match fs::write(path, json) {
            Ok(()) => log::info!("score saved to {}", path.display()),
            Err(err) => log::warn!("could not write {}: {err}", path.display()),
        }
    }
}
