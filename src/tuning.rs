//! Game balance knobs
//!
//! Every constant the simulation reads goes through [`Tuning`], so a JSON
//! file can override any subset of them.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable constants for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    pub player_size: f32,
    pub player_speed: f32,
    pub player_start_health: f32,

    // === Enemies ===
    pub enemy_size: f32,
    pub enemy_speed: f32,
    pub enemy_start_health: f32,
    /// Milliseconds between spawns
    pub spawn_interval_ms: f64,

    // === Projectiles ===
    pub bullet_speed: f32,
    pub bullet_radius: f32,

    // === Damage & scoring ===
    pub hit_damage: f32,
    /// Applied per touching enemy, per tick
    pub contact_damage: f32,
    pub score_per_kill: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_start_health: PLAYER_START_HEALTH,

            enemy_size: ENEMY_SIZE,
            enemy_speed: ENEMY_SPEED,
            enemy_start_health: ENEMY_START_HEALTH,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,

            hit_damage: HIT_DAMAGE,
            contact_damage: CONTACT_DAMAGE,
            score_per_kill: SCORE_PER_KILL,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Invalid tuning in {}: {err}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn player_half_size(&self) -> f32 {
        self.player_size / 2.0
    }

    pub fn enemy_half_size(&self) -> f32 {
        self.enemy_size / 2.0
    }

    /// Centre-to-centre distance below which an enemy touches the player
    pub fn contact_range(&self) -> f32 {
        self.player_half_size() + self.enemy_half_size()
    }

    /// Centre-to-centre distance below which a projectile strikes an enemy
    pub fn hit_range(&self) -> f32 {
        self.bullet_radius + self.enemy_half_size()
    }

    /// Centre of the arena (player spawn point)
    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// True if `pos` lies strictly inside the arena; the edges count as outside
    pub fn strictly_inside(&self, pos: Vec2) -> bool {
        pos.x > 0.0 && pos.x < self.arena_width && pos.y > 0.0 && pos.y < self.arena_height
    }
}
