//! Read-only world view for renderers
//!
//! A [`Snapshot`] is an owned copy taken after each frame, so a renderer can
//! hold on to it without borrowing the simulation.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub angle: f32,
    pub health: f32,
}

impl PlayerView {
    /// Health as shown on the HUD (rounded half up)
    pub fn display_health(&self) -> i64 {
        (self.health + 0.5).floor() as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub health: f32,
    /// Remaining health relative to spawn health, for the health bar
    pub health_fraction: f32,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub arena_size: Vec2,
    pub player_size: f32,
    pub enemy_size: f32,
    pub bullet_radius: f32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<Vec2>,
    pub score: u64,
    pub game_over: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let tuning = &state.tuning;
        Self {
            arena_size: Vec2::new(tuning.arena_width, tuning.arena_height),
            player_size: tuning.player_size,
            enemy_size: tuning.enemy_size,
            bullet_radius: tuning.bullet_radius,
            player: PlayerView {
                pos: state.player.pos,
                angle: state.player.angle,
                health: state.player.health,
            },
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    health: e.health,
                    health_fraction: e.health / tuning.enemy_start_health,
                })
                .collect(),
            projectiles: state.projectiles.iter().map(|p| p.pos).collect(),
            score: state.score,
            game_over: state.phase == GamePhase::Over,
        }
    }

    /// Serialize for a renderer living outside the process (e.g. a web page)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
