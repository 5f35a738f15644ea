//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; the frame driver
//! owns it and passes it by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::heading;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player died; nothing moves until reset
    Over,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An enemy's health reached zero; `score` is the total after the kill
    EnemyKilled { pos: Vec2, score: u64 },
    /// Player health reached zero; emitted exactly once per session
    GameOver { score: u64 },
}

/// The player's avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Aim angle (radians), facing the pointer
    pub angle: f32,
    /// Stored unrounded so fractional contact damage accumulates
    pub health: f32,
}

impl Player {
    pub fn new(pos: Vec2, health: f32) -> Self {
        Self {
            pos,
            angle: 0.0,
            health,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Keep the avatar's square fully inside the arena
    pub fn clamp_to(&mut self, tuning: &Tuning) {
        let half = tuning.player_half_size();
        self.pos.x = self.pos.x.min(tuning.arena_width - half).max(half);
        self.pos.y = self.pos.y.min(tuning.arena_height - half).max(half);
    }
}

/// A homing enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub health: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, health: f32) -> Self {
        Self { pos, health }
    }
}

/// A player-fired projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
}

impl Projectile {
    /// Projectile leaving `origin` along `angle`
    pub fn fired(origin: Vec2, angle: f32, speed: f32) -> Self {
        Self {
            pos: origin,
            vel: heading(angle) * speed,
        }
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Unordered; removal never reorders survivors
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh session: player centred, no enemies or projectiles
    pub fn new(tuning: Tuning) -> Self {
        let player = Player::new(tuning.arena_center(), tuning.player_start_health);
        Self {
            tuning,
            phase: GamePhase::Playing,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            time_ticks: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Add an enemy with starting health at `pos`
    pub fn spawn_enemy_at(&mut self, pos: Vec2) {
        self.enemies
            .push(Enemy::new(pos, self.tuning.enemy_start_health));
    }

    /// Launch a projectile from the player along `angle`
    pub fn fire(&mut self, angle: f32) {
        self.projectiles.push(Projectile::fired(
            self.player.pos,
            angle,
            self.tuning.bullet_speed,
        ));
    }
}
