//! Arena Rush - A top-down arena shooter
//!
//! Core modules:
//! - `sim`: Per-tick simulation (input, entities, spawning, collisions)
//! - `session`: Frame driver that owns the simulation and feeds it input
//! - `snapshot`: Read-only view of the world handed to a renderer
//! - `tuning`: Data-driven game balance

pub mod session;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use session::{FrameOutput, Session};
pub use snapshot::Snapshot;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Arena dimensions (world units, matches the canvas size)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player square side length
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Player movement per tick, per held key
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const PLAYER_START_HEALTH: f32 = 100.0;

    /// Enemy circle diameter
    pub const ENEMY_SIZE: f32 = 20.0;
    /// Enemy pursuit speed per tick
    pub const ENEMY_SPEED: f32 = 1.5;
    pub const ENEMY_START_HEALTH: f32 = 30.0;

    pub const BULLET_SPEED: f32 = 8.0;
    pub const BULLET_RADIUS: f32 = 3.0;

    /// Milliseconds between enemy spawns
    pub const SPAWN_INTERVAL_MS: f64 = 3000.0;

    /// Damage a projectile deals to each enemy it touches
    pub const HIT_DAMAGE: f32 = 10.0;
    /// Damage each touching enemy deals to the player every tick
    pub const CONTACT_DAMAGE: f32 = 0.5;
    pub const SCORE_PER_KILL: u64 = 10;
}

/// Angle (radians) of the direction from `from` to `to`
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Unit vector pointing along `angle`
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
