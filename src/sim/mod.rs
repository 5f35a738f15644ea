//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module draws, reads the
//! clock or touches the platform:
//! - Per-tick speeds (no delta time)
//! - Injected RNG for spawning
//! - Stable iteration order (insertion order)

pub mod collision;
pub mod input;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{enemies_in_contact, resolve_projectile_hits, within_range};
pub use input::{InputState, MoveKey, TickInput};
pub use spawner::{Spawner, edge_position, spawn_enemy};
pub use state::{Enemy, GameEvent, GamePhase, GameState, Player, Projectile};
pub use tick::tick;
