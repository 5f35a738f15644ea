//! Time-gated enemy spawning on the arena edges

use glam::Vec2;
use rand::Rng;

use super::state::GameState;

/// Spawns one enemy whenever more than `interval_ms` has passed
#[derive(Debug, Clone)]
pub struct Spawner {
    pub interval_ms: f64,
    last_spawn_ms: f64,
}

impl Spawner {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_spawn_ms: 0.0,
        }
    }

    /// Restart the interval from `now_ms`
    pub fn restart(&mut self, now_ms: f64) {
        self.last_spawn_ms = now_ms;
    }

    pub fn last_spawn_ms(&self) -> f64 {
        self.last_spawn_ms
    }

    /// Spawn an enemy if the interval has strictly elapsed. Returns true if one spawned.
    pub fn poll<R: Rng>(&mut self, now_ms: f64, state: &mut GameState, rng: &mut R) -> bool {
        if now_ms - self.last_spawn_ms <= self.interval_ms {
            return false;
        }
        spawn_enemy(state, rng);
        self.last_spawn_ms = now_ms;
        true
    }
}

/// Place one enemy on a random arena edge
pub fn spawn_enemy<R: Rng>(state: &mut GameState, rng: &mut R) {
    let pos = edge_position(rng, state.tuning.arena_width, state.tuning.arena_height);
    log::debug!("Enemy spawned at ({:.1}, {:.1})", pos.x, pos.y);
    state.spawn_enemy_at(pos);
}

/// Random point on the border of `[0, width] x [0, height]`.
///
/// First coin picks a vertical (left/right) or horizontal (top/bottom) edge,
/// second coin picks which one; the free coordinate is uniform.
pub fn edge_position<R: Rng>(rng: &mut R, width: f32, height: f32) -> Vec2 {
    if coin(rng) {
        let x = if coin(rng) { 0.0 } else { width };
        let y = rng.random::<f32>() * height;
        Vec2::new(x, y)
    } else {
        let x = rng.random::<f32>() * width;
        let y = if coin(rng) { 0.0 } else { height };
        Vec2::new(x, y)
    }
}

fn coin<R: Rng>(rng: &mut R) -> bool {
    rng.random::<f32>() < 0.5
}
