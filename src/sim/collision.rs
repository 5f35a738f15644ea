//! Projectile/enemy and enemy/player contact checks
//!
//! All shapes are treated as circles; "touching" means the centre distance
//! is strictly less than the sum of radii.

use glam::Vec2;

use super::state::{Enemy, GameEvent, Projectile};
use crate::tuning::Tuning;

/// True if two circles centred at `a` and `b` overlap
#[inline]
pub fn within_range(a: Vec2, b: Vec2, range: f32) -> bool {
    a.distance(b) < range
}

/// Resolve projectile hits against enemies for one tick.
///
/// Projectiles are processed in order. Each one damages every enemy inside
/// hit range (no early exit), and any enemy brought to zero health is removed
/// before the next projectile is checked, so it can only be scored once.
/// A projectile survives only if it hit nothing and is strictly inside the
/// arena.
///
/// Adds to `score` and pushes an [`GameEvent::EnemyKilled`] per kill.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut Vec<Enemy>,
    score: &mut u64,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    let hit_range = tuning.hit_range();

    projectiles.retain_mut(|projectile| {
        let mut hit = false;
        enemies.retain_mut(|enemy| {
            if !within_range(projectile.pos, enemy.pos, hit_range) {
                return true;
            }
            enemy.health -= tuning.hit_damage;
            hit = true;
            if enemy.health > 0.0 {
                return true;
            }
            *score += tuning.score_per_kill;
            log::debug!("Enemy killed at ({:.1}, {:.1}), score {score}", enemy.pos.x, enemy.pos.y);
            events.push(GameEvent::EnemyKilled {
                pos: enemy.pos,
                score: *score,
            });
            false
        });
        !hit && tuning.strictly_inside(projectile.pos)
    });
}

/// Number of enemies currently touching the player
pub fn enemies_in_contact(player_pos: Vec2, enemies: &[Enemy], tuning: &Tuning) -> usize {
    let range = tuning.contact_range();
    enemies
        .iter()
        .filter(|e| within_range(player_pos, e.pos, range))
        .count()
}
