//! Simulation tick
//!
//! Advances the world by one frame. Speeds are per tick, not per second, so
//! the game runs faster on faster displays.

use super::collision::{resolve_projectile_hits, within_range};
use super::input::TickInput;
use super::state::{GameEvent, GamePhase, GameState};
use crate::{angle_between, heading};

/// Advance the game state by one tick.
///
/// Phases run in order, each seeing the previous one's results:
/// queued shots, player movement, enemy pursuit and contact damage,
/// projectile movement, projectile hits, boundary clamp, death check.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Nothing moves once the session is over
    if state.phase == GamePhase::Over {
        return events;
    }

    state.time_ticks += 1;

    // Shots fired since the last tick leave from where the player stands now,
    // each along the aim it was pressed with
    state.player.angle = input.aim;
    for &angle in &input.shots {
        state.fire(angle);
    }

    // 1. Player movement
    state.player.pos += input.movement(state.tuning.player_speed);

    // 2. Enemy pursuit + contact damage
    let player_pos = state.player.pos;
    let contact_range = state.tuning.contact_range();
    for enemy in &mut state.enemies {
        let angle = angle_between(enemy.pos, player_pos);
        enemy.pos += heading(angle) * state.tuning.enemy_speed;

        if within_range(enemy.pos, player_pos, contact_range) {
            state.player.health -= state.tuning.contact_damage;
        }
    }

    // 3. Projectile movement
    for projectile in &mut state.projectiles {
        projectile.pos += projectile.vel;
    }

    // 4. Projectile vs enemy
    resolve_projectile_hits(
        &mut state.projectiles,
        &mut state.enemies,
        &mut state.score,
        &state.tuning,
        &mut events,
    );

    // 5. Keep the player inside the arena
    state.player.clamp_to(&state.tuning);

    if state.player.is_dead() {
        state.phase = GamePhase::Over;
        log::info!("Game over at tick {} with score {}", state.time_ticks, state.score);
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}
