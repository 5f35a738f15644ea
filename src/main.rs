//! Arena Rush headless runner
//!
//! Plays one session at a simulated 60 Hz with a simple autopilot standing in
//! for the mouse, and logs what happens. Rendering lives elsewhere; this is
//! for balance checks and smoke runs.
//!
//! Usage: `arena-rush [seed] [tuning.json]`

use glam::Vec2;

use arena_rush::sim::{GameEvent, GameState, enemies_in_contact};
use arena_rush::{Session, Tuning};

/// Simulated display refresh
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Give up after ten minutes of game time
const MAX_FRAMES: u64 = 60 * 60 * 10;
/// Autopilot clicks every this many frames
const FIRE_EVERY: u64 = 12;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(time_seed);
    let tuning = match args.next() {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };

    log::info!("Arena Rush (headless) starting...");
    let mut session = Session::new(tuning, seed);
    let mut kills = 0u32;

    for frame in 1..=MAX_FRAMES {
        autopilot(&mut session, frame);

        let out = session.frame(frame as f64 * FRAME_MS);
        for event in &out.events {
            if let GameEvent::EnemyKilled { .. } = event {
                kills += 1;
            }
        }
        if frame % 600 == 0 {
            let state = session.state();
            log::info!(
                "t={}s health={} score={} enemies={} touching={}",
                frame / 60,
                out.snapshot.player.display_health(),
                out.snapshot.score,
                out.snapshot.enemies.len(),
                enemies_in_contact(state.player.pos, &state.enemies, &state.tuning)
            );
        }
        if let Some(score) = out.game_over {
            println!(
                "Game over after {:.1}s: score {score}, {kills} kills (seed {})",
                frame as f64 * FRAME_MS / 1000.0,
                session.seed()
            );
            return;
        }
    }

    let state = session.state();
    println!(
        "Survived {}s: score {}, health {:.1} (seed {})",
        MAX_FRAMES / 60,
        state.score,
        state.player.health,
        session.seed()
    );
}

/// Aim at the nearest enemy, shoot on a fixed beat, and back away from it
fn autopilot(session: &mut Session, frame: u64) {
    let Some(target) = nearest_enemy(session.state()) else {
        for key in ["w", "a", "s", "d"] {
            session.key_up(key);
        }
        return;
    };

    session.pointer_moved(target, Vec2::ZERO);
    if frame % FIRE_EVERY == 0 {
        session.pointer_pressed();
    }

    let away = session.state().player.pos - target;
    let (x_key, other_x) = if away.x < 0.0 { ("a", "d") } else { ("d", "a") };
    let (y_key, other_y) = if away.y < 0.0 { ("w", "s") } else { ("s", "w") };
    session.key_down(x_key);
    session.key_up(other_x);
    session.key_down(y_key);
    session.key_up(other_y);
}

fn nearest_enemy(state: &GameState) -> Option<Vec2> {
    let player = state.player.pos;
    state
        .enemies
        .iter()
        .map(|e| e.pos)
        .min_by(|a, b| {
            a.distance_squared(player)
                .partial_cmp(&b.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
