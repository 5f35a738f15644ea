//! Frame driver
//!
//! A [`Session`] owns the simulation state, the live input and the spawn
//! timer. The platform forwards events to it and calls [`Session::frame`]
//! once per display refresh.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::sim::{GameEvent, GameState, InputState, Spawner, spawn_enemy, tick};
use crate::snapshot::Snapshot;
use crate::tuning::Tuning;

/// Result of one frame
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// World state after this frame, for the renderer
    pub snapshot: Snapshot,
    /// Everything that happened this frame
    pub events: Vec<GameEvent>,
    /// Final score, set only on the frame the player died
    pub game_over: Option<u64>,
    /// True if the spawner added an enemy this frame
    pub spawned: bool,
}

/// One run of the game, from first frame to game over
pub struct Session {
    state: GameState,
    input: InputState,
    spawner: Spawner,
    rng: Pcg32,
    seed: u64,
    last_frame_ms: f64,
}

impl Session {
    /// Start a session with one enemy already on the field
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut session = Self {
            spawner: Spawner::new(tuning.spawn_interval_ms),
            state: GameState::new(tuning),
            input: InputState::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            last_frame_ms: 0.0,
        };
        spawn_enemy(&mut session.state, &mut session.rng);
        log::info!("Session started (seed {seed})");
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn key_down(&mut self, name: &str) {
        self.input.key_down(name);
    }

    pub fn key_up(&mut self, name: &str) {
        self.input.key_up(name);
    }

    /// Pointer moved to `client` (viewport coordinates); `canvas_origin` is
    /// the canvas's top-left corner in the same coordinates.
    pub fn pointer_moved(&mut self, client: Vec2, canvas_origin: Vec2) {
        let world = client - canvas_origin;
        self.input.aim_at(world, self.state.player.pos);
    }

    /// Pointer pressed: fire one projectile on the next frame
    pub fn pointer_pressed(&mut self) {
        if !self.state.is_over() {
            self.input.request_fire();
        }
    }

    /// Run one frame at `timestamp_ms`: spawn check, then one tick
    pub fn frame(&mut self, timestamp_ms: f64) -> FrameOutput {
        self.last_frame_ms = timestamp_ms;

        if self.state.is_over() {
            return FrameOutput {
                snapshot: Snapshot::capture(&self.state),
                events: Vec::new(),
                game_over: None,
                spawned: false,
            };
        }

        let spawned = self
            .spawner
            .poll(timestamp_ms, &mut self.state, &mut self.rng);
        let input = self.input.tick_input();
        let events = tick(&mut self.state, &input);
        let game_over = events.iter().find_map(|e| match e {
            GameEvent::GameOver { score } => Some(*score),
            _ => None,
        });

        FrameOutput {
            snapshot: Snapshot::capture(&self.state),
            events,
            game_over,
            spawned,
        }
    }

    /// Throw away the run and start over with the same tuning.
    ///
    /// The spawn timer restarts from the last frame seen, and a fresh enemy
    /// is placed immediately.
    pub fn reset(&mut self) {
        let tuning = self.state.tuning.clone();
        self.state = GameState::new(tuning);
        self.input = InputState::new();
        self.spawner.restart(self.last_frame_ms);
        spawn_enemy(&mut self.state, &mut self.rng);
        log::info!("Session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[test]
    fn test_new_session_has_one_enemy_on_edge() {
        let session = Session::new(Tuning::default(), 1234);
        let state = session.state();
        assert_eq!(state.enemies.len(), 1);
        let pos = state.enemies[0].pos;
        assert!(pos.x == 0.0 || pos.x == 800.0 || pos.y == 0.0 || pos.y == 600.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_keys_move_player() {
        let mut session = Session::new(Tuning::default(), 1);
        session.key_down("d");
        session.frame(FRAME_MS);
        session.frame(2.0 * FRAME_MS);
        session.key_up("d");
        session.frame(3.0 * FRAME_MS);
        assert_eq!(session.state().player.pos, Vec2::new(406.0, 300.0));
    }

    #[test]
    fn test_pointer_aim_uses_canvas_offset() {
        let mut session = Session::new(Tuning::default(), 1);
        // Canvas at (50, 20); pointer directly below the player
        session.pointer_moved(Vec2::new(450.0, 420.0), Vec2::new(50.0, 20.0));
        session.pointer_pressed();
        let out = session.frame(FRAME_MS);

        assert!((out.snapshot.player.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(out.snapshot.projectiles.len(), 1);
        let shot = out.snapshot.projectiles[0];
        assert!((shot.x - 400.0).abs() < 1e-4);
        assert!((shot.y - 308.0).abs() < 1e-4);
    }

    #[test]
    fn test_shot_direction_fixed_at_press() {
        let mut session = Session::new(Tuning::default(), 1);
        // Aim right, press, then swing the pointer below the player before the frame
        session.pointer_moved(Vec2::new(500.0, 300.0), Vec2::ZERO);
        session.pointer_pressed();
        session.pointer_moved(Vec2::new(400.0, 500.0), Vec2::ZERO);
        let out = session.frame(16.0);

        assert_eq!(out.snapshot.projectiles, vec![Vec2::new(408.0, 300.0)]);
        assert!((out.snapshot.player.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_spawns_follow_interval() {
        let mut session = Session::new(Tuning::default(), 5);
        let mut spawn_frames = Vec::new();
        for i in 1..=400 {
            if session.frame(i as f64 * FRAME_MS).spawned {
                spawn_frames.push(i);
            }
        }
        // First spawn once 3000 ms has strictly passed (frame 181), then every 181 frames
        assert_eq!(spawn_frames, vec![181, 362]);
        assert_eq!(session.state().enemies.len(), 3);
    }

    #[test]
    fn test_game_over_reported_once_then_frozen() {
        let mut session = Session::new(Tuning::default(), 3);
        session.state.player.health = 0.5;
        session.state.score = 20;
        session.state.spawn_enemy_at(Vec2::new(405.0, 300.0));

        let out = session.frame(FRAME_MS);
        assert_eq!(out.game_over, Some(20));
        assert!(out.snapshot.game_over);
        assert!(session.is_over());

        let frozen = session.state().enemies.clone();
        session.key_down("w");
        session.pointer_pressed();
        for i in 2..400 {
            let out = session.frame(i as f64 * FRAME_MS);
            assert_eq!(out.game_over, None);
            assert!(!out.spawned);
        }
        assert_eq!(session.state().enemies, frozen);
        assert!(session.state().projectiles.is_empty());
    }

    #[test]
    fn test_reset_starts_fresh_run() {
        let mut session = Session::new(Tuning::default(), 3);
        session.state.player.health = 0.0;
        session.key_down("a");
        session.frame(FRAME_MS);
        assert!(session.is_over());

        session.reset();
        let state = session.state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.health, 100.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.enemies.len(), 1);

        // Held keys were cleared and the spawn timer restarted
        let out = session.frame(2.0 * FRAME_MS);
        assert_eq!(out.snapshot.player.pos, Vec2::new(400.0, 300.0));
        assert!(!out.spawned);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = Session::new(Tuning::default(), 99_999);
        let mut b = Session::new(Tuning::default(), 99_999);
        for i in 1..=600 {
            if i % 30 == 0 {
                a.pointer_pressed();
                b.pointer_pressed();
            }
            let t = i as f64 * FRAME_MS;
            assert_eq!(a.frame(t).snapshot, b.frame(t).snapshot);
        }
    }
}
