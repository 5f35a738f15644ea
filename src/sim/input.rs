//! Player intent collected between ticks
//!
//! Event handlers overwrite [`InputState`]; the tick reads a [`TickInput`]
//! copy taken at the start of the tick.

use glam::Vec2;

use crate::angle_between;

/// Directional movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

impl MoveKey {
    /// Map a key name (as reported by the platform) to a movement key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" => Some(MoveKey::Up),
            "s" => Some(MoveKey::Down),
            "a" => Some(MoveKey::Left),
            "d" => Some(MoveKey::Right),
            _ => None,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Aim angle (radians)
    pub aim: f32,
    /// Aim angle of each press since the last tick, oldest first
    pub shots: Vec<f32>,
}

impl TickInput {
    /// Movement for this tick: one `speed` step per held key, opposite keys cancel
    pub fn movement(&self, speed: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.up {
            delta.y -= speed;
        }
        if self.down {
            delta.y += speed;
        }
        if self.left {
            delta.x -= speed;
        }
        if self.right {
            delta.x += speed;
        }
        delta
    }
}

/// Live input state, overwritten by key and pointer events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    aim: f32,
    pending_shots: Vec<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, name: &str) {
        self.set_key(name, true);
    }

    pub fn key_up(&mut self, name: &str) {
        self.set_key(name, false);
    }

    fn set_key(&mut self, name: &str, held: bool) {
        let Some(key) = MoveKey::from_name(name) else {
            log::trace!("Ignoring key {name:?}");
            return;
        };
        match key {
            MoveKey::Up => self.up = held,
            MoveKey::Down => self.down = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
        }
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        match key {
            MoveKey::Up => self.up,
            MoveKey::Down => self.down,
            MoveKey::Left => self.left,
            MoveKey::Right => self.right,
        }
    }

    /// Point the aim at `pointer` (world coordinates).
    ///
    /// `player_pos` is wherever the player stood when the event arrived, i.e.
    /// after the previous tick. If the player moves during the next tick the
    /// angle lags by one tick until the pointer moves again.
    pub fn aim_at(&mut self, pointer: Vec2, player_pos: Vec2) {
        self.aim = angle_between(player_pos, pointer);
    }

    pub fn aim(&self) -> f32 {
        self.aim
    }

    /// Queue one projectile for the next tick, locked to the current aim
    pub fn request_fire(&mut self) {
        self.pending_shots.push(self.aim);
    }

    /// Snapshot for the coming tick; consumes queued fire requests
    pub fn tick_input(&mut self) -> TickInput {
        TickInput {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
            aim: self.aim,
            shots: std::mem::take(&mut self.pending_shots),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_key_events_overwrite_state() {
        let mut input = InputState::new();
        input.key_down("w");
        input.key_down("w");
        assert!(input.is_held(MoveKey::Up));
        input.key_up("w");
        assert!(!input.is_held(MoveKey::Up));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = InputState::new();
        input.key_down("q");
        input.key_down("W");
        input.key_down("ArrowUp");
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = InputState::new();
        input.key_down("a");
        input.key_down("d");
        input.key_down("s");
        let tick = input.tick_input();
        assert_eq!(tick.movement(3.0), Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_aim_relative_to_player() {
        let mut input = InputState::new();
        input.aim_at(Vec2::new(100.0, 200.0), Vec2::new(100.0, 100.0));
        assert!((input.aim() - FRAC_PI_2).abs() < 1e-6);
        input.aim_at(Vec2::new(300.0, 100.0), Vec2::new(100.0, 100.0));
        assert_eq!(input.aim(), 0.0);
    }

    #[test]
    fn test_fire_requests_drained_once() {
        let mut input = InputState::new();
        input.request_fire();
        input.request_fire();
        assert_eq!(input.tick_input().shots.len(), 2);
        assert!(input.tick_input().shots.is_empty());
    }

    #[test]
    fn test_shot_keeps_aim_from_press_time() {
        let player = Vec2::new(400.0, 300.0);
        let mut input = InputState::new();
        input.aim_at(Vec2::new(500.0, 300.0), player);
        input.request_fire();
        input.aim_at(Vec2::new(400.0, 500.0), player);
        input.request_fire();

        let tick = input.tick_input();
        assert_eq!(tick.shots[0], 0.0);
        assert!((tick.shots[1] - FRAC_PI_2).abs() < 1e-6);
        assert!((tick.aim - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_held_keys_persist_across_ticks() {
        let mut input = InputState::new();
        input.key_down("d");
        assert!(input.tick_input().right);
        assert!(input.tick_input().right);
    }
}
