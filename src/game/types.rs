//! Flappy Bird data structures.
//!
//! World coordinates: x grows to the right, y grows upward, y = 0 is the ground.

use crate::core::config::GameConfig;
use serde::Serialize;

/// Input actions understood by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// A fresh key-down edge of the jump key.
    Jump,
    /// Anything else. Ignored by the simulation.
    Other,
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Collision {
    Floor,
    Ceiling,
    /// Hit the pipe at this x position.
    Pipe { pipe_x: f64 },
}

impl Collision {
    pub fn describe(&self) -> String {
        match self {
            Collision::Floor => "hit the ground".to_string(),
            Collision::Ceiling => "hit the ceiling".to_string(),
            Collision::Pipe { pipe_x } => format!("hit a pipe at x={:.1}", pipe_x),
        }
    }
}

/// The player-controlled bird. Only its height and vertical speed change.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub y: f64,
    /// Positive = upward.
    pub velocity: f64,
    pub radius: f64,
}

/// A pipe pair scrolling from right to left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pipe {
    /// Left edge of the pipe.
    pub x: f64,
    /// Distance from the top of the world down to the top of the gap.
    pub upper_height: f64,
    /// Random-walk anchor for the next pipe's placement.
    pub gap_reference: f64,
}

impl Pipe {
    /// Vertical band `(bottom, top)` the bird may occupy while inside the pipe.
    pub fn gap_band(&self, world_height: f64, gap: f64) -> (f64, f64) {
        let top = world_height - self.upper_height;
        (top - gap, top)
    }
}

/// Read-only view of the game handed to the renderer each frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub bird_y: f64,
    pub bird_velocity: f64,
    pub game_over: bool,
    pub pipes: Vec<Pipe>,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub config: GameConfig,
    pub bird: Bird,
    /// Active pipes, oldest first.
    pub pipes: Vec<Pipe>,
    /// Seconds since the last pipe spawned.
    pub pipe_spawn_timer: f64,
    /// Seconds since the last accepted jump.
    pub time_since_last_jump: f64,
    pub game_over: bool,
    pub collision: Option<Collision>,
    /// Total simulated seconds.
    pub elapsed: f64,
}

impl FlappyGame {
    /// Create a new game with the bird at rest at its start height.
    pub fn new(config: GameConfig) -> Self {
        Self {
            bird: Bird {
                y: config.bird_start_y,
                velocity: 0.0,
                radius: config.bird_radius,
            },
            pipes: Vec::new(),
            pipe_spawn_timer: 0.0,
            time_since_last_jump: 0.0,
            game_over: false,
            collision: None,
            elapsed: 0.0,
            config,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bird_y: self.bird.y,
            bird_velocity: self.bird.velocity,
            game_over: self.game_over,
            pipes: self.pipes.clone(),
        }
    }

    /// Gap reference the next spawned pipe drifts from.
    pub fn last_gap_reference(&self) -> f64 {
        self.pipes
            .last()
            .map(|p| p.gap_reference)
            .unwrap_or(self.config.default_gap_reference)
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
