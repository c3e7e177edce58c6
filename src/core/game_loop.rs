//! Frame loop interface between the host and the simulation.
//!
//! The host owns the clock and the keyboard; the simulation owns everything
//! else. A [`Session`] bundles a game with its random source so the host only
//! has to feed it frame times and jump presses.

use crate::game::logic::{process_input, process_tick};
use crate::game::types::{Collision, FlappyGame, GameInput, Pipe, Snapshot};
use crate::core::config::GameConfig;
use rand::Rng;

/// Result of one frame tick - captures everything that happened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Pipe spawned this tick
    pub spawned: Option<Pipe>,
    /// Pipes removed after leaving the screen
    pub pipes_retired: usize,
    /// Set on the tick that ended the game
    pub collision: Option<Collision>,
}

/// Core game loop trait.
///
/// Implemented by [`Session`]; tests drive it directly with fixed frame times.
pub trait GameLoop {
    /// Advance by `dt` seconds. Returns what happened.
    fn advance(&mut self, dt: f64) -> TickResult;

    /// Handle a jump key-down edge. Returns true if the impulse was applied.
    fn on_jump_pressed(&mut self) -> bool;

    /// Read-only view for the renderer.
    fn snapshot(&self) -> Snapshot;

    fn is_game_over(&self) -> bool;
}

/// A running game paired with its random source.
pub struct Session<R: Rng> {
    game: FlappyGame,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            game: FlappyGame::new(config),
            rng,
        }
    }

    pub fn game(&self) -> &FlappyGame {
        &self.game
    }
}

impl<R: Rng> GameLoop for Session<R> {
    fn advance(&mut self, dt: f64) -> TickResult {
        process_tick(&mut self.game, dt, &mut self.rng)
    }

    fn on_jump_pressed(&mut self) -> bool {
        process_input(&mut self.game, GameInput::Jump)
    }

    fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    fn is_game_over(&self) -> bool {
        self.game.game_over
    }
}
