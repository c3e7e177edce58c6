//! Flappy Bird simulation.
//!
//! The bird falls under gravity and jumps on key presses while pipes scroll
//! in from the right at randomized heights. Touching the ground, the ceiling
//! or a pipe ends the game for good.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
