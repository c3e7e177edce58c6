//! Flappy - Terminal Flappy Bird Library
//!
//! Exposes the simulation, configuration and UI for the binary and tests.

pub mod build_info;
pub mod cli;
pub mod core;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;

pub use crate::core::{GameConfig, GameLoop, Session, TickResult};
pub use game::{FlappyGame, GameInput, Pipe, Snapshot};
