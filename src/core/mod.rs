//! Core configuration and frame loop.

pub mod config;
pub mod constants;
pub mod game_loop;

pub use config::{ConfigError, ConfigSource, GameConfig};
pub use constants::*;
pub use game_loop::{GameLoop, Session, TickResult};
