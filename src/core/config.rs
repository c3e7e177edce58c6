//! Tuning configuration for a game session.
//!
//! Every physics and spawning constant lives here so a JSON file can override
//! any subset of them. Missing fields fall back to the built-in defaults.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        let kind = match &err {
            ConfigError::Io { source, .. } => source.kind(),
            ConfigError::Parse { .. } | ConfigError::Invalid { .. } => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err)
    }
}

/// All tunable values of the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f64,
    pub world_height: f64,

    pub bird_x: f64,
    pub bird_start_y: f64,
    pub bird_radius: f64,

    /// Vertical acceleration, negative pulls the bird down.
    pub gravity: f64,
    pub jump_velocity: f64,
    /// Upper bound on upward speed. Falling speed is not capped.
    pub terminal_velocity: f64,
    /// Minimum seconds between two accepted jumps.
    pub jump_cooldown: f64,

    pub pipe_width: f64,
    pub pipe_velocity: f64,
    pub pipe_gap: f64,
    pub pipe_spawn_x: f64,
    /// Pipes whose right edge falls below this x are removed.
    pub pipe_retire_x: f64,

    pub min_spawn_interval: f64,
    pub max_spawn_interval: f64,
    pub min_pipe_height: f64,
    pub pipe_height_range: f64,
    /// Gap reference used when no pipe is on screen.
    pub default_gap_reference: f64,
    /// Maximum drift of the gap reference between consecutive pipes.
    pub gap_reference_range: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            bird_x: BIRD_X,
            bird_start_y: BIRD_START_Y,
            bird_radius: BIRD_RADIUS,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            terminal_velocity: TERMINAL_VELOCITY,
            jump_cooldown: JUMP_COOLDOWN_SECONDS,
            pipe_width: PIPE_WIDTH,
            pipe_velocity: PIPE_VELOCITY,
            pipe_gap: PIPE_GAP,
            pipe_spawn_x: PIPE_SPAWN_X,
            pipe_retire_x: PIPE_RETIRE_X,
            min_spawn_interval: MIN_PIPE_SPAWN_INTERVAL,
            max_spawn_interval: MAX_PIPE_SPAWN_INTERVAL,
            min_pipe_height: MIN_PIPE_HEIGHT,
            pipe_height_range: PIPE_HEIGHT_RANGE,
            default_gap_reference: DEFAULT_GAP_REFERENCE,
            gap_reference_range: GAP_REFERENCE_RANGE,
        }
    }
}

impl GameConfig {
    /// Check that every value is usable by the simulation.
    ///
    /// Ranges are allowed to be zero (the sampled value is then constant) but
    /// never negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("bird_x", self.bird_x),
            ("bird_start_y", self.bird_start_y),
            ("bird_radius", self.bird_radius),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("terminal_velocity", self.terminal_velocity),
            ("jump_cooldown", self.jump_cooldown),
            ("pipe_width", self.pipe_width),
            ("pipe_velocity", self.pipe_velocity),
            ("pipe_gap", self.pipe_gap),
            ("pipe_spawn_x", self.pipe_spawn_x),
            ("pipe_retire_x", self.pipe_retire_x),
            ("min_spawn_interval", self.min_spawn_interval),
            ("max_spawn_interval", self.max_spawn_interval),
            ("min_pipe_height", self.min_pipe_height),
            ("pipe_height_range", self.pipe_height_range),
            ("default_gap_reference", self.default_gap_reference),
            ("gap_reference_range", self.gap_reference_range),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(invalid(field, format!("{} is not a finite number", value)));
            }
        }

        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("bird_radius", self.bird_radius),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(invalid(field, format!("must be positive, got {}", value)));
            }
        }

        let non_negative = [
            ("jump_cooldown", self.jump_cooldown),
            ("min_spawn_interval", self.min_spawn_interval),
            ("pipe_height_range", self.pipe_height_range),
            ("gap_reference_range", self.gap_reference_range),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(invalid(field, format!("must not be negative, got {}", value)));
            }
        }

        if self.max_spawn_interval < self.min_spawn_interval {
            return Err(invalid(
                "max_spawn_interval",
                format!(
                    "{} is below min_spawn_interval {}",
                    self.max_spawn_interval, self.min_spawn_interval
                ),
            ));
        }

        Ok(())
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path)
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

/// Where a session's configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Defaults => write!(f, "built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Directory holding the user's config and log files (`~/.flappy`).
pub fn app_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(APP_DIR_NAME))
}

/// Resolve the configuration for a session.
///
/// An explicit path must load cleanly. Without one, `~/.flappy/config.json`
/// is used when present; otherwise the defaults apply.
pub fn resolve_config(explicit: Option<&Path>) -> Result<(GameConfig, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        let config = GameConfig::load(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let default_path = match app_dir() {
        Ok(dir) => dir.join(CONFIG_FILE_NAME),
        Err(e) => {
            log::warn!("No home directory ({}), using default config", e);
            return Ok((GameConfig::default(), ConfigSource::Defaults));
        }
    };

    if default_path.exists() {
        let config = GameConfig::load(&default_path)?;
        Ok((config, ConfigSource::File(default_path)))
    } else {
        Ok((GameConfig::default(), ConfigSource::Defaults))
    }
}
