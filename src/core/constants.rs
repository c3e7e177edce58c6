// World geometry (y = 0 is the ground, y grows upward)
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;

// Bird
pub const BIRD_X: f64 = 50.0;
pub const BIRD_START_Y: f64 = 250.0;
pub const BIRD_RADIUS: f64 = 15.0;

// Bird physics (units/s and units/s²)
pub const GRAVITY: f64 = -1000.0;
pub const JUMP_VELOCITY: f64 = 500.0;
pub const TERMINAL_VELOCITY: f64 = 250.0; // upward speed cap only
pub const JUMP_COOLDOWN_SECONDS: f64 = 0.1;

// Pipes
pub const PIPE_WIDTH: f64 = 50.0;
pub const PIPE_VELOCITY: f64 = 200.0;
pub const PIPE_GAP: f64 = 100.0;
pub const PIPE_SPAWN_X: f64 = 800.0;
pub const PIPE_RETIRE_X: f64 = -200.0;

// Pipe spawning
pub const MIN_PIPE_SPAWN_INTERVAL: f64 = 1.0;
pub const MAX_PIPE_SPAWN_INTERVAL: f64 = 4.0;
pub const MIN_PIPE_HEIGHT: f64 = 50.0;
pub const PIPE_HEIGHT_RANGE: f64 = 200.0;
pub const DEFAULT_GAP_REFERENCE: f64 = 50.0;
pub const GAP_REFERENCE_RANGE: f64 = 200.0;

// Host loop
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
pub const SMOKE_TEST_HOLD_MS: u64 = 1500;

// Files under the per-user directory
pub const APP_DIR_NAME: &str = ".flappy";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "flappy.log";
