//! Logger setup.
//!
//! The terminal is in raw mode while the game runs, so log output goes to
//! `~/.flappy/flappy.log` instead of stderr. `RUST_LOG` overrides the level.

use crate::core::config::app_dir;
use crate::core::constants::LOG_FILE_NAME;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

/// Open the log file in append mode, creating `~/.flappy` if needed.
fn open_log_file() -> io::Result<(fs::File, PathBuf)> {
    let dir = app_dir()?;
    fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Install the global logger. Returns the log file path when file logging
/// is active.
///
/// Never fails the caller: if the file cannot be opened, logging is left
/// disabled and a note is printed before the terminal is taken over.
pub fn init() -> Option<PathBuf> {
    let (file, path) = match open_log_file() {
        Ok(opened) => opened,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            return None;
        }
    };

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();

    match result {
        Ok(()) => Some(path),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    }
}
