//! Command-line parsing.

use std::path::PathBuf;

/// Options for a game session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayOptions {
    /// Fixed RNG seed for a reproducible pipe sequence.
    pub seed: Option<u64>,
    /// Explicit config file.
    pub config: Option<PathBuf>,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(PlayOptions),
    /// Open the terminal window, draw once, close it.
    Smoke,
    Version,
    Help,
}

pub const USAGE: &str = "\
Flappy Bird in the terminal

Usage: flappy [command] [options]

Commands:
  smoke            Open and close the game window (no gameplay)

Options:
  --seed <n>       Seed the pipe generator for a reproducible run
  --config <path>  Load tuning values from a JSON file
  --version        Show version information
  --help           Show this help message";

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = PlayOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "smoke" => return Ok(Command::Smoke),
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--config" => {
                let value = iter.next().ok_or("--config requires a path")?;
                options.config = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Play(options))
}
