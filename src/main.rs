use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::cli::{parse_args, Command, PlayOptions, USAGE};
use flappy::core::config::resolve_config;
use flappy::core::constants::{REALTIME_FRAME_MS, SMOKE_TEST_HOLD_MS};
use flappy::core::{GameConfig, GameLoop, Session};
use flappy::game::GameInput;
use flappy::input::{HostAction, InputTracker};
use flappy::logging;
use flappy::ui::{self, flappy_scene::HudInfo};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    match command {
        Command::Version => {
            println!(
                "flappy {} ({})",
                build_info::BUILD_DATE,
                build_info::BUILD_COMMIT
            );
            Ok(())
        }
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Smoke => {
            logging::init();
            with_terminal(|terminal, _| run_smoke_test(terminal))
        }
        Command::Play(options) => play(options),
    }
}

fn play(options: PlayOptions) -> io::Result<()> {
    let log_path = logging::init();

    let (config, source) = match resolve_config(options.config.as_deref()) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };

    let seed = options.seed.unwrap_or_else(rand::random);
    log::info!(
        "starting session: seed={} config={} log={:?}",
        seed,
        source,
        log_path
    );

    with_terminal(|terminal, reports_event_kinds| {
        run_game(terminal, &config, seed, InputTracker::new(reports_event_kinds))
    })
}

/// Take over the terminal for the duration of `body`, restoring it even
/// when `body` fails.
fn with_terminal<F>(body: F) -> io::Result<()>
where
    F: FnOnce(&mut Term, bool) -> io::Result<()>,
{
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    // Release/Repeat kinds let held keys be told apart from fresh presses.
    let reports_event_kinds = supports_keyboard_enhancement().unwrap_or(false);
    if reports_event_kinds {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                | KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
        ))?;
    }
    log::debug!("keyboard event kinds reported: {}", reports_event_kinds);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = body(&mut terminal, reports_event_kinds);

    if reports_event_kinds {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Frame loop: measure dt, advance, draw, then poll input for the rest of
/// the frame.
fn run_game(
    terminal: &mut Term,
    config: &GameConfig,
    seed: u64,
    mut tracker: InputTracker,
) -> io::Result<()> {
    let mut session = Session::new(config.clone(), StdRng::seed_from_u64(seed));
    let frame = Duration::from_millis(REALTIME_FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_frame).as_secs_f64();
        last_frame = frame_start;

        // Frozen once over; the last frame keeps being drawn.
        session.advance(dt);

        let snapshot = session.snapshot();
        let hud = HudInfo {
            elapsed: session.game().elapsed,
            seed,
            collision: session.game().collision,
        };
        terminal.draw(|f| ui::draw_game(f, &snapshot, config, &hud))?;

        let deadline = frame_start + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                match tracker.handle_key(key) {
                    HostAction::Quit => {
                        log::info!("player quit after {:.2}s", session.game().elapsed);
                        return Ok(());
                    }
                    HostAction::Game(GameInput::Jump) => {
                        session.on_jump_pressed();
                    }
                    HostAction::Game(GameInput::Other) | HostAction::Ignore => {}
                }
            }
        }
    }
}

/// Draw one empty window and close it again after a short hold or any key.
fn run_smoke_test(terminal: &mut Term) -> io::Result<()> {
    terminal.draw(ui::draw_smoke_test)?;
    log::info!("smoke test window drawn");

    if event::poll(Duration::from_millis(SMOKE_TEST_HOLD_MS))? {
        let _ = event::read()?;
    }
    Ok(())
}
