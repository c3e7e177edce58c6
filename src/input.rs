//! Keyboard handling for the game screen.
//!
//! Turns crossterm key events into discrete host actions. A jump is reported
//! once per key-down edge: when the terminal reports event kinds, repeats and
//! presses of a key that is still held are dropped.

use crate::game::types::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the host loop should do with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Forward to the simulation.
    Game(GameInput),
    /// Leave the game.
    Quit,
    /// Nothing to do (repeat, release, unbound key).
    Ignore,
}

fn is_jump_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('w') | KeyCode::Char('W')
    )
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Tracks the jump key so held keys do not retrigger.
#[derive(Debug, Default)]
pub struct InputTracker {
    /// Terminal delivers Release/Repeat kinds.
    reports_event_kinds: bool,
    jump_held: bool,
}

impl InputTracker {
    pub fn new(reports_event_kinds: bool) -> Self {
        Self {
            reports_event_kinds,
            jump_held: false,
        }
    }

    pub fn reports_event_kinds(&self) -> bool {
        self.reports_event_kinds
    }

    /// Classify one key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> HostAction {
        match key.kind {
            KeyEventKind::Release => {
                if is_jump_key(key.code) {
                    self.jump_held = false;
                }
                return HostAction::Ignore;
            }
            KeyEventKind::Repeat => return HostAction::Ignore,
            KeyEventKind::Press => {}
        }

        if is_quit_key(&key) {
            return HostAction::Quit;
        }

        if is_jump_key(key.code) {
            if self.reports_event_kinds {
                if self.jump_held {
                    return HostAction::Ignore;
                }
                self.jump_held = true;
            }
            return HostAction::Game(GameInput::Jump);
        }

        HostAction::Game(GameInput::Other)
    }
}
