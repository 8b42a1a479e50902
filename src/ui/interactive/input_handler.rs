//! Keyboard input mapping for the interactive UI.
//!
//! - Left/Right: previous/next matchup, or home team in custom mode
//! - Up/Down: away team in custom mode
//! - Shift + Left/Right: previous/next week
//! - `m` mode, `r` refresh, `q`/Esc quit

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    ToggleMode,
    Previous,
    Next,
    PreviousAway,
    NextAway,
    PreviousWeek,
    NextWeek,
    Ignored,
}

/// Maps a key event to an action. Only presses count, so key repeat/release
/// reports on some platforms do not double-step.
pub fn action_for_key(key_event: &KeyEvent) -> Action {
    if key_event.kind != KeyEventKind::Press {
        return Action::Ignored;
    }

    let shift = key_event.modifiers.contains(KeyModifiers::SHIFT);
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('m') => Action::ToggleMode,
        KeyCode::Left if shift => {
            tracing::debug!("Week navigation key detected: Shift + Left");
            Action::PreviousWeek
        }
        KeyCode::Right if shift => {
            tracing::debug!("Week navigation key detected: Shift + Right");
            Action::NextWeek
        }
        KeyCode::Left => Action::Previous,
        KeyCode::Right => Action::Next,
        KeyCode::Up => Action::PreviousAway,
        KeyCode::Down => Action::NextAway,
        _ => Action::Ignored,
    }
}
