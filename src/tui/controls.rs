//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Right => app.increase_wind(),
        KeyCode::Left => app.decrease_wind(),
        KeyCode::Char('+' | '=') => app.coarser_step(),
        KeyCode::Char('-') => app.finer_step(),
        KeyCode::Char('i') => app.toggle_interpolation(),
        KeyCode::Char('1') => app.switch_preset("reference"),
        KeyCode::Char('2') => app.switch_preset("reference_cubic"),
        KeyCode::Char('3') => app.switch_preset("onshore"),
        _ => {}
    }
}
