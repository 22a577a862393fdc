use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, ExitKind};

/// Handle one key press, then re-sort so the selection follows its key
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl-C arrives as a key
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.exit = Some(ExitKind::Abort);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.exit = Some(ExitKind::Quit),
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Left => app.adjust_selected(-1),
        KeyCode::Right => app.adjust_selected(1),
        _ => {}
    }

    app.resort();
}
